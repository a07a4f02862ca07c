//! Composed closures
//!
//! `a | b` and `a.then(b)` build a [`Compose`] that applies `a` first and
//! feeds its result to `b`. Composition is pure state construction: the
//! operands only have to be adaptors, and whether the composite applies to
//! a particular sequence is settled rung by rung at the call site. A
//! composite delegates each rung to the same rung of both components, so a
//! missing rung anywhere removes that rung from the whole pipeline.

use core::ops::BitOr;

use crate::apply::{Apply, ApplyMut, ApplyOnce};
use crate::closure::{Adaptor, AdaptorMark};
use crate::seq::Sequence;

/// Two closures fused into one: the left applied first, the right to its
/// result.
///
/// Capabilities are conjunctive. The composite is `Clone` or `Copy` exactly
/// when both components are, so a move-only stage anywhere pins the whole
/// pipeline:
///
/// ```compile_fail
/// use seqpipe::prelude::*;
///
/// struct Token; // deliberately not Clone
///
/// let tag = Token;
/// let stamp = closure(move |s: Vec<i32>| {
///     let _hold = &tag;
///     s
/// });
/// let pipeline = take(2) | stamp;
/// let _copy = pipeline.clone(); // left part is Clone, right part is not
/// ```
///
/// A clone-only stage keeps the pipeline clonable but strips `Copy`:
///
/// ```compile_fail
/// use seqpipe::prelude::*;
///
/// let tag = String::from("stage");
/// let stamp = closure(move |s: Vec<i32>| {
///     let _hold = tag.len();
///     s
/// });
/// let pipeline = stamp | to_vec();
/// let _first = vec![1].pipe(pipeline);
/// let _second = vec![2].pipe(pipeline); // moved by the first call
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Compose<A, B> {
    first: A,
    second: B,
}

impl<A: Adaptor, B: Adaptor> Compose<A, B> {
    /// Fuse `first` and `second`. Equivalent to `first | second`.
    pub fn new(first: A, second: B) -> Self {
        Compose { first, second }
    }

    /// Take the composite apart again, in application order.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> AdaptorMark<Compose<A, B>> for Compose<A, B> {}

impl<A: Adaptor, B: Adaptor, Rhs: Adaptor> BitOr<Rhs> for Compose<A, B> {
    type Output = Compose<Compose<A, B>, Rhs>;

    fn bitor(self, rhs: Rhs) -> Self::Output {
        Compose::new(self, rhs)
    }
}

impl<S, A, B> ApplyOnce<S> for Compose<A, B>
where
    S: Sequence,
    A: ApplyOnce<S>,
    A::Output: Sequence,
    B: ApplyOnce<A::Output>,
{
    type Output = <B as ApplyOnce<A::Output>>::Output;

    fn apply_once(self, seq: S) -> Self::Output {
        self.second.apply_once(self.first.apply_once(seq))
    }
}

impl<S, A, B> ApplyMut<S> for Compose<A, B>
where
    S: Sequence,
    A: ApplyMut<S>,
    A::Output: Sequence,
    B: ApplyMut<A::Output>,
{
    fn apply_mut(&mut self, seq: S) -> Self::Output {
        self.second.apply_mut(self.first.apply_mut(seq))
    }
}

impl<S, A, B> Apply<S> for Compose<A, B>
where
    S: Sequence,
    A: Apply<S>,
    A::Output: Sequence,
    B: Apply<A::Output>,
{
    fn apply(&self, seq: S) -> Self::Output {
        self.second.apply(self.first.apply(seq))
    }
}

/// Method-form composition, available on every adaptor.
pub trait Then: Adaptor {
    /// Compose so `self` applies first and `next` applies to its result.
    ///
    /// ```
    /// use seqpipe::prelude::*;
    ///
    /// let pipeline = skip(1).then(take(2)).then(to_vec());
    /// assert_eq!(vec![0, 1, 2, 3].pipe(pipeline), vec![1, 2]);
    /// ```
    fn then<B: Adaptor>(self, next: B) -> Compose<Self, B> {
        Compose::new(self, next)
    }
}

impl<T: Adaptor> Then for T {}
