//! Call conventions
//!
//! Closures apply to sequences through a three-rung ladder mirroring the
//! `Fn` family: [`ApplyOnce`] consumes the closure, [`ApplyMut`] borrows it
//! exclusively, [`Apply`] borrows it shared. Each rung is opted into
//! independently and delegation never crosses rungs; an unimplemented rung
//! is a missing bound at the call site, not a silent downgrade.
//!
//! Borrows of a closure participate the way `&F` and `&mut F` do for the
//! `Fn` family: a shared borrow carries all three rungs when the closure
//! has the shared rung, an exclusive borrow carries the lower two when the
//! closure has the exclusive rung. The call site picks the convention by
//! how it borrows; nothing is synthesized.

use crate::seq::Sequence;

/// Apply a closure to a sequence, consuming the closure.
///
/// The root rung: every closure in the protocol implements at least this.
/// `Output` is fixed per closure and sequence type, and is shared by the
/// borrowing rungs.
pub trait ApplyOnce<S: Sequence>: Sized {
    /// Result of the application.
    type Output;

    /// Consume the closure and transform `seq`.
    fn apply_once(self, seq: S) -> Self::Output;
}

/// Apply a closure through an exclusive borrow.
///
/// ```compile_fail
/// use seqpipe::prelude::*;
///
/// let buf = String::from("tag");
/// let once = closure(move |s: Vec<i32>| {
///     drop(buf);
///     s
/// });
/// let mut pipeline = once | to_vec();
/// let _ = vec![1, 2].pipe(&mut pipeline); // the consuming rung does not lift
/// ```
pub trait ApplyMut<S: Sequence>: ApplyOnce<S> {
    /// Transform `seq`, leaving the closure reusable.
    fn apply_mut(&mut self, seq: S) -> Self::Output;
}

/// Apply a closure through a shared borrow.
///
/// ```compile_fail
/// use seqpipe::prelude::*;
///
/// let mut seen = 0usize;
/// let tally = closure(move |s: Vec<i32>| {
///     seen += s.len();
///     s
/// });
/// let pipeline = tally | to_vec();
/// let _ = vec![1, 2].pipe(&pipeline); // the exclusive rung does not lift
/// ```
pub trait Apply<S: Sequence>: ApplyMut<S> {
    /// Transform `seq` without touching closure state.
    fn apply(&self, seq: S) -> Self::Output;
}

// ─── borrow forwarding ──────────────────────────────────────────────────────

impl<'a, S: Sequence, C: Apply<S>> ApplyOnce<S> for &'a C {
    type Output = <C as ApplyOnce<S>>::Output;

    fn apply_once(self, seq: S) -> Self::Output {
        C::apply(self, seq)
    }
}

impl<'a, S: Sequence, C: Apply<S>> ApplyMut<S> for &'a C {
    fn apply_mut(&mut self, seq: S) -> Self::Output {
        C::apply(*self, seq)
    }
}

impl<'a, S: Sequence, C: Apply<S>> Apply<S> for &'a C {
    fn apply(&self, seq: S) -> Self::Output {
        C::apply(*self, seq)
    }
}

impl<'a, S: Sequence, C: ApplyMut<S>> ApplyOnce<S> for &'a mut C {
    type Output = <C as ApplyOnce<S>>::Output;

    fn apply_once(self, seq: S) -> Self::Output {
        C::apply_mut(self, seq)
    }
}

impl<'a, S: Sequence, C: ApplyMut<S>> ApplyMut<S> for &'a mut C {
    fn apply_mut(&mut self, seq: S) -> Self::Output {
        C::apply_mut(*self, seq)
    }
}
