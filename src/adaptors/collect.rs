//! Eager terminals
//!
//! [`ToVec`] materializes a sequence; [`Count`] reduces it to its length.
//! A closure's output does not have to be a sequence: `count()` ends a
//! pipeline, and while further composition still constructs, no rung can
//! apply past the bare number.

use crate::apply::{Apply, ApplyMut, ApplyOnce};
use crate::profile::{AdaptorProfile, Profiled};
use crate::seq::Sequence;

/// Eagerly collects a sequence into a `Vec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToVec;

/// Collect the sequence into a `Vec`.
pub fn to_vec() -> ToVec {
    ToVec
}

crate::declare_adaptor!(ToVec);

impl<S: Sequence> ApplyOnce<S> for ToVec {
    type Output = Vec<S::Item>;

    fn apply_once(self, seq: S) -> Self::Output {
        seq.into_iter().collect()
    }
}

impl<S: Sequence> ApplyMut<S> for ToVec {
    fn apply_mut(&mut self, seq: S) -> Self::Output {
        seq.into_iter().collect()
    }
}

impl<S: Sequence> Apply<S> for ToVec {
    fn apply(&self, seq: S) -> Self::Output {
        seq.into_iter().collect()
    }
}

impl Profiled for ToVec {
    fn profile() -> AdaptorProfile {
        AdaptorProfile::describe::<ToVec>()
            .claim::<ToVec>()
            .accepts::<Vec<i32>>()
            .finish()
    }
}

/// Eagerly counts the items of a sequence.
///
/// ```
/// use seqpipe::prelude::*;
///
/// let stuck = count() | to_vec(); // composition is pure state construction
/// let _ = stuck;
/// ```
///
/// ```compile_fail
/// use seqpipe::prelude::*;
///
/// let stuck = count() | to_vec();
/// let _ = vec![1, 2].pipe(stuck); // nothing applies past a bare usize
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Count;

/// Count the items, ending the pipeline with a bare number.
pub fn count() -> Count {
    Count
}

crate::declare_adaptor!(Count);

impl<S: Sequence> ApplyOnce<S> for Count {
    type Output = usize;

    fn apply_once(self, seq: S) -> Self::Output {
        seq.into_iter().count()
    }
}

impl<S: Sequence> ApplyMut<S> for Count {
    fn apply_mut(&mut self, seq: S) -> Self::Output {
        seq.into_iter().count()
    }
}

impl<S: Sequence> Apply<S> for Count {
    fn apply(&self, seq: S) -> Self::Output {
        seq.into_iter().count()
    }
}

impl Profiled for Count {
    fn profile() -> AdaptorProfile {
        AdaptorProfile::describe::<Count>()
            .claim::<Count>()
            .accepts::<Vec<i32>>()
            .finish()
    }
}
