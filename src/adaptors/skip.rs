//! Prefix dropping

use crate::apply::{Apply, ApplyMut, ApplyOnce};
use crate::profile::{AdaptorProfile, Profiled};
use crate::seq::Sequence;

/// Lazily drops the first `n` items of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skip {
    n: usize,
}

/// Drop the first `n` items.
pub fn skip(n: usize) -> Skip {
    Skip { n }
}

crate::declare_adaptor!(Skip);

impl<S: Sequence> ApplyOnce<S> for Skip {
    type Output = core::iter::Skip<S::IntoIter>;

    fn apply_once(self, seq: S) -> Self::Output {
        seq.into_iter().skip(self.n)
    }
}

impl<S: Sequence> ApplyMut<S> for Skip {
    fn apply_mut(&mut self, seq: S) -> Self::Output {
        seq.into_iter().skip(self.n)
    }
}

impl<S: Sequence> Apply<S> for Skip {
    fn apply(&self, seq: S) -> Self::Output {
        seq.into_iter().skip(self.n)
    }
}

impl Profiled for Skip {
    fn profile() -> AdaptorProfile {
        AdaptorProfile::describe::<Skip>()
            .claim::<Skip>()
            .accepts::<Vec<i32>>()
            .finish()
    }
}
