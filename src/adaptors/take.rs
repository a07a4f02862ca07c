//! Prefix slicing

use crate::apply::{Apply, ApplyMut, ApplyOnce};
use crate::profile::{AdaptorProfile, Profiled};
use crate::seq::Sequence;

/// Lazily yields the first `n` items of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Take {
    n: usize,
}

/// Keep only the first `n` items.
pub fn take(n: usize) -> Take {
    Take { n }
}

crate::declare_adaptor!(Take);

impl<S: Sequence> ApplyOnce<S> for Take {
    type Output = core::iter::Take<S::IntoIter>;

    fn apply_once(self, seq: S) -> Self::Output {
        seq.into_iter().take(self.n)
    }
}

impl<S: Sequence> ApplyMut<S> for Take {
    fn apply_mut(&mut self, seq: S) -> Self::Output {
        seq.into_iter().take(self.n)
    }
}

impl<S: Sequence> Apply<S> for Take {
    fn apply(&self, seq: S) -> Self::Output {
        seq.into_iter().take(self.n)
    }
}

impl Profiled for Take {
    fn profile() -> AdaptorProfile {
        AdaptorProfile::describe::<Take>()
            .claim::<Take>()
            .accepts::<Vec<i32>>()
            .finish()
    }
}
