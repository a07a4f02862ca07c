//! Per-item transformation

use crate::apply::{Apply, ApplyMut, ApplyOnce};
use crate::closure::{Adaptor, AdaptorMark};
use crate::compose::Compose;
use crate::profile::{AdaptorProfile, Profiled};
use crate::seq::Sequence;

/// Lazily transforms every item of a sequence with a captured function.
///
/// The consuming rung moves the function into the output iterator; the
/// borrowing rungs clone it, so repeat application needs `F: Clone`.
#[derive(Debug, Clone, Copy)]
pub struct Map<F> {
    f: F,
}

/// Transform each item with `f`.
pub fn map<F>(f: F) -> Map<F> {
    Map { f }
}

// Generic over the captured function, so the claim and the operator are
// spelled out instead of going through declare_adaptor!.
impl<F> AdaptorMark<Map<F>> for Map<F> {}

impl<F, Rhs: Adaptor> core::ops::BitOr<Rhs> for Map<F> {
    type Output = Compose<Map<F>, Rhs>;

    fn bitor(self, rhs: Rhs) -> Self::Output {
        Compose::new(self, rhs)
    }
}

impl<S, F, T> ApplyOnce<S> for Map<F>
where
    S: Sequence,
    F: FnMut(S::Item) -> T,
{
    type Output = core::iter::Map<S::IntoIter, F>;

    fn apply_once(self, seq: S) -> Self::Output {
        seq.into_iter().map(self.f)
    }
}

impl<S, F, T> ApplyMut<S> for Map<F>
where
    S: Sequence,
    F: FnMut(S::Item) -> T + Clone,
{
    fn apply_mut(&mut self, seq: S) -> Self::Output {
        seq.into_iter().map(self.f.clone())
    }
}

impl<S, F, T> Apply<S> for Map<F>
where
    S: Sequence,
    F: FnMut(S::Item) -> T + Clone,
{
    fn apply(&self, seq: S) -> Self::Output {
        seq.into_iter().map(self.f.clone())
    }
}

// A map stage is described per function instantiation; the Vec<i32>
// witness pins the item type, so any function over i32 items profiles.
impl<F, T> Profiled for Map<F>
where
    F: FnMut(i32) -> T + 'static,
{
    fn profile() -> AdaptorProfile {
        AdaptorProfile::describe::<Map<F>>()
            .claim::<Map<F>>()
            .accepts::<Vec<i32>>()
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptors::to_vec;
    use crate::pipe::Pipe;

    #[test]
    fn test_map_transforms_each_item() {
        let out: Vec<i32> = vec![1, 2, 3].pipe(map(|n: i32| n * 10)).collect();
        assert_eq!(out, vec![10, 20, 30]);
    }

    #[test]
    fn test_map_changes_the_item_type() {
        let out = vec![1, 22, 333].pipe(map(|n: i32| n.to_string()) | to_vec());
        assert_eq!(out, vec!["1", "22", "333"]);
    }

    #[test]
    fn test_map_applies_repeatedly_through_a_borrow() {
        let double = map(|n: i32| n * 2);
        let first: Vec<i32> = vec![1, 2].pipe(&double).collect();
        let second: Vec<i32> = vec![3].pipe(&double).collect();
        assert_eq!(first, vec![2, 4]);
        assert_eq!(second, vec![6]);
    }

    #[test]
    fn test_map_instantiations_conform() {
        use crate::profile::classify::conforms;

        assert!(conforms::<Map<fn(i32) -> i32>>());
        assert!(conforms::<Map<fn(i32) -> String>>());
    }

    #[test]
    fn test_map_is_lazy() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let mut out = vec![1, 2, 3].pipe(map(|n: i32| {
            calls.set(calls.get() + 1);
            n + 1
        }));
        assert_eq!(out.next(), Some(2));
        assert_eq!(calls.get(), 1);
    }
}
