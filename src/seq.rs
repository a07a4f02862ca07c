//! Sequence classification
//!
//! The argument universe of the protocol: anything that can be turned into
//! an iterator is a [`Sequence`], and sequences that can additionally be
//! traversed from a shared borrow are [`Viewable`].

/// A value that can be consumed into an iterator.
///
/// Blanket-implemented for every [`IntoIterator`] type; adaptor closures
/// accept their input through this bound. References count: `&Vec<T>` is a
/// sequence in its own right and pipes without consuming the vector.
pub trait Sequence: IntoIterator {}

impl<S: IntoIterator> Sequence for S {}

/// A sequence that can be traversed again from a shared borrow.
///
/// Collections are viewable; consume-once sources (bare iterators) are
/// [`Sequence`] but not viewable:
///
/// ```compile_fail
/// use seqpipe::seq::Viewable;
///
/// fn probe<S: Viewable>(_: &S) {}
///
/// let once = std::iter::once(1);
/// probe(&once); // a bare iterator has no borrowing traversal
/// ```
pub trait Viewable: Sequence {
    /// Borrowing iterator produced by [`view`](Viewable::view).
    type Viewer<'a>: Iterator
    where
        Self: 'a;

    /// Iterate the sequence without consuming it.
    fn view(&self) -> Self::Viewer<'_>;
}

impl<S: Sequence> Viewable for S
where
    for<'a> &'a S: IntoIterator,
{
    type Viewer<'a> = <&'a S as IntoIterator>::IntoIter
    where
        S: 'a;

    fn view(&self) -> Self::Viewer<'_> {
        IntoIterator::into_iter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts_sequence<S: Sequence>(_: &S) {}

    #[test]
    fn test_collections_and_iterators_are_sequences() {
        accepts_sequence(&vec![1, 2, 3]);
        accepts_sequence(&(0..4));
        accepts_sequence(&"abc".chars());
    }

    #[test]
    fn test_references_are_sequences_in_their_own_right() {
        let data = vec![1, 2, 3];
        let by_ref: &Vec<i32> = &data;
        accepts_sequence(&by_ref);
    }

    #[test]
    fn test_view_leaves_the_sequence_intact() {
        let data = vec![1, 2, 3];
        let first: Option<&i32> = data.view().next();
        assert_eq!(first, Some(&1));
        assert_eq!(data.into_iter().sum::<i32>(), 6);
    }

    #[test]
    fn test_view_iterates_all_items() {
        let data = vec![10, 20];
        let seen: Vec<i32> = data.view().copied().collect();
        assert_eq!(seen, vec![10, 20]);
    }
}
