//! Lazy flattening
//!
//! [`join()`] pipes a sequence of sequences into a [`JoinIter`], the lazy
//! flattening cursor: it walks the outer sequence one element at a time,
//! streams each inner sequence to exhaustion, and skips empty inners
//! without buffering anything.
//!
//! The cursor capability is deliberately non-extensible. [`FlatCursor`] is
//! sealed to [`JoinIter`] itself, and a type embedding a cursor inherits
//! neither `Iterator` nor `FlatCursor`:
//!
//! ```compile_fail
//! use seqpipe::prelude::*;
//! use seqpipe::join::{FlatCursor, JoinIter};
//!
//! struct Guarded(JoinIter<std::vec::IntoIter<Vec<i32>>>);
//!
//! fn wants_cursor<C: FlatCursor>(_: C) {}
//!
//! let cursor = vec![vec![1]].pipe(join());
//! wants_cursor(Guarded(cursor)); // wrappers inherit nothing
//! ```

use core::fmt;

use crate::apply::{Apply, ApplyMut, ApplyOnce};
use crate::profile::{AdaptorProfile, Profiled};
use crate::seq::Sequence;

mod sealed {
    pub trait Sealed {}
}

/// The lazy flattening cursor over an outer iterator `I`.
pub struct JoinIter<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    outer: I,
    inner: Option<<I::Item as IntoIterator>::IntoIter>,
}

impl<I> Iterator for JoinIter<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    type Item = <I::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(active) = self.inner.as_mut() {
                if let Some(item) = active.next() {
                    return Some(item);
                }
                self.inner = None;
            }
            self.inner = Some(self.outer.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Only the active inner sequence is known; the outer remainder is
        // unbounded from here.
        match &self.inner {
            Some(active) => (active.size_hint().0, None),
            None => (0, None),
        }
    }
}

impl<I> Clone for JoinIter<I>
where
    I: Iterator + Clone,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::IntoIter: Clone,
{
    fn clone(&self) -> Self {
        JoinIter {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<I> fmt::Debug for JoinIter<I>
where
    I: Iterator + fmt::Debug,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::IntoIter: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinIter")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<I> sealed::Sealed for JoinIter<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
}

/// Capability of the canonical flattening cursor.
///
/// Sealed: implemented by [`JoinIter`] and by nothing else, anywhere.
///
/// ```compile_fail
/// struct Pretender;
///
/// impl Iterator for Pretender {
///     type Item = i32;
///     fn next(&mut self) -> Option<i32> {
///         None
///     }
/// }
///
/// impl seqpipe::join::FlatCursor for Pretender {
///     fn mid_sequence(&self) -> bool {
///         false
///     } // the supertrait is private
/// }
/// ```
pub trait FlatCursor: Iterator + sealed::Sealed {
    /// Whether the cursor is currently positioned inside an inner sequence.
    fn mid_sequence(&self) -> bool;
}

impl<I> FlatCursor for JoinIter<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    fn mid_sequence(&self) -> bool {
        self.inner.is_some()
    }
}

/// Flattens a sequence of sequences by one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Join;

/// Flatten one nesting level lazily.
///
/// ```
/// use seqpipe::prelude::*;
///
/// let flat = vec![vec![1, 2], vec![3]].pipe(join() | to_vec());
/// assert_eq!(flat, vec![1, 2, 3]);
/// ```
pub fn join() -> Join {
    Join
}

crate::declare_adaptor!(Join);

impl<S> ApplyOnce<S> for Join
where
    S: Sequence,
    S::Item: IntoIterator,
{
    type Output = JoinIter<S::IntoIter>;

    fn apply_once(self, seq: S) -> Self::Output {
        JoinIter {
            outer: seq.into_iter(),
            inner: None,
        }
    }
}

impl<S> ApplyMut<S> for Join
where
    S: Sequence,
    S::Item: IntoIterator,
{
    fn apply_mut(&mut self, seq: S) -> Self::Output {
        JoinIter {
            outer: seq.into_iter(),
            inner: None,
        }
    }
}

impl<S> Apply<S> for Join
where
    S: Sequence,
    S::Item: IntoIterator,
{
    fn apply(&self, seq: S) -> Self::Output {
        JoinIter {
            outer: seq.into_iter(),
            inner: None,
        }
    }
}

impl Profiled for Join {
    fn profile() -> AdaptorProfile {
        AdaptorProfile::describe::<Join>()
            .claim::<Join>()
            .accepts::<Vec<Vec<i32>>>()
            .finish()
    }
}
