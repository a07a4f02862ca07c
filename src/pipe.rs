//! Sequence-side application
//!
//! `seq.pipe(c)` is the application form of the protocol: identical to
//! `c.apply_once(seq)`. Borrowing the closure at the call site selects the
//! convention (`seq.pipe(&c)` runs the shared rung, `seq.pipe(&mut c)` the
//! exclusive one), while the sequence operand always moves through
//! unchanged, reference sequences included.

use crate::apply::ApplyOnce;
use crate::seq::Sequence;

/// Pipe a sequence into an adaptor closure.
///
/// Only sequences pipe; there is no entry point for anything else:
///
/// ```compile_fail
/// use seqpipe::prelude::*;
///
/// let _ = 5_i32.pipe(count()); // an integer is not a sequence
/// ```
pub trait Pipe: Sequence + Sized {
    /// Apply `closure` to `self`.
    ///
    /// ```
    /// use seqpipe::prelude::*;
    ///
    /// let front: Vec<i32> = vec![0, 1, 2, 3].pipe(take(1) | to_vec());
    /// assert_eq!(front, vec![0]);
    /// ```
    fn pipe<C: ApplyOnce<Self>>(self, closure: C) -> C::Output {
        closure.apply_once(self)
    }
}

impl<S: Sequence> Pipe for S {}
