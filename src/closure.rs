//! Closure marking
//!
//! Membership in the adaptor protocol is claimed, not inferred: a type marks
//! itself with [`AdaptorMark`] and thereby classifies as an [`Adaptor`].
//! [`declare_adaptor!`](crate::declare_adaptor) emits the claim together
//! with the `|` composition operator; [`closure`] lifts an ordinary `Fn`
//! closure into the protocol.

use crate::apply::{Apply, ApplyMut, ApplyOnce};
use crate::seq::Sequence;

/// Protocol-membership claim for `D`.
///
/// A conforming adaptor implements exactly `AdaptorMark<Self> for Self` and
/// nothing else; the claim carries no behavior. The type system cannot rule
/// out stray claims (a mark for some other type, or a mark on a sequence),
/// so exactness is checked by the descriptor layer in
/// [`profile`](crate::profile).
pub trait AdaptorMark<D: ?Sized> {}

/// A type that claims the protocol for itself.
///
/// Blanket-derived from the self-claim; never implement this directly.
pub trait Adaptor: AdaptorMark<Self> + Sized {}

impl<T: AdaptorMark<T> + Sized> Adaptor for T {}

/// Declare `$ty` as an adaptor closure.
///
/// Emits the self-claim plus the `|` composition operator, which is the
/// whole of what a type needs to participate; the calling rungs are then
/// implemented by hand for whatever conventions the closure supports.
///
/// ```
/// use seqpipe::prelude::*;
///
/// #[derive(Debug, Clone, Copy)]
/// struct Reverse;
///
/// seqpipe::declare_adaptor!(Reverse);
///
/// impl<S: Sequence> ApplyOnce<S> for Reverse
/// where
///     S::IntoIter: DoubleEndedIterator,
/// {
///     type Output = std::iter::Rev<S::IntoIter>;
///
///     fn apply_once(self, seq: S) -> Self::Output {
///         seq.into_iter().rev()
///     }
/// }
///
/// let backwards: Vec<i32> = vec![1, 2, 3].pipe(Reverse | to_vec());
/// assert_eq!(backwards, vec![3, 2, 1]);
/// ```
#[macro_export]
macro_rules! declare_adaptor {
    ($ty:ty) => {
        impl $crate::AdaptorMark<$ty> for $ty {}

        impl<Rhs: $crate::Adaptor> ::core::ops::BitOr<Rhs> for $ty {
            type Output = $crate::Compose<$ty, Rhs>;

            fn bitor(self, rhs: Rhs) -> Self::Output {
                $crate::Compose::new(self, rhs)
            }
        }
    };
}

/// An ordinary function or closure lifted into the protocol.
///
/// The rung follows the `Fn` rung of the wrapped function: a `Fn` closure
/// applies through any borrow, a `FnMut` closure needs exclusive access, a
/// `FnOnce` closure applies exactly once.
#[derive(Debug, Clone, Copy)]
pub struct Closure<F>(F);

/// Lift `f` into the protocol.
///
/// ```
/// use seqpipe::prelude::*;
///
/// let longest = closure(|s: Vec<&'static str>| s.into_iter().max_by_key(|w| w.len()));
/// assert_eq!(vec!["a", "bbb", "cc"].pipe(longest), Some("bbb"));
/// ```
pub fn closure<F>(f: F) -> Closure<F> {
    Closure(f)
}

impl<F> AdaptorMark<Closure<F>> for Closure<F> {}

impl<F, Rhs: Adaptor> core::ops::BitOr<Rhs> for Closure<F> {
    type Output = crate::compose::Compose<Closure<F>, Rhs>;

    fn bitor(self, rhs: Rhs) -> Self::Output {
        crate::compose::Compose::new(self, rhs)
    }
}

impl<F, S, R> ApplyOnce<S> for Closure<F>
where
    S: Sequence,
    F: FnOnce(S) -> R,
{
    type Output = R;

    fn apply_once(self, seq: S) -> Self::Output {
        (self.0)(seq)
    }
}

impl<F, S, R> ApplyMut<S> for Closure<F>
where
    S: Sequence,
    F: FnMut(S) -> R,
{
    fn apply_mut(&mut self, seq: S) -> Self::Output {
        (self.0)(seq)
    }
}

impl<F, S, R> Apply<S> for Closure<F>
where
    S: Sequence,
    F: Fn(S) -> R,
{
    fn apply(&self, seq: S) -> Self::Output {
        (self.0)(seq)
    }
}
