//! Composable, lazily-applied sequence adaptors with pipe-style composition.
//!
//! Everything flows through one protocol: a *sequence* (anything that
//! iterates) is piped into an *adaptor closure*, and closures compose with
//! `|` into closures. Application is lazy wherever the adaptor allows it,
//! and a composed pipeline is itself a first-class closure.
//!
//! ```
//! use seqpipe::prelude::*;
//!
//! let front: Vec<i32> = vec![0, 1, 2, 3].pipe(take(1) | to_vec());
//! assert_eq!(front, vec![0]);
//!
//! // Staged and fused application agree:
//! let pipeline = skip(1) | take(3) | to_vec();
//! assert_eq!(vec![0, 1, 2, 3].pipe(pipeline), vec![1, 2, 3]);
//! ```
//!
//! Three things make the protocol tick:
//!
//! - a three-rung calling-convention ladder ([`ApplyOnce`] / [`ApplyMut`] /
//!   [`Apply`]) with matching-rung delegation and no fallback between rungs;
//! - capability conjunction on [`Compose`]: a pipeline is `Clone`, `Copy`,
//!   or re-applicable exactly when every stage is;
//! - a declarative conformance layer ([`profile`]) answering "is this type
//!   an adaptor closure" as a plain boolean backed by diagnostics.

pub mod adaptors;
pub mod apply;
pub mod closure;
pub mod compose;
pub mod join;
pub mod pipe;
pub mod profile;
pub mod seq;

pub use adaptors::{count, map, skip, take, to_vec, Count, Map, Skip, Take, ToVec};
pub use apply::{Apply, ApplyMut, ApplyOnce};
pub use closure::{closure, Adaptor, AdaptorMark, Closure};
pub use compose::{Compose, Then};
pub use join::{join, FlatCursor, Join, JoinIter};
pub use pipe::Pipe;
pub use profile::classify::{conforms, Classifier, ClassifyReport};
pub use profile::{AdaptorProfile, Profiled};
pub use seq::{Sequence, Viewable};

/// Glob-import surface: the protocol vocabulary plus the built-in adaptors.
pub mod prelude {
    pub use crate::adaptors::{count, map, skip, take, to_vec};
    pub use crate::apply::{Apply, ApplyMut, ApplyOnce};
    pub use crate::closure::{closure, Adaptor, AdaptorMark};
    pub use crate::compose::Then;
    pub use crate::join::join;
    pub use crate::pipe::Pipe;
    pub use crate::seq::{Sequence, Viewable};
}
