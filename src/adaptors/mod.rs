//! Built-in adaptor closures
//!
//! Lazy slicing (`take`, `skip`), per-item transformation (`map`), and the
//! eager terminals (`to_vec`, `count`). Flattening lives in
//! [`join`](crate::join).

pub mod collect;
pub mod map;
pub mod skip;
pub mod take;

pub use collect::{count, to_vec, Count, ToVec};
pub use map::{map, Map};
pub use skip::{skip, Skip};
pub use take::{take, Take};
