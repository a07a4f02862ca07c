//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use std::sync::Mutex;

use seqpipe::declare_adaptor;
use seqpipe::prelude::*;

/// Drops a rung-dependent prefix: nothing on the shared rung, one item on
/// the exclusive rung, two on the consuming rung. The first surviving item
/// therefore tags which convention ran.
#[derive(Debug, Clone, Copy)]
pub struct RungSkip;

declare_adaptor!(RungSkip);

impl<S: Sequence> ApplyOnce<S> for RungSkip {
    type Output = std::iter::Skip<S::IntoIter>;

    fn apply_once(self, seq: S) -> Self::Output {
        seq.into_iter().skip(2)
    }
}

impl<S: Sequence> ApplyMut<S> for RungSkip {
    fn apply_mut(&mut self, seq: S) -> Self::Output {
        seq.into_iter().skip(1)
    }
}

impl<S: Sequence> Apply<S> for RungSkip {
    fn apply(&self, seq: S) -> Self::Output {
        seq.into_iter().skip(0)
    }
}

/// Terminal closure implementing only the consuming rung.
#[derive(Debug, Clone, Copy)]
pub struct OnceOnly;

declare_adaptor!(OnceOnly);

impl<S: Sequence> ApplyOnce<S> for OnceOnly {
    type Output = Vec<S::Item>;

    fn apply_once(self, seq: S) -> Self::Output {
        seq.into_iter().collect()
    }
}

/// Collecting closure that counts its applications; the shared rung is
/// deliberately absent.
#[derive(Debug, Clone)]
pub struct Tally {
    pub applications: usize,
}

impl Tally {
    pub fn new() -> Self {
        Tally { applications: 0 }
    }
}

declare_adaptor!(Tally);

impl<S: Sequence> ApplyOnce<S> for Tally {
    type Output = Vec<S::Item>;

    fn apply_once(mut self, seq: S) -> Self::Output {
        self.apply_mut(seq)
    }
}

impl<S: Sequence> ApplyMut<S> for Tally {
    fn apply_mut(&mut self, seq: S) -> Self::Output {
        self.applications += 1;
        seq.into_iter().collect()
    }
}

/// Pass-through stage owning an unclonable token; full ladder, no copies.
#[derive(Debug)]
pub struct MoveOnly {
    _token: Mutex<()>,
}

/// A fresh move-only stage.
pub fn move_only() -> MoveOnly {
    MoveOnly {
        _token: Mutex::new(()),
    }
}

declare_adaptor!(MoveOnly);

impl<S: Sequence> ApplyOnce<S> for MoveOnly {
    type Output = S;

    fn apply_once(self, seq: S) -> S {
        seq
    }
}

impl<S: Sequence> ApplyMut<S> for MoveOnly {
    fn apply_mut(&mut self, seq: S) -> S {
        seq
    }
}

impl<S: Sequence> Apply<S> for MoveOnly {
    fn apply(&self, seq: S) -> S {
        seq
    }
}

/// Pass-through stage that clones but does not copy.
#[derive(Debug, Clone)]
pub struct CloneOnly {
    _tag: String,
}

/// A fresh clone-only stage.
pub fn clone_only() -> CloneOnly {
    CloneOnly {
        _tag: String::from("stage"),
    }
}

declare_adaptor!(CloneOnly);

impl<S: Sequence> ApplyOnce<S> for CloneOnly {
    type Output = S;

    fn apply_once(self, seq: S) -> S {
        seq
    }
}

impl<S: Sequence> ApplyMut<S> for CloneOnly {
    fn apply_mut(&mut self, seq: S) -> S {
        seq
    }
}

impl<S: Sequence> Apply<S> for CloneOnly {
    fn apply(&self, seq: S) -> S {
        seq
    }
}
