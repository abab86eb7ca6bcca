use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;

/// Identifies an element of a rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Id(u64);

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Hands out the ids of one view, starting from 1.
///
/// Every view numbers its elements on its own, so rendering the same payload
/// twice produces the same document.
#[derive(Debug, Default)]
pub(crate) struct IdSeq {
    last: u64,
}

impl IdSeq {
    pub(crate) fn new() -> IdSeq {
        Self::default()
    }

    pub(crate) fn next(&mut self) -> Id {
        self.last += 1;
        Id(self.last)
    }
}
