//! Per-mode transition table.
//!
//! `step` always receives the driven track first and returns the new
//! `(driven, other)` pair, so every rule is written once and applied to
//! either region.

use super::{FRONT_COVER_INDEX, NavDirection};
use crate::config::BoundaryMode;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Lane {
    pub index: i32,
    pub len: i32,
}

impl Lane {
    pub(super) const fn new(index: i32, len: u16) -> Self {
        Self {
            index,
            len: len as i32,
        }
    }

    const fn last(self) -> i32 {
        self.len - 1
    }
}

pub(super) fn step(
    mode: BoundaryMode,
    direction: NavDirection,
    driven: Lane,
    other: Lane,
) -> (i32, i32) {
    match (mode, direction) {
        (BoundaryMode::Wrap, NavDirection::Forward) => {
            ((driven.index + 1).rem_euclid(driven.len), other.index)
        }
        (BoundaryMode::Wrap, NavDirection::Backward) => {
            ((driven.index - 1).rem_euclid(driven.len), other.index)
        }
        (BoundaryMode::ClampSync | BoundaryMode::LengthMismatchTolerant, NavDirection::Forward) => {
            clamp_forward(mode, driven, other)
        }
        (BoundaryMode::ClampSync | BoundaryMode::LengthMismatchTolerant, NavDirection::Backward) => {
            clamp_backward(mode, driven, other)
        }
        (BoundaryMode::CoverSentinel | BoundaryMode::CoverWrap, NavDirection::Forward) => {
            cover_forward(mode, driven, other)
        }
        (BoundaryMode::CoverSentinel | BoundaryMode::CoverWrap, NavDirection::Backward) => {
            cover_backward(driven, other)
        }
    }
}

/// Sync target on the other track for a page `offset` from the start
/// (`offset >= 0`) or from the end (`offset < 0`).
fn sync_target(mode: BoundaryMode, driven: Lane, other: Lane, offset: i32) -> i32 {
    match mode {
        // Equal lengths are enforced at construction, so the driven length
        // stands in for the other track's.
        BoundaryMode::ClampSync => {
            if offset >= 0 {
                offset
            } else {
                driven.len + offset
            }
        }
        _ => {
            let target = if offset >= 0 { offset } else { other.len + offset };
            target.clamp(0, other.last())
        }
    }
}

fn clamp_forward(mode: BoundaryMode, driven: Lane, other: Lane) -> (i32, i32) {
    let next = driven.index + 1;

    if next >= driven.last() {
        // End of the book: both tracks park on their last page.
        (driven.last(), sync_target(mode, driven, other, -1))
    } else if next == 1 {
        (next, sync_target(mode, driven, other, 1))
    } else {
        (next, other.index)
    }
}

fn clamp_backward(mode: BoundaryMode, driven: Lane, other: Lane) -> (i32, i32) {
    let next = driven.index - 1;

    if next <= 0 {
        (0, 0)
    } else if next == driven.len - 2 {
        (next, sync_target(mode, driven, other, -2))
    } else {
        (next, other.index)
    }
}

fn cover_forward(mode: BoundaryMode, driven: Lane, other: Lane) -> (i32, i32) {
    let next = driven.index + 1;

    if next == 0 {
        // Leaving the front cover opens both tracks on page zero.
        (0, 0)
    } else if next >= driven.len {
        match mode {
            BoundaryMode::CoverWrap => (0, 0),
            _ => (driven.len, other.len),
        }
    } else {
        (next, other.index)
    }
}

fn cover_backward(driven: Lane, other: Lane) -> (i32, i32) {
    let next = driven.index - 1;

    if next < 0 {
        (FRONT_COVER_INDEX, FRONT_COVER_INDEX)
    } else if next == driven.last() {
        // Back from the back cover: the other track lands on its own last page.
        (next, other.last())
    } else {
        (next, other.index)
    }
}
