//! Reeling session state.

use super::patterns::{MovementPattern, PatternController};
use crate::core::constants::{BAR_WIDTH, REEL_PROGRESS_MAX};
use crate::fishing::CaughtFish;

/// Outcome of a reeling tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReelResult {
    Continue,
    Caught,
    Escaped,
}

/// One player's live reel. Created on a bite, dropped when it ends.
#[derive(Debug, Clone)]
pub struct ReelingSession {
    pub active: bool,
    pub fish: CaughtFish,
    /// Fish marker position on the track, 0.0 to 1.0.
    pub marker: f64,
    /// Signed marker velocity per tick.
    pub velocity: f64,
    /// Left edge of the capture bar; the bar spans `BAR_WIDTH` to the right.
    pub bar: f64,
    pub progress: f64,
    /// Ticks since the reel started.
    pub ticks: u64,
    pub controller: PatternController,
}

impl ReelingSession {
    pub fn pattern(&self) -> MovementPattern {
        self.controller.pattern()
    }

    pub fn in_zone(&self) -> bool {
        self.marker >= self.bar && self.marker <= self.bar + BAR_WIDTH
    }

    /// Terminal result once the session has ended, `Continue` while live.
    pub fn result(&self) -> ReelResult {
        if self.active {
            ReelResult::Continue
        } else if self.progress >= REEL_PROGRESS_MAX {
            ReelResult::Caught
        } else {
            ReelResult::Escaped
        }
    }
}
