//! Per-player fishing sessions: casting, line travel, jigging and reeling.

pub mod cast;
pub mod jig;
pub mod machine;
pub mod scheduler;
pub mod types;

pub use machine::{FishingEvent, FishingSystem};
pub use scheduler::{CancelToken, Scheduler};
pub use types::{PhaseKind, PlayerSession, SessionPhase, TickInput};
