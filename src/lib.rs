//! Reelcast - catch-and-reel fishing simulation core.
//!
//! The host game feeds a per-tick input sample into [`FishingSystem::tick`]
//! and implements the collaborator traits in [`host`]. Everything else
//! (catch odds, the reeling minigame, cast timers) lives here.

pub mod catalog;
pub mod core;
pub mod equipment;
pub mod fishing;
pub mod host;
pub mod reeling;
pub mod rewards;
pub mod session;
pub mod simulator;
pub mod zones;

pub use crate::core::{FishingConfig, FishingError, PlayerId, PlayerProfile, Pose, Result};
pub use host::FishingHost;
pub use session::{FishingEvent, FishingSystem, TickInput};
