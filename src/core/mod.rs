//! Shared constants, configuration, errors and player-facing primitives.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::FishingConfig;
pub use error::{FishingError, Result};
pub use types::{PlayerId, PlayerProfile, Pose};
