//! Player identity and the per-tick pose sample.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a connected player, issued by the host game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PlayerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Leveling snapshot read from the progression collaborator before a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub level: u32,
    pub experience: u64,
}

impl PlayerProfile {
    pub fn new(level: u32, experience: u64) -> Self {
        Self { level, experience }
    }
}

/// Where the caster's eyes are and which way they look.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub eye: DVec3,
    /// Look direction. Does not need to be normalized.
    pub forward: DVec3,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            eye: DVec3::ZERO,
            forward: DVec3::X,
        }
    }
}
