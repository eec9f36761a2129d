//! Simulation configuration.

use std::collections::HashMap;

use crate::core::config::FishingConfig;
use crate::core::constants::CAST_POWER_MAX;
use crate::core::error::{FishingError, Result};
use crate::equipment::{BaitStats, RodStats};
use crate::zones::ZoneId;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of casts to make
    pub casts: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Simulated player level and experience
    pub level: u32,
    pub experience: u64,

    /// Zone the bot fishes in
    pub zone: ZoneId,

    /// Chance per tick that the bot reels toward the marker instead of
    /// mashing randomly (0.0 - 1.0)
    pub skill: f64,

    /// Cast power the bot charges to before releasing
    pub cast_power: f64,

    pub rod: RodStats,
    pub bait: Option<BaitStats>,

    /// Fishing rules under test
    pub fishing: FishingConfig,

    /// Ticks a single cast may take before the bot walks away
    pub max_ticks_per_cast: u64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per cast)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            casts: 1000,
            seed: None,
            level: 12,
            experience: 2_500,
            zone: ZoneId::RiverBend,
            skill: 0.8,
            cast_power: 30.0,
            rod: Self::fiberglass_rod(),
            bait: Some(Self::nightcrawler()),
            fishing: FishingConfig::default(),
            max_ticks_per_cast: 20_000,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    pub fn fiberglass_rod() -> RodStats {
        RodStats {
            id: "fiberglass_rod".to_string(),
            max_distance: 20.0,
            max_catch_weight: 40.0,
            luck: 1.0,
        }
    }

    pub fn nightcrawler() -> BaitStats {
        BaitStats {
            item_id: "nightcrawler".to_string(),
            luck: 1.2,
            species_luck: HashMap::new(),
            resilience: 1.25,
            strength: 1.0,
        }
    }

    /// Brand-new player at the starter pond.
    pub fn beginner() -> Self {
        Self {
            casts: 200,
            level: 1,
            experience: 0,
            zone: ZoneId::StarterPond,
            skill: 0.5,
            bait: None,
            ..Default::default()
        }
    }

    /// Seasoned angler with a deep sea rod on the open ocean.
    pub fn deep_sea() -> Self {
        Self {
            level: 35,
            experience: 50_000,
            zone: ZoneId::OpenOcean,
            skill: 0.95,
            rod: RodStats {
                id: "deep_sea_rod".to_string(),
                max_distance: 30.0,
                max_catch_weight: 250.0,
                luck: 1.1,
            },
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.skill) {
            return Err(FishingError::InvalidConfig(format!(
                "skill {} must be between 0 and 1",
                self.skill
            )));
        }
        if !(self.cast_power > 0.0 && self.cast_power < CAST_POWER_MAX) {
            return Err(FishingError::InvalidConfig(format!(
                "cast power {} must be in (0, 100)",
                self.cast_power
            )));
        }
        self.fishing.validate()
    }
}
