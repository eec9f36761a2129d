//! Designer-tunable fishing configuration.
//!
//! Every field has a default, so a config file only needs to name the values
//! it overrides:
//!
//! ```json
//! { "jig_duration_secs": 3.5, "rarity_gate_level": 8 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{FishingError, Result};
use crate::catalog::SpeciesId;
use crate::zones::ZoneId;

/// Longest travel or jig delay a config may ask for.
const MAX_PHASE_SECS: f64 = 3600.0;

/// Deepest water probe a config may ask for, in blocks.
const MAX_RAY_DEPTH: u32 = 4096;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FishingConfig {
    // === TIMING ===
    /// Server tick rate. Phase delays below are converted to ticks with it.
    pub ticks_per_second: u32,

    /// Delay between releasing the cast and the bobber settling in the water.
    pub cast_travel_secs: f64,

    /// How long the jig phase lasts before the bite is resolved.
    pub jig_duration_secs: f64,

    // === CASTING ===
    /// Power gained per tick while charging. Power wraps to 0 at 100.
    pub cast_power_increment: f64,

    /// How many blocks below the landing point the water probe may search.
    pub max_ray_depth: u32,

    // === CATCH GATES ===
    /// Players below this level fishing in the beginner zone always land
    /// `guaranteed_species`.
    pub guaranteed_catch_below_level: u32,
    pub beginner_zone: ZoneId,
    pub guaranteed_species: SpeciesId,

    /// Players below this level only roll common and uncommon species.
    pub rarity_gate_level: u32,

    /// Players with more than this much experience fishing without bait have
    /// their rare/epic/legendary odds cut.
    pub unbaited_penalty_experience: u64,
}

impl Default for FishingConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 20,
            cast_travel_secs: 2.0,
            jig_duration_secs: 5.0,
            cast_power_increment: 2.0,
            max_ray_depth: 64,
            guaranteed_catch_below_level: 5,
            beginner_zone: ZoneId::StarterPond,
            guaranteed_species: SpeciesId::Bluegill,
            rarity_gate_level: 10,
            unbaited_penalty_experience: 10_000,
        }
    }
}

impl FishingConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.ticks_per_second == 0 {
            return Err(FishingError::InvalidConfig(
                "ticks_per_second must be positive".to_string(),
            ));
        }
        for (name, secs) in [
            ("cast_travel_secs", self.cast_travel_secs),
            ("jig_duration_secs", self.jig_duration_secs),
        ] {
            if !(secs > 0.0 && secs <= MAX_PHASE_SECS) {
                return Err(FishingError::InvalidConfig(format!(
                    "{} {} must be in (0, {}]",
                    name, secs, MAX_PHASE_SECS
                )));
            }
        }
        if self.max_ray_depth > MAX_RAY_DEPTH {
            return Err(FishingError::InvalidConfig(format!(
                "max_ray_depth {} exceeds {}",
                self.max_ray_depth, MAX_RAY_DEPTH
            )));
        }
        if !(self.cast_power_increment > 0.0 && self.cast_power_increment < 100.0) {
            return Err(FishingError::InvalidConfig(format!(
                "cast_power_increment {} must be in (0, 100)",
                self.cast_power_increment
            )));
        }
        Ok(())
    }

    /// Cast travel delay in ticks (at least one).
    pub fn travel_ticks(&self) -> u64 {
        self.secs_to_ticks(self.cast_travel_secs)
    }

    /// Jig duration in ticks (at least one).
    pub fn jig_ticks(&self) -> u64 {
        self.secs_to_ticks(self.jig_duration_secs)
    }

    fn secs_to_ticks(&self, secs: f64) -> u64 {
        ((secs * self.ticks_per_second as f64).round() as u64).max(1)
    }
}
