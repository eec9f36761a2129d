//! Rod and bait capabilities as seen by a single roll.
//!
//! Equipment lives in the host's inventory; the fishing core only ever reads
//! a snapshot and reports when bait is used up.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::SpeciesId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RodStats {
    pub id: String,
    /// Cast distance at full power, in blocks.
    pub max_distance: f64,
    /// Heaviest fish (kg) the rod can land without bait assistance.
    pub max_catch_weight: f64,
    /// Multiplier applied to every fish entry's chance.
    #[serde(default = "one")]
    pub luck: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaitStats {
    /// Inventory item consumed when a bite resolves.
    pub item_id: String,
    #[serde(default = "one")]
    pub luck: f64,
    /// Overrides `luck` for specific species.
    #[serde(default)]
    pub species_luck: HashMap<SpeciesId, f64>,
    /// Divides the fish marker's speed while reeling.
    #[serde(default = "one")]
    pub resilience: f64,
    /// Multiplies the rod's max catch weight.
    #[serde(default = "one")]
    pub strength: f64,
}

fn one() -> f64 {
    1.0
}

impl BaitStats {
    pub fn luck_for(&self, species: SpeciesId) -> f64 {
        self.species_luck.get(&species).copied().unwrap_or(self.luck)
    }
}

/// Read-only equipment snapshot, captured when the cast is released.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentSnapshot {
    pub rod: RodStats,
    pub bait: Option<BaitStats>,
}

impl EquipmentSnapshot {
    pub fn new(rod: RodStats, bait: Option<BaitStats>) -> Self {
        Self { rod, bait }
    }

    pub fn has_bait(&self) -> bool {
        self.bait.is_some()
    }

    pub fn bait_luck_for(&self, species: SpeciesId) -> f64 {
        self.bait.as_ref().map_or(1.0, |b| b.luck_for(species))
    }

    /// Rod capacity scaled by bait strength.
    pub fn effective_max_weight(&self) -> f64 {
        let strength = self.bait.as_ref().map_or(1.0, |b| b.strength);
        self.rod.max_catch_weight * strength
    }

    /// Bait resilience, or 1 when there is no usable value.
    pub fn resilience(&self) -> f64 {
        match &self.bait {
            Some(bait) if bait.resilience > 0.0 => bait.resilience,
            _ => 1.0,
        }
    }
}
