//! Catalog data structures.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::data::SIMPLE_SPECIES;
use crate::zones::ZoneId;

/// Rarity tiers, shared by species catalog rarity and individual catch tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Rare, epic or legendary.
    pub fn is_high_tier(self) -> bool {
        self >= Rarity::Rare
    }
}

/// Closed set of species known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeciesId {
    Bluegill,
    Minnow,
    Perch,
    Carp,
    Trout,
    Bass,
    Catfish,
    Salmon,
    Pike,
    Sturgeon,
    Tuna,
    Swordfish,
    Marlin,
    GhostKoi,
    AbyssalEel,
    /// Stand-in entry that sends the roll to the loot table.
    SunkenLoot,
}

impl SpeciesId {
    /// Stable snake_case key, matching the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            SpeciesId::Bluegill => "bluegill",
            SpeciesId::Minnow => "minnow",
            SpeciesId::Perch => "perch",
            SpeciesId::Carp => "carp",
            SpeciesId::Trout => "trout",
            SpeciesId::Bass => "bass",
            SpeciesId::Catfish => "catfish",
            SpeciesId::Salmon => "salmon",
            SpeciesId::Pike => "pike",
            SpeciesId::Sturgeon => "sturgeon",
            SpeciesId::Tuna => "tuna",
            SpeciesId::Swordfish => "swordfish",
            SpeciesId::Marlin => "marlin",
            SpeciesId::GhostKoi => "ghost_koi",
            SpeciesId::AbyssalEel => "abyssal_eel",
            SpeciesId::SunkenLoot => "sunken_loot",
        }
    }

    /// Species that always swim with the basic movement patterns.
    pub fn is_simple(self) -> bool {
        SIMPLE_SPECIES.contains(&self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: SpeciesId,
    pub name: String,
    pub rarity: Rarity,
    pub min_weight: f64,
    pub max_weight: f64,
    pub base_value: u32,
    /// Chance used in zones missing from `zone_chances`, before damping.
    pub base_chance: f64,
    #[serde(default)]
    pub zone_chances: HashMap<ZoneId, f64>,
    /// Rod ids able to hook this species. Empty means any rod.
    #[serde(default)]
    pub rod_restriction: Vec<String>,
    #[serde(default)]
    pub is_loot: bool,
}

impl Species {
    pub fn chance_in(&self, zone: ZoneId) -> Option<f64> {
        self.zone_chances.get(&zone).copied()
    }

    pub fn catchable_with(&self, rod_id: &str) -> bool {
        self.rod_restriction.is_empty() || self.rod_restriction.iter().any(|r| r == rod_id)
    }
}

/// Closed set of loot items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LootId {
    OldBoot,
    TinCan,
    TangledLine,
    Driftwood,
    MessageInABottle,
    PearlOyster,
    SunkenChest,
}

/// A row of the loot sub-table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootEntry {
    pub id: LootId,
    pub name: String,
    pub value: u32,
    pub chance: f64,
}

/// Loot pulled out of the water.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootItem {
    pub id: LootId,
    pub name: String,
    pub value: u32,
}

impl From<&LootEntry> for LootItem {
    fn from(entry: &LootEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            value: entry.value,
        }
    }
}
