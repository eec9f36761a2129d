//! Built-in species and loot tables.

use std::collections::HashMap;

use super::types::{LootEntry, LootId, Rarity, Species, SpeciesId};
use crate::zones::ZoneId;

/// Species that always get the basic movement set, whatever their rarity.
pub const SIMPLE_SPECIES: [SpeciesId; 4] = [
    SpeciesId::Bluegill,
    SpeciesId::Minnow,
    SpeciesId::Perch,
    SpeciesId::Carp,
];

struct Row {
    id: SpeciesId,
    name: &'static str,
    rarity: Rarity,
    weight: (f64, f64),
    base_value: u32,
    base_chance: f64,
    zones: &'static [(ZoneId, f64)],
    rods: &'static [&'static str],
}

impl Row {
    fn build(&self) -> Species {
        Species {
            id: self.id,
            name: self.name.to_string(),
            rarity: self.rarity,
            min_weight: self.weight.0,
            max_weight: self.weight.1,
            base_value: self.base_value,
            base_chance: self.base_chance,
            zone_chances: self.zones.iter().copied().collect::<HashMap<_, _>>(),
            rod_restriction: self.rods.iter().map(|r| r.to_string()).collect(),
            is_loot: self.id == SpeciesId::SunkenLoot,
        }
    }
}

const SPECIES_ROWS: &[Row] = &[
    Row {
        id: SpeciesId::Bluegill,
        name: "Bluegill",
        rarity: Rarity::Common,
        weight: (0.1, 0.6),
        base_value: 5,
        base_chance: 30.0,
        zones: &[
            (ZoneId::StarterPond, 40.0),
            (ZoneId::MillPond, 25.0),
            (ZoneId::WillowCreek, 20.0),
        ],
        rods: &[],
    },
    Row {
        id: SpeciesId::Minnow,
        name: "Minnow",
        rarity: Rarity::Common,
        weight: (0.05, 0.2),
        base_value: 2,
        base_chance: 30.0,
        zones: &[
            (ZoneId::StarterPond, 30.0),
            (ZoneId::MillPond, 20.0),
            (ZoneId::WillowCreek, 30.0),
            (ZoneId::RiverBend, 15.0),
        ],
        rods: &[],
    },
    Row {
        id: SpeciesId::Perch,
        name: "Perch",
        rarity: Rarity::Common,
        weight: (0.2, 1.2),
        base_value: 8,
        base_chance: 20.0,
        zones: &[
            (ZoneId::StarterPond, 15.0),
            (ZoneId::MillPond, 20.0),
            (ZoneId::RiverBend, 15.0),
        ],
        rods: &[],
    },
    Row {
        id: SpeciesId::Carp,
        name: "Carp",
        rarity: Rarity::Uncommon,
        weight: (1.0, 12.0),
        base_value: 15,
        base_chance: 12.0,
        zones: &[
            (ZoneId::StarterPond, 10.0),
            (ZoneId::MillPond, 20.0),
            (ZoneId::RiverBend, 10.0),
        ],
        rods: &[],
    },
    Row {
        id: SpeciesId::Trout,
        name: "Trout",
        rarity: Rarity::Uncommon,
        weight: (0.5, 4.0),
        base_value: 20,
        base_chance: 12.0,
        zones: &[(ZoneId::WillowCreek, 30.0), (ZoneId::RiverBend, 20.0)],
        rods: &[],
    },
    Row {
        id: SpeciesId::Bass,
        name: "Largemouth Bass",
        rarity: Rarity::Uncommon,
        weight: (0.8, 5.0),
        base_value: 22,
        base_chance: 12.0,
        zones: &[(ZoneId::MillPond, 15.0), (ZoneId::RiverBend, 15.0)],
        rods: &[],
    },
    Row {
        id: SpeciesId::Catfish,
        name: "Channel Catfish",
        rarity: Rarity::Uncommon,
        weight: (1.0, 20.0),
        base_value: 25,
        base_chance: 10.0,
        zones: &[(ZoneId::MillPond, 10.0), (ZoneId::RiverBend, 12.0)],
        rods: &[],
    },
    Row {
        id: SpeciesId::Salmon,
        name: "Salmon",
        rarity: Rarity::Rare,
        weight: (2.0, 15.0),
        base_value: 60,
        base_chance: 5.0,
        zones: &[(ZoneId::RiverBend, 8.0), (ZoneId::WillowCreek, 5.0)],
        rods: &[],
    },
    Row {
        id: SpeciesId::Pike,
        name: "Northern Pike",
        rarity: Rarity::Rare,
        weight: (2.0, 18.0),
        base_value: 55,
        base_chance: 5.0,
        zones: &[(ZoneId::MillPond, 4.0), (ZoneId::RiverBend, 6.0)],
        rods: &[],
    },
    Row {
        id: SpeciesId::Sturgeon,
        name: "Sturgeon",
        rarity: Rarity::Epic,
        weight: (10.0, 150.0),
        base_value: 150,
        base_chance: 1.0,
        zones: &[(ZoneId::RiverBend, 2.0), (ZoneId::DeepTrench, 3.0)],
        rods: &[],
    },
    Row {
        id: SpeciesId::Tuna,
        name: "Bluefin Tuna",
        rarity: Rarity::Uncommon,
        weight: (5.0, 80.0),
        base_value: 40,
        base_chance: 10.0,
        zones: &[(ZoneId::CoralReef, 25.0), (ZoneId::OpenOcean, 25.0)],
        rods: &[],
    },
    Row {
        id: SpeciesId::Swordfish,
        name: "Swordfish",
        rarity: Rarity::Rare,
        weight: (30.0, 200.0),
        base_value: 120,
        base_chance: 4.0,
        zones: &[(ZoneId::CoralReef, 6.0), (ZoneId::OpenOcean, 8.0)],
        rods: &[],
    },
    Row {
        id: SpeciesId::Marlin,
        name: "Blue Marlin",
        rarity: Rarity::Epic,
        weight: (50.0, 300.0),
        base_value: 250,
        base_chance: 1.5,
        zones: &[(ZoneId::CoralReef, 2.0), (ZoneId::OpenOcean, 3.0)],
        rods: &["deep_sea_rod", "trident_rod"],
    },
    Row {
        id: SpeciesId::GhostKoi,
        name: "Ghost Koi",
        rarity: Rarity::Legendary,
        weight: (2.0, 8.0),
        base_value: 800,
        base_chance: 0.3,
        zones: &[(ZoneId::MillPond, 0.5)],
        rods: &[],
    },
    Row {
        id: SpeciesId::AbyssalEel,
        name: "Abyssal Eel",
        rarity: Rarity::Legendary,
        weight: (20.0, 90.0),
        base_value: 1200,
        base_chance: 0.2,
        zones: &[(ZoneId::DeepTrench, 1.0)],
        rods: &["trident_rod"],
    },
    Row {
        id: SpeciesId::SunkenLoot,
        name: "Sunken Loot",
        rarity: Rarity::Common,
        weight: (1.0, 1.0),
        base_value: 0,
        base_chance: 6.0,
        zones: &[
            (ZoneId::StarterPond, 5.0),
            (ZoneId::MillPond, 6.0),
            (ZoneId::WillowCreek, 6.0),
            (ZoneId::RiverBend, 6.0),
            (ZoneId::CoralReef, 8.0),
            (ZoneId::DeepTrench, 10.0),
            (ZoneId::OpenOcean, 8.0),
        ],
        rods: &[],
    },
];

/// Returns the built-in species in roll order.
pub fn default_species() -> Vec<Species> {
    SPECIES_ROWS.iter().map(Row::build).collect()
}

/// Returns the built-in loot sub-table in roll order.
pub fn default_loot() -> Vec<LootEntry> {
    [
        (LootId::OldBoot, "Old Boot", 1, 30.0),
        (LootId::TinCan, "Tin Can", 1, 25.0),
        (LootId::TangledLine, "Tangled Line", 2, 15.0),
        (LootId::Driftwood, "Driftwood", 3, 15.0),
        (LootId::MessageInABottle, "Message in a Bottle", 25, 8.0),
        (LootId::PearlOyster, "Pearl Oyster", 60, 5.0),
        (LootId::SunkenChest, "Sunken Chest", 200, 2.0),
    ]
    .into_iter()
    .map(|(id, name, value, chance)| LootEntry {
        id,
        name: name.to_string(),
        value,
        chance,
    })
    .collect()
}
