//! Bite resolution against a zone's weighted species table.
//!
//! Resolution order:
//! 1. Beginner override (low level + beginner zone → fixed species)
//! 2. Eligibility (rod restriction, rarity gate, zone allow-list)
//! 3. Base chance (zone chance, or damped species chance)
//! 4. Bait and rod luck
//! 5. Unbaited high-tier penalty
//! 6. Normalize to percentages and roll
//! 7. Loot entries roll the loot table; fish are materialized and weight-gated

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::debug;

use super::generation::generate_catch;
use super::types::CatchOutcome;
use crate::catalog::{Catalog, LootItem, Rarity, Species};
use crate::core::config::FishingConfig;
use crate::core::constants::{
    UNBAITED_HIGH_TIER_PENALTY, UNLISTED_COMMON_DAMPING, UNLISTED_EPIC_CHANCE,
    UNLISTED_LEGENDARY_CHANCE, UNLISTED_RARE_CHANCE,
};
use crate::core::error::{FishingError, Result};
use crate::core::types::PlayerProfile;
use crate::equipment::EquipmentSnapshot;
use crate::zones::Zone;

/// Converts raw chances into percentages of their total.
///
/// Returns an empty vector when there is nothing positive to normalize.
pub fn normalize(chances: &[f64]) -> Vec<f64> {
    let total: f64 = chances.iter().filter(|c| **c > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    chances
        .iter()
        .map(|c| if *c > 0.0 { c / total * 100.0 } else { 0.0 })
        .collect()
}

/// Picks an index by walking cumulative percentages against `u ~ U(0, 100)`.
///
/// The first entry whose cumulative probability reaches `u` wins, so equal
/// cumulative values resolve to the earlier entry. Zero-chance entries are
/// never selected.
pub fn pick_index(chances: &[f64], rng: &mut impl Rng) -> Option<usize> {
    let probabilities = normalize(chances);
    if probabilities.is_empty() {
        return None;
    }

    let roll: f64 = rng.gen_range(0.0..100.0);
    let mut cumulative = 0.0;
    let mut last_positive = None;
    for (index, probability) in probabilities.iter().enumerate() {
        if *probability <= 0.0 {
            continue;
        }
        cumulative += probability;
        last_positive = Some(index);
        if cumulative >= roll {
            return Some(index);
        }
    }

    // Rounding left the total a hair under 100
    last_positive
}

/// Base chance of a species in a zone that does not list it.
fn unlisted_chance(species: &Species) -> f64 {
    match species.rarity {
        Rarity::Rare => UNLISTED_RARE_CHANCE,
        Rarity::Epic => UNLISTED_EPIC_CHANCE,
        Rarity::Legendary => UNLISTED_LEGENDARY_CHANCE,
        Rarity::Common | Rarity::Uncommon => species.base_chance * UNLISTED_COMMON_DAMPING,
    }
}

fn is_eligible(
    species: &Species,
    config: &FishingConfig,
    zone: &Zone,
    player: &PlayerProfile,
    equipment: &EquipmentSnapshot,
) -> bool {
    if !species.catchable_with(&equipment.rod.id) {
        return false;
    }
    if player.level < config.rarity_gate_level && species.rarity > Rarity::Uncommon {
        return false;
    }
    zone.allows(species.id)
}

/// Eligible species with their adjusted (unnormalized) chances, in catalog
/// order.
pub fn adjusted_chances<'a>(
    catalog: &'a Catalog,
    config: &FishingConfig,
    zone: &Zone,
    player: &PlayerProfile,
    equipment: &EquipmentSnapshot,
) -> Vec<(&'a Species, f64)> {
    let unbaited_penalty =
        !equipment.has_bait() && player.experience > config.unbaited_penalty_experience;

    catalog
        .all_species()
        .iter()
        .filter(|species| is_eligible(species, config, zone, player, equipment))
        .map(|species| {
            let mut chance = species
                .chance_in(zone.id)
                .unwrap_or_else(|| unlisted_chance(species));

            chance *= equipment.bait_luck_for(species.id);
            if !species.is_loot {
                chance *= equipment.rod.luck;
            }
            if unbaited_penalty && species.rarity.is_high_tier() {
                chance *= UNBAITED_HIGH_TIER_PENALTY;
            }
            (species, chance)
        })
        .collect()
}

/// Rolls the loot sub-table.
pub fn roll_loot(catalog: &Catalog, rng: &mut impl Rng) -> Result<LootItem> {
    let table = catalog.loot_table();
    let chances: Vec<f64> = table.iter().map(|entry| entry.chance).collect();
    pick_index(&chances, rng)
        .map(|index| LootItem::from(&table[index]))
        .ok_or_else(|| FishingError::InvalidCatalog("loot table has no positive chances".to_string()))
}

/// Resolves one bite for `player` fishing in `zone`.
pub fn roll_outcome(
    catalog: &Catalog,
    config: &FishingConfig,
    zone: &Zone,
    player: &PlayerProfile,
    equipment: &EquipmentSnapshot,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Result<CatchOutcome> {
    if player.level < config.guaranteed_catch_below_level && zone.id == config.beginner_zone {
        let species = catalog.species(config.guaranteed_species)?;
        debug!(species = ?species.id, "beginner catch override");
        return Ok(CatchOutcome::Fish(generate_catch(species, now, rng)));
    }

    let entries = adjusted_chances(catalog, config, zone, player, equipment);
    let chances: Vec<f64> = entries.iter().map(|(_, chance)| *chance).collect();
    let Some(index) = pick_index(&chances, rng) else {
        debug!(zone = ?zone.id, "no eligible species");
        return Ok(CatchOutcome::NoBite);
    };
    let species = entries[index].0;

    if species.is_loot {
        let item = roll_loot(catalog, rng)?;
        debug!(loot = ?item.id, zone = ?zone.id, "loot rolled");
        return Ok(CatchOutcome::Loot(item));
    }

    let fish = generate_catch(species, now, rng);
    let capacity = equipment.effective_max_weight();
    if fish.weight > capacity {
        debug!(
            species = ?species.id,
            weight = fish.weight,
            capacity,
            "fish too heavy for rod"
        );
        return Ok(CatchOutcome::TooHeavy {
            species: species.id,
            name: fish.name,
            weight: fish.weight,
            capacity,
        });
    }

    debug!(species = ?species.id, tier = ?fish.tier, weight = fish.weight, "fish hooked");
    Ok(CatchOutcome::Fish(fish))
}
