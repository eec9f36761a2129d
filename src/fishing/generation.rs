//! Catch materialization: weight, tier and value for a rolled species.
//!
//! Tier by weight percentile:
//! - above 0.95: Legendary (x5 value)
//! - above 0.85: Epic (x3)
//! - above 0.70: Rare (x2)
//! - above 0.50: Uncommon (x1.5)
//! - otherwise Common (x1)

use chrono::{DateTime, Utc};
use rand::Rng;

use super::types::CaughtFish;
use crate::catalog::{Rarity, Species};
use crate::core::constants::{TIER_PERCENTILE_THRESHOLDS, TIER_VALUE_MULTIPLIERS};

/// Rolls a weight uniformly inside the species range, rounded to 2 decimals.
pub fn roll_weight(species: &Species, rng: &mut impl Rng) -> f64 {
    let span = species.max_weight - species.min_weight;
    let raw = species.min_weight + rng.gen::<f64>() * span;
    let rounded = (raw * 100.0).round() / 100.0;
    rounded.clamp(species.min_weight, species.max_weight)
}

/// Where `weight` falls within the species range, 0.0 to 1.0.
pub fn weight_percentile(species: &Species, weight: f64) -> f64 {
    let span = species.max_weight - species.min_weight;
    if span <= 0.0 {
        return 0.0;
    }
    ((weight - species.min_weight) / span).clamp(0.0, 1.0)
}

pub fn tier_for_percentile(percentile: f64) -> Rarity {
    let [uncommon, rare, epic, legendary] = TIER_PERCENTILE_THRESHOLDS;
    if percentile > legendary {
        Rarity::Legendary
    } else if percentile > epic {
        Rarity::Epic
    } else if percentile > rare {
        Rarity::Rare
    } else if percentile > uncommon {
        Rarity::Uncommon
    } else {
        Rarity::Common
    }
}

/// `floor(base_value * (weight / min_weight) * tier multiplier)`
pub fn catch_value(species: &Species, weight: f64, tier: Rarity) -> u32 {
    let multiplier = TIER_VALUE_MULTIPLIERS[tier.index()];
    let value = species.base_value as f64 * (weight / species.min_weight) * multiplier;
    value.floor() as u32
}

/// Builds a catch of a known weight. `salt` disambiguates ids created in the
/// same millisecond.
pub fn catch_with_weight(
    species: &Species,
    weight: f64,
    now: DateTime<Utc>,
    salt: u32,
) -> CaughtFish {
    let tier = tier_for_percentile(weight_percentile(species, weight));
    CaughtFish {
        id: format!(
            "{}-{}-{:06x}",
            species.id.key(),
            now.timestamp_millis(),
            salt & 0x00ff_ffff
        ),
        species: species.id,
        name: species.name.clone(),
        tier,
        weight,
        value: catch_value(species, weight, tier),
        caught_at: now,
    }
}

/// Generates a fish of the given species with a random weight.
pub fn generate_catch(species: &Species, now: DateTime<Utc>, rng: &mut impl Rng) -> CaughtFish {
    let weight = roll_weight(species, rng);
    let salt = rng.gen::<u32>();
    catch_with_weight(species, weight, now, salt)
}
