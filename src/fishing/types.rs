//! Catch results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{LootItem, Rarity, SpeciesId};

/// A single landed (or about to be reeled) fish.
///
/// `tier` comes from where the weight falls inside the species range, so a
/// common species can still produce a legendary individual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaughtFish {
    /// `<species key>-<unix millis>-<salt>`
    pub id: String,
    pub species: SpeciesId,
    pub name: String,
    pub tier: Rarity,
    pub weight: f64,
    pub value: u32,
    pub caught_at: DateTime<Utc>,
}

/// Result of resolving a bite.
#[derive(Debug, Clone, PartialEq)]
pub enum CatchOutcome {
    /// A fish is on the line; reeling decides whether it is landed.
    Fish(CaughtFish),
    /// Junk or treasure, granted immediately without reeling.
    Loot(LootItem),
    /// The fish outweighs the rod's effective capacity.
    TooHeavy {
        species: SpeciesId,
        name: String,
        weight: f64,
        capacity: f64,
    },
    /// Nothing eligible to bite here.
    NoBite,
}

impl CatchOutcome {
    /// User-facing message for outcomes that end the session immediately.
    pub fn message(&self) -> Option<String> {
        match self {
            CatchOutcome::Fish(_) => None,
            CatchOutcome::Loot(item) => Some(format!("You fished up: {}!", item.name)),
            CatchOutcome::TooHeavy { name, weight, .. } => Some(format!(
                "A {} ({:.2} kg) is too heavy for your rod!",
                name, weight
            )),
            CatchOutcome::NoBite => Some("Nothing is biting...".to_string()),
        }
    }

    /// Every resolved bite uses up the bait, including one that snapped free.
    pub fn consumes_bait(&self) -> bool {
        !matches!(self, CatchOutcome::NoBite)
    }
}
