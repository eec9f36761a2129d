//! Collaborator boundaries between the fishing core and the host game.
//!
//! The core never stores inventory, terrain, levels or UI itself. It reads
//! and writes them through these traits, and the host implements all of
//! them on whatever owns that state. [`FishingHost`] is implemented for any
//! type that provides every collaborator.

use chrono::{DateTime, Utc};
use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};

use crate::catalog::{LootItem, Rarity, SpeciesId};
use crate::core::types::{PlayerId, PlayerProfile};
use crate::equipment::{BaitStats, RodStats};
use crate::fishing::CaughtFish;
use crate::reeling::MovementPattern;

/// What occupies a block, as far as casting is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Air,
    Water,
    Solid,
}

pub trait Terrain {
    fn block_at(&self, position: IVec3) -> Block;
}

pub trait Inventory {
    fn equipped_rod(&self, player: PlayerId) -> Option<RodStats>;
    fn equipped_bait(&self, player: PlayerId) -> Option<BaitStats>;
    /// Called once per resolved bite when bait was equipped for the cast.
    fn consume_bait(&mut self, player: PlayerId, item_id: &str);
    fn add_item(&mut self, player: PlayerId, item: RewardItem);
}

pub trait Progression {
    fn profile(&self, player: PlayerId) -> PlayerProfile;
    fn add_xp(&mut self, player: PlayerId, amount: u64);
}

pub trait CatchRecorder {
    fn record_catch(&mut self, player: PlayerId, record: &CatchRecord);
}

/// One-way notifications for the renderer. Never read back.
pub trait UiSink {
    fn send_ui_event(&mut self, player: PlayerId, event: UiEvent);
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Everything the fishing core needs from the host game.
pub trait FishingHost: Terrain + Inventory + Progression + CatchRecorder + UiSink + Clock {}

impl<T> FishingHost for T where T: Terrain + Inventory + Progression + CatchRecorder + UiSink + Clock {}

/// Items pushed into the player's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RewardItem {
    Fish(CaughtFish),
    Loot(LootItem),
}

/// Leaderboard / journal entry for a landed fish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchRecord {
    pub species: SpeciesId,
    pub tier: Rarity,
    pub weight: f64,
    pub value: u32,
    /// Display name of the zone the fish came from.
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiEvent {
    CastPower { power: f64 },
    MarkerSpawned { position: DVec3 },
    JigDepth { depth: f64 },
    ReelStarted {
        species: SpeciesId,
        pattern: MovementPattern,
    },
    ReelSnapshot {
        marker: f64,
        bar: f64,
        progress: f64,
    },
    Message(String),
}
