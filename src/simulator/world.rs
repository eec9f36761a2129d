//! In-memory host for the balance bot: an endless flat lake, a fixed loadout
//! and counters in place of real inventory and leveling.

use chrono::{DateTime, Utc};
use glam::{DVec3, IVec3};

use super::config::SimConfig;
use crate::core::types::{PlayerId, PlayerProfile};
use crate::equipment::{BaitStats, RodStats};
use crate::host::{
    Block, CatchRecord, CatchRecorder, Clock, Inventory, Progression, RewardItem, Terrain,
    UiEvent, UiSink,
};
use crate::zones::{Zone, ZoneScope};

/// Where the open ocean is guaranteed not to overlap a declared zone.
const OPEN_WATER: DVec3 = DVec3::new(10_000.0, 62.0, 10_000.0);

pub struct SimWorld {
    water_level: i32,
    rod: RodStats,
    bait: Option<BaitStats>,
    profile: PlayerProfile,
    started: DateTime<Utc>,

    pub bait_used: u64,
    pub xp_gained: u64,
    pub coins: u64,
    pub records: Vec<CatchRecord>,
    pub last_power: f64,
    /// Latest (marker, bar) from a reel snapshot.
    pub last_snapshot: (f64, f64),
}

impl SimWorld {
    pub fn new(config: &SimConfig, zone: &Zone) -> Self {
        let anchor = Self::anchor(zone);
        Self {
            water_level: anchor.y.floor() as i32,
            rod: config.rod.clone(),
            bait: config.bait.clone(),
            profile: PlayerProfile::new(config.level, config.experience),
            started: Utc::now(),
            bait_used: 0,
            xp_gained: 0,
            coins: 0,
            records: Vec::new(),
            last_power: 0.0,
            last_snapshot: (0.5, 0.5),
        }
    }

    /// A water surface point inside `zone`.
    pub fn anchor(zone: &Zone) -> DVec3 {
        match zone.scope {
            ZoneScope::Fallback => OPEN_WATER,
            ZoneScope::Local | ZoneScope::Geographic => zone.center,
        }
    }

    pub fn reset_reel_view(&mut self) {
        self.last_power = 0.0;
        self.last_snapshot = (0.5, 0.5);
    }
}

impl Terrain for SimWorld {
    fn block_at(&self, position: IVec3) -> Block {
        if position.y > self.water_level {
            Block::Air
        } else if position.y == self.water_level {
            Block::Water
        } else {
            Block::Solid
        }
    }
}

impl Inventory for SimWorld {
    fn equipped_rod(&self, _player: PlayerId) -> Option<RodStats> {
        Some(self.rod.clone())
    }

    fn equipped_bait(&self, _player: PlayerId) -> Option<BaitStats> {
        self.bait.clone()
    }

    fn consume_bait(&mut self, _player: PlayerId, _item_id: &str) {
        self.bait_used += 1;
    }

    fn add_item(&mut self, _player: PlayerId, item: RewardItem) {
        self.coins += match item {
            RewardItem::Fish(fish) => fish.value as u64,
            RewardItem::Loot(loot) => loot.value as u64,
        };
    }
}

impl Progression for SimWorld {
    fn profile(&self, _player: PlayerId) -> PlayerProfile {
        self.profile
    }

    fn add_xp(&mut self, _player: PlayerId, amount: u64) {
        self.xp_gained += amount;
    }
}

impl CatchRecorder for SimWorld {
    fn record_catch(&mut self, _player: PlayerId, record: &CatchRecord) {
        self.records.push(record.clone());
    }
}

impl UiSink for SimWorld {
    fn send_ui_event(&mut self, _player: PlayerId, event: UiEvent) {
        match event {
            UiEvent::CastPower { power } => self.last_power = power,
            UiEvent::ReelSnapshot { marker, bar, .. } => self.last_snapshot = (marker, bar),
            _ => {}
        }
    }
}

impl Clock for SimWorld {
    fn now(&self) -> DateTime<Utc> {
        self.started
    }
}
