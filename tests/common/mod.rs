//! Shared test fixtures: an in-memory host with a flat lake and a fixed loadout.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use glam::{DVec3, IVec3};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reelcast::equipment::{BaitStats, RodStats};
use reelcast::host::{
    Block, CatchRecord, CatchRecorder, Clock, Inventory, Progression, RewardItem, Terrain,
    UiEvent, UiSink,
};
use reelcast::session::PhaseKind;
use reelcast::{FishingEvent, FishingSystem, PlayerId, PlayerProfile, Pose, TickInput};
use std::collections::HashMap;

pub const WATER_LEVEL: i32 = 62;

pub fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

pub fn bamboo_rod() -> RodStats {
    RodStats {
        id: "bamboo_rod".to_string(),
        max_distance: 20.0,
        max_catch_weight: 15.0,
        luck: 1.0,
    }
}

pub fn worm() -> BaitStats {
    BaitStats {
        item_id: "worm".to_string(),
        luck: 1.0,
        species_luck: HashMap::new(),
        resilience: 1.0,
        strength: 1.0,
    }
}

/// Bait that slows the marker enough for a chasing bar to never lose it.
pub fn sticky_bait() -> BaitStats {
    BaitStats {
        item_id: "sticky_dough".to_string(),
        resilience: 10.0,
        ..worm()
    }
}

/// Standing at the middle of the starter pond looking along +X.
pub fn pond_pose() -> Pose {
    Pose {
        eye: DVec3::new(0.0, 64.0, 0.0),
        forward: DVec3::X,
    }
}

pub fn idle() -> TickInput {
    TickInput {
        pose: pond_pose(),
        ..Default::default()
    }
}

pub fn toggle() -> TickInput {
    TickInput {
        cast_toggle: true,
        ..idle()
    }
}

pub fn walking() -> TickInput {
    TickInput {
        movement: true,
        ..idle()
    }
}

pub fn holding(hold: bool) -> TickInput {
    TickInput { hold, ..idle() }
}

pub struct FakeHost {
    /// What sits at `WATER_LEVEL`. Air above, solid below.
    pub surface: Block,
    pub rod: Option<RodStats>,
    pub bait: Option<BaitStats>,
    pub profile: PlayerProfile,
    pub now: DateTime<Utc>,

    pub consumed: Vec<String>,
    pub items: Vec<RewardItem>,
    pub xp: u64,
    pub records: Vec<CatchRecord>,
    pub ui: Vec<UiEvent>,
}

impl FakeHost {
    /// Level 1 angler with a bamboo rod, no bait, over water.
    pub fn lake() -> Self {
        Self {
            surface: Block::Water,
            rod: Some(bamboo_rod()),
            bait: None,
            profile: PlayerProfile::new(1, 0),
            now: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            consumed: Vec::new(),
            items: Vec::new(),
            xp: 0,
            records: Vec::new(),
            ui: Vec::new(),
        }
    }

    pub fn messages(&self) -> Vec<&str> {
        self.ui
            .iter()
            .filter_map(|event| match event {
                UiEvent::Message(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn cast_powers(&self) -> Vec<f64> {
        self.ui
            .iter()
            .filter_map(|event| match event {
                UiEvent::CastPower { power } => Some(*power),
                _ => None,
            })
            .collect()
    }

    /// Latest (marker, bar, progress) reel snapshot.
    pub fn last_snapshot(&self) -> Option<(f64, f64, f64)> {
        self.ui.iter().rev().find_map(|event| match event {
            UiEvent::ReelSnapshot {
                marker,
                bar,
                progress,
            } => Some((*marker, *bar, *progress)),
            _ => None,
        })
    }
}

impl Terrain for FakeHost {
    fn block_at(&self, position: IVec3) -> Block {
        if position.y > WATER_LEVEL {
            Block::Air
        } else if position.y == WATER_LEVEL {
            self.surface
        } else {
            Block::Solid
        }
    }
}

impl Inventory for FakeHost {
    fn equipped_rod(&self, _player: PlayerId) -> Option<RodStats> {
        self.rod.clone()
    }

    fn equipped_bait(&self, _player: PlayerId) -> Option<BaitStats> {
        self.bait.clone()
    }

    fn consume_bait(&mut self, _player: PlayerId, item_id: &str) {
        self.consumed.push(item_id.to_string());
    }

    fn add_item(&mut self, _player: PlayerId, item: RewardItem) {
        self.items.push(item);
    }
}

impl Progression for FakeHost {
    fn profile(&self, _player: PlayerId) -> PlayerProfile {
        self.profile
    }

    fn add_xp(&mut self, _player: PlayerId, amount: u64) {
        self.xp += amount;
    }
}

impl CatchRecorder for FakeHost {
    fn record_catch(&mut self, _player: PlayerId, record: &CatchRecord) {
        self.records.push(record.clone());
    }
}

impl UiSink for FakeHost {
    fn send_ui_event(&mut self, _player: PlayerId, event: UiEvent) {
        self.ui.push(event);
    }
}

impl Clock for FakeHost {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Runs one tick for a single player and returns its events.
pub fn step(
    system: &mut FishingSystem,
    host: &mut FakeHost,
    player: PlayerId,
    input: TickInput,
    rng: &mut ChaCha8Rng,
) -> Vec<FishingEvent> {
    system.tick(&[(player, input)], host, rng)
}

/// Starts a cast, charges it for `charge_ticks` and releases it.
pub fn cast(
    system: &mut FishingSystem,
    host: &mut FakeHost,
    player: PlayerId,
    charge_ticks: u32,
    rng: &mut ChaCha8Rng,
) -> Vec<FishingEvent> {
    let mut events = step(system, host, player, toggle(), rng);
    for _ in 0..charge_ticks {
        events.extend(step(system, host, player, idle(), rng));
    }
    events.extend(step(system, host, player, toggle(), rng));
    events
}

/// Ticks with empty input until the player leaves `phase` or `limit` ticks pass.
pub fn wait_out(
    system: &mut FishingSystem,
    host: &mut FakeHost,
    player: PlayerId,
    phase: PhaseKind,
    limit: u32,
    rng: &mut ChaCha8Rng,
) -> Vec<FishingEvent> {
    let mut events = Vec::new();
    for _ in 0..limit {
        if system.phase(player).ok() != Some(phase) {
            break;
        }
        events.extend(step(system, host, player, idle(), rng));
    }
    events
}

/// Casts into the starter pond and waits until the bite resolves.
pub fn cast_and_wait(
    system: &mut FishingSystem,
    host: &mut FakeHost,
    player: PlayerId,
    rng: &mut ChaCha8Rng,
) -> Vec<FishingEvent> {
    let mut events = cast(system, host, player, 5, rng);
    events.extend(wait_out(system, host, player, PhaseKind::Traveling, 1000, rng));
    events.extend(wait_out(system, host, player, PhaseKind::Jigging, 1000, rng));
    events
}

/// Reels by keeping the bar centred on the last reported marker.
pub fn reel_perfectly(
    system: &mut FishingSystem,
    host: &mut FakeHost,
    player: PlayerId,
    rng: &mut ChaCha8Rng,
) -> Vec<FishingEvent> {
    let mut events = Vec::new();
    for _ in 0..10_000 {
        if system.phase(player).ok() != Some(PhaseKind::Reeling) {
            break;
        }
        let (marker, bar, _) = host.last_snapshot().unwrap_or((0.5, 0.5, 25.0));
        let hold = marker > bar + 0.1;
        events.extend(step(system, host, player, holding(hold), rng));
    }
    events
}
