//! Drives a bot angler through the real `FishingSystem`.
//!
//! The bot never looks at session internals. It charges casts by watching
//! `CastPower` UI events and reels by chasing the marker from `ReelSnapshot`
//! events, exactly as a human at the renderer would. Statistics are tracked
//! from the returned `FishingEvent`s.

use glam::DVec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use tracing::{debug, info};
use uuid::Uuid;

use super::config::SimConfig;
use super::report::SimReport;
use super::world::SimWorld;
use crate::catalog::{Catalog, SpeciesId};
use crate::core::constants::{BAR_WIDTH, CAST_POWER_MAX};
use crate::core::error::Result;
use crate::core::types::{PlayerId, Pose};
use crate::reeling::MovementPattern;
use crate::session::{FishingEvent, FishingSystem, PhaseKind, TickInput};

/// Chance per waiting tick that the bot twitches the line.
const JIG_CHANCE: f64 = 0.1;

/// Counters accumulated from tick events.
#[derive(Debug, Clone, Default)]
pub struct CastStats {
    pub casts: u32,
    pub failed_casts: u32,
    pub hooked: u32,
    pub caught: u32,
    pub escaped: u32,
    pub loot: u32,
    pub too_heavy: u32,
    pub no_bite: u32,
    pub aborted: u32,
    pub resolution_failures: u32,
    pub species: BTreeMap<SpeciesId, u32>,
    pub tiers: [u32; 5],
    pub patterns: BTreeMap<MovementPattern, u32>,
    /// Reel ticks summed over every finished reel, landed or not.
    pub reel_ticks: u64,
    pub total_ticks: u64,
}

impl CastStats {
    pub fn record(&mut self, events: &[FishingEvent]) {
        for event in events {
            match event {
                FishingEvent::CastReleased { .. } => self.casts += 1,
                FishingEvent::CastFailed { .. } => {
                    self.casts += 1;
                    self.failed_casts += 1;
                }
                FishingEvent::Hooked { pattern, .. } => {
                    self.hooked += 1;
                    *self.patterns.entry(*pattern).or_insert(0) += 1;
                }
                FishingEvent::Caught { fish, ticks, .. } => {
                    self.caught += 1;
                    self.reel_ticks += ticks;
                    *self.species.entry(fish.species).or_insert(0) += 1;
                    self.tiers[fish.tier.index()] += 1;
                }
                FishingEvent::Escaped { ticks, .. } => {
                    self.escaped += 1;
                    self.reel_ticks += ticks;
                }
                FishingEvent::Loot { .. } => self.loot += 1,
                FishingEvent::TooHeavy { .. } => self.too_heavy += 1,
                FishingEvent::NoBite { .. } => self.no_bite += 1,
                FishingEvent::Aborted { .. } => self.aborted += 1,
                FishingEvent::ResolutionFailed { .. } => self.resolution_failures += 1,
                FishingEvent::CastStarted { .. }
                | FishingEvent::CastRejected { .. }
                | FishingEvent::Landed { .. } => {}
            }
        }
    }
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    config.validate()?;

    let mut system = FishingSystem::new(config.fishing.clone(), Catalog::default())?;
    let zone = system.catalog().zones().zone(config.zone)?.clone();
    let mut world = SimWorld::new(config, &zone);
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let player = PlayerId::from(Uuid::from_u128(1));
    system.join(player);
    let pose = Pose {
        eye: SimWorld::anchor(&zone) + DVec3::new(0.0, 2.0, 0.0),
        forward: DVec3::X,
    };

    let mut stats = CastStats::default();
    for cast in 0..config.casts {
        let before = stats.clone();
        simulate_cast(
            &mut system,
            &mut world,
            player,
            pose,
            config,
            &mut rng,
            &mut stats,
        );

        if config.verbosity >= 2 {
            println!(
                "Cast {}/{} - hooked {}, caught {}, escaped {}, loot {}",
                cast + 1,
                config.casts,
                stats.hooked - before.hooked,
                stats.caught - before.caught,
                stats.escaped - before.escaped,
                stats.loot - before.loot
            );
        }
    }

    info!(
        casts = stats.casts,
        caught = stats.caught,
        escaped = stats.escaped,
        "simulation finished"
    );
    Ok(SimReport::from_stats(config, &zone.name, &stats, &world))
}

fn step<R: Rng>(
    system: &mut FishingSystem,
    world: &mut SimWorld,
    player: PlayerId,
    input: TickInput,
    rng: &mut R,
    stats: &mut CastStats,
) {
    let events = system.tick(&[(player, input)], world, rng);
    stats.total_ticks += 1;
    stats.record(&events);
}

fn phase_of(system: &FishingSystem, player: PlayerId) -> PhaseKind {
    system.phase(player).unwrap_or(PhaseKind::Idle)
}

/// One cast from charge to outcome.
fn simulate_cast<R: Rng>(
    system: &mut FishingSystem,
    world: &mut SimWorld,
    player: PlayerId,
    pose: Pose,
    config: &SimConfig,
    rng: &mut R,
    stats: &mut CastStats,
) {
    let idle = TickInput {
        pose,
        ..Default::default()
    };
    let toggle = TickInput {
        cast_toggle: true,
        ..idle
    };
    let increment = system.config().cast_power_increment;
    let mut ticks = 0u64;

    world.reset_reel_view();
    step(system, world, player, toggle, rng, stats);

    // Release before the charge would wrap back to zero
    while phase_of(system, player) == PhaseKind::Casting
        && world.last_power < config.cast_power
        && world.last_power + increment < CAST_POWER_MAX
        && ticks < config.max_ticks_per_cast
    {
        step(system, world, player, idle, rng, stats);
        ticks += 1;
    }
    step(system, world, player, toggle, rng, stats);

    while matches!(
        phase_of(system, player),
        PhaseKind::Traveling | PhaseKind::Jigging
    ) && ticks < config.max_ticks_per_cast
    {
        let input = TickInput {
            jig: rng.gen_bool(JIG_CHANCE),
            ..idle
        };
        step(system, world, player, input, rng, stats);
        ticks += 1;
    }

    while phase_of(system, player) == PhaseKind::Reeling && ticks < config.max_ticks_per_cast {
        let (marker, bar) = world.last_snapshot;
        let hold = if rng.gen_bool(config.skill) {
            marker > bar + BAR_WIDTH / 2.0
        } else {
            rng.gen_bool(0.5)
        };
        step(system, world, player, TickInput { hold, ..idle }, rng, stats);
        ticks += 1;
    }

    if phase_of(system, player) != PhaseKind::Idle {
        debug!(ticks, "cast timed out, walking away");
        let walk = TickInput {
            movement: true,
            ..idle
        };
        step(system, world, player, walk, rng, stats);
    }
}
