//! Reeling tick logic.

use rand::Rng;
use tracing::debug;

use super::patterns::{select_pattern, PatternController};
use super::types::{ReelResult, ReelingSession};
use crate::catalog::Species;
use crate::core::constants::{
    BAR_MAX, BAR_SPEED, BASE_MARKER_SPEED, LEVEL_SPEED_BRACKETS, LEVEL_SPEED_DISCOUNT,
    REEL_PROGRESS_GAIN, REEL_PROGRESS_LOSS, REEL_PROGRESS_MAX, REEL_START_POSITION,
    REEL_START_PROGRESS, SPECIES_SPEED_FACTORS, TIER_SPEED_FACTORS, VALUE_SPEED_BONUS_CAP,
    VALUE_SPEED_BONUS_PER_COIN,
};
use crate::core::types::PlayerProfile;
use crate::equipment::EquipmentSnapshot;
use crate::fishing::CaughtFish;

/// Marker speed magnitude for a catch, before direction is chosen.
pub fn initial_speed(
    fish: &CaughtFish,
    species: &Species,
    equipment: &EquipmentSnapshot,
    player: &PlayerProfile,
) -> f64 {
    let value_bonus = (fish.value as f64 * VALUE_SPEED_BONUS_PER_COIN).min(VALUE_SPEED_BONUS_CAP);
    let mut speed = BASE_MARKER_SPEED
        * SPECIES_SPEED_FACTORS[species.rarity.index()]
        * TIER_SPEED_FACTORS[fish.tier.index()]
        * (1.0 + value_bonus)
        / equipment.resilience();

    for bracket in LEVEL_SPEED_BRACKETS {
        if player.level > bracket {
            speed *= LEVEL_SPEED_DISCOUNT;
        }
    }
    speed
}

/// Sets up a reel for a freshly hooked fish.
pub fn start_reeling(
    fish: CaughtFish,
    species: &Species,
    equipment: &EquipmentSnapshot,
    player: &PlayerProfile,
    rng: &mut impl Rng,
) -> ReelingSession {
    let speed = initial_speed(&fish, species, equipment, player);
    let velocity = if rng.gen_bool(0.5) { speed } else { -speed };
    let pattern = select_pattern(species, fish.tier, rng);

    debug!(
        species = %fish.name,
        tier = fish.tier.name(),
        pattern = pattern.name(),
        speed,
        "reel started"
    );

    ReelingSession {
        active: true,
        fish,
        marker: REEL_START_POSITION,
        velocity,
        bar: REEL_START_POSITION,
        progress: REEL_START_PROGRESS,
        ticks: 0,
        controller: PatternController::new(pattern),
    }
}

/// Moves the capture bar one tick. Holding pushes it right.
pub fn update_bar(bar: f64, hold: bool) -> f64 {
    let next = if hold { bar + BAR_SPEED } else { bar - BAR_SPEED };
    next.clamp(0.0, BAR_MAX)
}

pub fn update_progress(progress: f64, in_zone: bool) -> f64 {
    let next = if in_zone {
        progress + REEL_PROGRESS_GAIN
    } else {
        progress - REEL_PROGRESS_LOSS
    };
    next.clamp(0.0, REEL_PROGRESS_MAX)
}

/// Advances a live reel by one tick.
///
/// Returns `Continue` until progress reaches either bound, after which the
/// session is inactive and further calls just repeat the terminal result.
pub fn tick_reeling(session: &mut ReelingSession, hold: bool, rng: &mut impl Rng) -> ReelResult {
    if !session.active {
        return session.result();
    }

    session.ticks += 1;
    session
        .controller
        .step(&mut session.marker, &mut session.velocity, session.ticks, rng);
    session.marker = session.marker.clamp(0.0, 1.0);
    session.bar = update_bar(session.bar, hold);
    session.progress = update_progress(session.progress, session.in_zone());

    if session.progress >= REEL_PROGRESS_MAX || session.progress <= 0.0 {
        session.active = false;
    }
    session.result()
}
