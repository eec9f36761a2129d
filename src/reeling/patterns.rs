//! Fish marker movement patterns.
//!
//! Simple fish and low-tier catches draw from the basic set. Rare species
//! and epic/legendary catches draw from the advanced set, which includes
//! two transition patterns: they start predictable and turn erratic once the
//! marker has swept to both edges enough times.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Rarity, Species};
use crate::core::constants::{
    ACCEL_MAX_MULTIPLIER, ACCEL_RAMP_TICKS, BASIC_BOUNDS, BOUNCE_LEFT_EDGE, BOUNCE_RIGHT_EDGE,
    BURST_FACTOR, BURST_PERIOD_TICKS, BURST_WINDOW_TICKS, DEFAULT_TO_ERRATIC_TRIGGER,
    ERRATIC_BOUNDS, ERRATIC_FLIP_CHANCE, PULSE_FAST_FREQUENCY, PULSE_SLOW_FREQUENCY,
    PULSE_WINDOW_TICKS, SINE_AMPLITUDE, SINE_FREQUENCY, SINE_TO_ERRATIC_TRIGGER, WIDE_BOUNDS,
    ZIGZAG_INTERVAL_TICKS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MovementPattern {
    Default,
    SineWave,
    Accelerating,
    Zigzag,
    Burst,
    Pulse,
    Erratic,
    DefaultToErratic,
    SineToErratic,
}

pub const BASIC_PATTERNS: [MovementPattern; 5] = [
    MovementPattern::Default,
    MovementPattern::SineWave,
    MovementPattern::Accelerating,
    MovementPattern::Zigzag,
    MovementPattern::Burst,
];

pub const ADVANCED_PATTERNS: [MovementPattern; 5] = [
    MovementPattern::Pulse,
    MovementPattern::Zigzag,
    MovementPattern::Erratic,
    MovementPattern::DefaultToErratic,
    MovementPattern::SineToErratic,
];

impl MovementPattern {
    pub fn name(&self) -> &'static str {
        match self {
            MovementPattern::Default => "Default",
            MovementPattern::SineWave => "Sine Wave",
            MovementPattern::Accelerating => "Accelerating",
            MovementPattern::Zigzag => "Zigzag",
            MovementPattern::Burst => "Burst",
            MovementPattern::Pulse => "Pulse",
            MovementPattern::Erratic => "Erratic",
            MovementPattern::DefaultToErratic => "Default → Erratic",
            MovementPattern::SineToErratic => "Sine Wave → Erratic",
        }
    }

    /// Bounce pairs needed before a transition pattern turns erratic.
    pub fn transition_trigger(&self) -> Option<u32> {
        match self {
            MovementPattern::DefaultToErratic => Some(DEFAULT_TO_ERRATIC_TRIGGER),
            MovementPattern::SineToErratic => Some(SINE_TO_ERRATIC_TRIGGER),
            _ => None,
        }
    }

    /// The formula a pattern starts with.
    fn starting_formula(&self) -> MovementPattern {
        match self {
            MovementPattern::DefaultToErratic => MovementPattern::Default,
            MovementPattern::SineToErratic => MovementPattern::SineWave,
            other => *other,
        }
    }
}

/// Whether a catch swims with the advanced pattern set.
pub fn uses_advanced_set(species: &Species, tier: Rarity) -> bool {
    if species.id.is_simple() {
        return false;
    }
    species.rarity.is_high_tier() || tier >= Rarity::Epic
}

pub fn select_pattern(species: &Species, tier: Rarity, rng: &mut impl Rng) -> MovementPattern {
    let set = if uses_advanced_set(species, tier) {
        &ADVANCED_PATTERNS
    } else {
        &BASIC_PATTERNS
    };
    set[rng.gen_range(0..set.len())]
}

/// Moves the marker with velocity and reflects it off `[lo, hi]`.
fn bounce(marker: &mut f64, velocity: &mut f64, speed_multiplier: f64, (lo, hi): (f64, f64)) {
    *marker += *velocity * speed_multiplier;
    if *marker <= lo {
        *marker = lo;
        *velocity = velocity.abs();
    } else if *marker >= hi {
        *marker = hi;
        *velocity = -velocity.abs();
    }
}

fn sine_position(tick: u64, frequency: f64) -> f64 {
    0.5 + (tick as f64 * frequency).sin() * SINE_AMPLITUDE
}

/// Per-session pattern state. Build a fresh one for every reel.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternController {
    pattern: MovementPattern,
    formula: MovementPattern,
    left_bounces: u32,
    right_bounces: u32,
    at_left_edge: bool,
    at_right_edge: bool,
    transitioned: bool,
}

impl PatternController {
    pub fn new(pattern: MovementPattern) -> Self {
        Self {
            pattern,
            formula: pattern.starting_formula(),
            left_bounces: 0,
            right_bounces: 0,
            at_left_edge: false,
            at_right_edge: false,
            transitioned: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.pattern);
    }

    pub fn pattern(&self) -> MovementPattern {
        self.pattern
    }

    /// The formula currently moving the marker.
    pub fn formula(&self) -> MovementPattern {
        self.formula
    }

    /// (left, right) bounce counts recorded while running the starting formula.
    pub fn bounce_counts(&self) -> (u32, u32) {
        (self.left_bounces, self.right_bounces)
    }

    pub fn has_transitioned(&self) -> bool {
        self.transitioned
    }

    /// Advances the marker one tick. `tick` counts from 1 at reel start.
    pub fn step(&mut self, marker: &mut f64, velocity: &mut f64, tick: u64, rng: &mut impl Rng) {
        match self.formula {
            MovementPattern::Default => {
                let bounds = if self.pattern == MovementPattern::Default {
                    BASIC_BOUNDS
                } else {
                    WIDE_BOUNDS
                };
                bounce(marker, velocity, 1.0, bounds);
            }
            MovementPattern::SineWave => {
                *marker = sine_position(tick, SINE_FREQUENCY);
            }
            MovementPattern::Pulse => {
                let frequency = if (tick / PULSE_WINDOW_TICKS) % 2 == 0 {
                    PULSE_SLOW_FREQUENCY
                } else {
                    PULSE_FAST_FREQUENCY
                };
                *marker = sine_position(tick, frequency);
            }
            MovementPattern::Accelerating => {
                let multiplier = (1.0 + tick as f64 / ACCEL_RAMP_TICKS).min(ACCEL_MAX_MULTIPLIER);
                bounce(marker, velocity, multiplier, WIDE_BOUNDS);
            }
            MovementPattern::Zigzag => {
                if tick % ZIGZAG_INTERVAL_TICKS == 0 {
                    *velocity = -*velocity;
                }
                bounce(marker, velocity, 1.0, WIDE_BOUNDS);
            }
            MovementPattern::Burst => {
                let multiplier = if tick % BURST_PERIOD_TICKS < BURST_WINDOW_TICKS {
                    BURST_FACTOR
                } else {
                    1.0
                };
                bounce(marker, velocity, multiplier, WIDE_BOUNDS);
            }
            // Transition patterns never run as a formula themselves
            MovementPattern::Erratic
            | MovementPattern::DefaultToErratic
            | MovementPattern::SineToErratic => {
                if rng.gen_bool(ERRATIC_FLIP_CHANCE) {
                    *velocity = -*velocity;
                }
                bounce(marker, velocity, 1.0, ERRATIC_BOUNDS);
            }
        }

        if let Some(trigger) = self.pattern.transition_trigger() {
            if !self.transitioned {
                self.track_bounces(*marker);
                if self.left_bounces.min(self.right_bounces) >= trigger {
                    self.transitioned = true;
                    self.formula = MovementPattern::Erratic;
                    debug!(pattern = self.pattern.name(), tick, "marker turned erratic");
                }
            }
        }
    }

    /// Counts entries into the edge regions, once per visit.
    fn track_bounces(&mut self, marker: f64) {
        let at_left = marker <= BOUNCE_LEFT_EDGE;
        if at_left && !self.at_left_edge {
            self.left_bounces += 1;
        }
        self.at_left_edge = at_left;

        let at_right = marker >= BOUNCE_RIGHT_EDGE;
        if at_right && !self.at_right_edge {
            self.right_bounces += 1;
        }
        self.at_right_edge = at_right;
    }
}
