//! Fixed tuning constants for the catch and reel formulas.
//!
//! Timings and gate thresholds that designers tweak live in
//! [`FishingConfig`](super::config::FishingConfig); the values here are baked
//! into the formulas themselves.

// Casting
pub const CAST_POWER_MAX: f64 = 100.0;

// Jig physics (cosmetic only)
pub const JIG_DEPTH_MAX: f64 = 2.0;
pub const JIG_GRAVITY: f64 = 0.01;
pub const JIG_IMPULSE: f64 = -0.12;
pub const JIG_BOUNCE_DAMPING: f64 = 0.8;

// Catch materialization
/// Value multipliers indexed by catch tier (Common..Legendary).
pub const TIER_VALUE_MULTIPLIERS: [f64; 5] = [1.0, 1.5, 2.0, 3.0, 5.0];
/// Percentile thresholds for Uncommon, Rare, Epic, Legendary.
pub const TIER_PERCENTILE_THRESHOLDS: [f64; 4] = [0.50, 0.70, 0.85, 0.95];

// Catch resolution
/// Replacement chances for rare/epic/legendary species rolled in a zone that does not list them.
pub const UNLISTED_RARE_CHANCE: f64 = 1.0;
pub const UNLISTED_EPIC_CHANCE: f64 = 0.5;
pub const UNLISTED_LEGENDARY_CHANCE: f64 = 0.1;
pub const UNLISTED_COMMON_DAMPING: f64 = 0.1;
pub const UNBAITED_HIGH_TIER_PENALTY: f64 = 0.3;

// Reeling bar and progress
pub const REEL_START_POSITION: f64 = 0.5;
pub const REEL_START_PROGRESS: f64 = 25.0;
pub const REEL_PROGRESS_MAX: f64 = 100.0;
pub const REEL_PROGRESS_GAIN: f64 = 0.5;
pub const REEL_PROGRESS_LOSS: f64 = 0.3;
pub const BAR_WIDTH: f64 = 0.2;
pub const BAR_SPEED: f64 = 0.02;
pub const BAR_MAX: f64 = 0.8;

// Marker speed
pub const BASE_MARKER_SPEED: f64 = 0.008;
/// Speed factors indexed by species catalog rarity (Common..Legendary).
pub const SPECIES_SPEED_FACTORS: [f64; 5] = [1.0, 1.15, 1.3, 1.5, 1.75];
/// Speed factors indexed by catch tier (Common..Legendary).
pub const TIER_SPEED_FACTORS: [f64; 5] = [1.0, 1.05, 1.1, 1.2, 1.3];
pub const VALUE_SPEED_BONUS_PER_COIN: f64 = 0.0002;
pub const VALUE_SPEED_BONUS_CAP: f64 = 0.2;
/// Players above each of these levels get another speed discount.
pub const LEVEL_SPEED_BRACKETS: [u32; 3] = [10, 25, 30];
pub const LEVEL_SPEED_DISCOUNT: f64 = 0.98;

// Movement patterns
pub const WIDE_BOUNDS: (f64, f64) = (0.05, 0.95);
pub const BASIC_BOUNDS: (f64, f64) = (0.1, 0.9);
pub const ERRATIC_BOUNDS: (f64, f64) = (0.1, 0.9);
pub const ERRATIC_FLIP_CHANCE: f64 = 0.05;
pub const SINE_FREQUENCY: f64 = 0.05;
pub const SINE_AMPLITUDE: f64 = 0.35;
pub const PULSE_SLOW_FREQUENCY: f64 = 0.03;
pub const PULSE_FAST_FREQUENCY: f64 = 0.09;
pub const PULSE_WINDOW_TICKS: u64 = 60;
pub const ACCEL_RAMP_TICKS: f64 = 200.0;
pub const ACCEL_MAX_MULTIPLIER: f64 = 2.0;
pub const ZIGZAG_INTERVAL_TICKS: u64 = 30;
pub const BURST_PERIOD_TICKS: u64 = 60;
pub const BURST_WINDOW_TICKS: u64 = 20;
pub const BURST_FACTOR: f64 = 2.5;
pub const BOUNCE_LEFT_EDGE: f64 = 0.2;
pub const BOUNCE_RIGHT_EDGE: f64 = 0.8;
pub const SINE_TO_ERRATIC_TRIGGER: u32 = 2;
pub const DEFAULT_TO_ERRATIC_TRIGGER: u32 = 3;

// Rewards
/// XP granted per catch tier (Common..Legendary), before the value bonus.
pub const TIER_XP: [u64; 5] = [10, 20, 40, 80, 160];
pub const VALUE_XP_DIVISOR: u64 = 10;
pub const LOOT_XP: u64 = 5;
