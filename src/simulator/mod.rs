//! Fishing balance simulator for Monte Carlo analysis.
//!
//! Runs a scripted angler through thousands of casts to analyze:
//! - Catch, escape and loot rates per zone
//! - Catch tier distribution
//! - How often each movement pattern shows up
//! - How much reeling skill matters
//!
//! The simulator drives the real `FishingSystem`, so results match actual
//! gameplay behavior.

mod config;
mod report;
mod runner;
mod world;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, CastStats};
pub use world::SimWorld;
