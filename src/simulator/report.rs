//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;

use super::config::SimConfig;
use super::runner::CastStats;
use super::world::SimWorld;
use crate::catalog::{Catalog, Rarity};
use crate::core::error::Result;

/// Aggregated results of a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub zone: String,
    pub level: u32,
    pub seed: Option<u64>,
    pub skill: f64,
    pub baited: bool,

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

    /// Landed fish per hooked fish
    pub catch_rate: f64,
    pub avg_reel_ticks: f64,
    pub avg_ticks_per_cast: f64,

    pub xp_gained: u64,
    pub coins: u64,
    pub bait_used: u64,

    /// Landed fish by species display name
    pub species: BTreeMap<String, u32>,
    /// Landed fish by catch tier, Common first
    pub tiers: Vec<(String, u32)>,
    /// Hooked fish by movement pattern
    pub patterns: BTreeMap<String, u32>,
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

impl SimReport {
    pub fn from_stats(config: &SimConfig, zone: &str, stats: &CastStats, world: &SimWorld) -> Self {
        let catalog = Catalog::default();
        let species = stats
            .species
            .iter()
            .map(|(id, count)| {
                let name = catalog
                    .species(*id)
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|_| id.key().to_string());
                (name, *count)
            })
            .collect();
        let tiers = Rarity::ALL
            .iter()
            .map(|tier| (tier.name().to_string(), stats.tiers[tier.index()]))
            .collect();
        let patterns = stats
            .patterns
            .iter()
            .map(|(pattern, count)| (pattern.name().to_string(), *count))
            .collect();
        let reels = (stats.caught + stats.escaped) as f64;

        Self {
            zone: zone.to_string(),
            level: config.level,
            seed: config.seed,
            skill: config.skill,
            baited: config.bait.is_some(),
            casts: stats.casts,
            failed_casts: stats.failed_casts,
            hooked: stats.hooked,
            caught: stats.caught,
            escaped: stats.escaped,
            loot: stats.loot,
            too_heavy: stats.too_heavy,
            no_bite: stats.no_bite,
            aborted: stats.aborted,
            resolution_failures: stats.resolution_failures,
            catch_rate: ratio(stats.caught as f64, stats.hooked as f64),
            avg_reel_ticks: ratio(stats.reel_ticks as f64, reels),
            avg_ticks_per_cast: ratio(stats.total_ticks as f64, stats.casts as f64),
            xp_gained: world.xp_gained,
            coins: world.coins,
            bait_used: world.bait_used,
            species,
            tiers,
            patterns,
        }
    }

    fn percent(&self, count: u32) -> f64 {
        ratio(count as f64, self.casts as f64) * 100.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    FISHING SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Zone: {}   Level: {}   Skill: {:.2}   Bait: {}\n\n",
            self.zone,
            self.level,
            self.skill,
            if self.baited { "yes" } else { "no" }
        ));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        let rows = [
            ("Caught", self.caught),
            ("Escaped", self.escaped),
            ("Loot", self.loot),
            ("Too Heavy", self.too_heavy),
            ("No Bite", self.no_bite),
            ("Failed Cast", self.failed_casts),
            ("Walked Away", self.aborted),
        ];
        report.push_str(&format!("  Casts:         {}\n", self.casts));
        for (label, count) in rows {
            report.push_str(&format!(
                "  {:<13} {:>6}  {:>5.1}%\n",
                format!("{}:", label),
                count,
                self.percent(count)
            ));
        }
        if self.resolution_failures > 0 {
            report.push_str(&format!(
                "  ! {} bites failed to resolve\n",
                self.resolution_failures
            ));
        }
        report.push('\n');

        report.push_str("── REELING ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Hooked:            {}\n", self.hooked));
        report.push_str(&format!(
            "  Catch Rate:        {:.1}%\n",
            self.catch_rate * 100.0
        ));
        report.push_str(&format!("  Avg Reel Ticks:    {:.0}\n", self.avg_reel_ticks));
        report.push_str(&format!(
            "  Avg Ticks / Cast:  {:.0}\n\n",
            self.avg_ticks_per_cast
        ));

        report.push_str("── CATCH TIERS ──────────────────────────────────────────────────\n");
        for (tier, count) in &self.tiers {
            let pct = ratio(*count as f64, self.caught as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<10} {:>5} {:>5.1}% {}\n", tier, count, pct, bar));
        }
        report.push('\n');

        report.push_str("── SPECIES ──────────────────────────────────────────────────────\n");
        let mut species: Vec<_> = self.species.iter().collect();
        species.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        for (name, count) in species {
            report.push_str(&format!("  {:<18} {:>5}\n", name, count));
        }
        report.push('\n');

        report.push_str("── PATTERNS ─────────────────────────────────────────────────────\n");
        for (pattern, count) in &self.patterns {
            report.push_str(&format!("  {:<20} {:>5}\n", pattern, count));
        }
        report.push('\n');

        report.push_str("── REWARDS ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  XP Gained:   {}\n", self.xp_gained));
        report.push_str(&format!("  Coins:       {}\n", self.coins));
        report.push_str(&format!("  Bait Used:   {}\n", self.bait_used));

        report
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
