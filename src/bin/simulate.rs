//! Fishing balance simulator CLI.
//!
//! Run Monte Carlo casts to analyze catch odds and reeling difficulty.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 1000 casts at River Bend
//!   cargo run --bin simulate -- -n 200 --zone mill_pond
//!   cargo run --bin simulate -- --seed 42 --json      # Reproducible, JSON output

use reelcast::simulator::{run_simulation, SimConfig};
use reelcast::zones::ZoneId;
use reelcast::FishingConfig;
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reelcast=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let (config, json) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("Run with --help for usage.");
            return ExitCode::FAILURE;
        }
    };

    if !json {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              REELCAST BALANCE SIMULATOR                       ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Casts:          {}", config.casts);
        println!("  Zone:           {}", config.zone.key());
        println!("  Level / XP:     {} / {}", config.level, config.experience);
        println!("  Skill:          {:.2}", config.skill);
        println!(
            "  Bait:           {}",
            config
                .bait
                .as_ref()
                .map_or("none", |bait| bait.item_id.as_str())
        );
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
        println!("Running simulation...");
        println!();
    }

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(err) => {
            tracing::error!(error = %err, "simulation failed");
            return ExitCode::FAILURE;
        }
    };

    if json {
        match report.to_json() {
            Ok(out) => println!("{}", out),
            Err(err) => {
                tracing::error!(error = %err, "could not serialize report");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", report.to_text());
    }
    ExitCode::SUCCESS
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{} needs a value", flag))
}

fn parse_args(args: &[String]) -> Result<(SimConfig, bool), String> {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-n" | "--casts" => {
                let raw = value(args, i, flag)?;
                config.casts = raw.parse().map_err(|_| format!("bad cast count: {}", raw))?;
                i += 1;
            }
            "-s" | "--seed" => {
                let raw = value(args, i, flag)?;
                config.seed = Some(raw.parse().map_err(|_| format!("bad seed: {}", raw))?);
                i += 1;
            }
            "-l" | "--level" => {
                let raw = value(args, i, flag)?;
                config.level = raw.parse().map_err(|_| format!("bad level: {}", raw))?;
                i += 1;
            }
            "--xp" => {
                let raw = value(args, i, flag)?;
                config.experience = raw.parse().map_err(|_| format!("bad xp: {}", raw))?;
                i += 1;
            }
            "--zone" => {
                let raw = value(args, i, flag)?;
                config.zone = ZoneId::from_key(raw).ok_or_else(|| {
                    let known: Vec<_> = ZoneId::ALL.iter().map(|z| z.key()).collect();
                    format!("unknown zone {} (known: {})", raw, known.join(", "))
                })?;
                i += 1;
            }
            "--skill" => {
                let raw = value(args, i, flag)?;
                config.skill = raw.parse().map_err(|_| format!("bad skill: {}", raw))?;
                i += 1;
            }
            "--no-bait" => {
                config.bait = None;
            }
            "--config" => {
                let path = value(args, i, flag)?;
                config.fishing = FishingConfig::load(path).map_err(|err| err.to_string())?;
                i += 1;
            }
            "--beginner" => {
                config = SimConfig::beginner();
            }
            "--deep-sea" => {
                config = SimConfig::deep_sea();
            }
            "--json" => {
                json = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("unknown option: {}", other)),
        }
        i += 1;
    }

    Ok((config, json))
}

fn print_help() {
    println!("Reelcast Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --casts <N>     Number of casts (default: 1000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -l, --level <L>     Player level (default: 12)");
    println!("    --xp <XP>           Player experience (default: 2500)");
    println!("    --zone <ZONE>       Zone key, e.g. mill_pond (default: river_bend)");
    println!("    --skill <0-1>       How often the bot chases the marker (default: 0.8)");
    println!("    --no-bait           Fish without bait");
    println!("    --config <PATH>     Fishing config JSON to test");
    println!("    --beginner          Preset: level 1 at the starter pond");
    println!("    --deep-sea          Preset: level 35 on the open ocean");
    println!("    --json              Print the report as JSON");
    println!("    -v, --verbose       Print every cast");
    println!("    -h, --help          Show this help");
    println!();
    println!("Presets replace earlier options, so put them first.");
    println!("Set RUST_LOG (e.g. RUST_LOG=reelcast=debug) for engine logs.");
}
