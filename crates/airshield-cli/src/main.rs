//! Headless simulation runner. Drives the engine at a fixed cadence and
//! reports the engagement summary on exit. The snapshot stream can be
//! piped as JSON for downstream tooling.

use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use airshield_core::constants::TICK_INTERVAL_MS;
use airshield_sim::engine::{SimConfig, SimulationEngine};

#[derive(Debug, Parser)]
#[command(name = "airshield", about = "Headless counter-UAS simulation runner")]
struct Args {
    /// How long to run, in seconds.
    #[arg(long, default_value_t = 30)]
    duration_secs: u64,

    /// Tick interval in milliseconds.
    #[arg(long, default_value_t = TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Print every snapshot as one JSON line.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!(
        duration_secs = args.duration_secs,
        tick_ms = args.tick_ms,
        "starting simulation"
    );

    let mut engine = SimulationEngine::new(SimConfig::default());
    let started = Instant::now();
    let run_for = Duration::from_secs(args.duration_secs);
    let interval = Duration::from_millis(args.tick_ms);
    let mut next_tick = Instant::now();

    let mut last = engine.tick();
    if args.json {
        println!("{}", serde_json::to_string(&last)?);
    }
    while started.elapsed() < run_for {
        next_tick += interval;
        let now = Instant::now();
        if next_tick > now {
            thread::sleep(next_tick - now);
        } else {
            // Fell behind; drift compensates with the real clock delta.
            next_tick = now;
        }
        last = engine.tick();
        if args.json {
            println!("{}", serde_json::to_string(&last)?);
        }
    }

    info!(
        ticks = last.time.tick,
        neutralized = last.stats.neutralized,
        confirmed = last.stats.confirmed,
        success_rate = last.stats.success_rate,
        "simulation finished"
    );
    let report = serde_json::json!({
        "stats": last.stats,
        "engagement_log": last.engagement_log,
        "alerted_target_ids": last.alerted_target_ids,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
