//! gait-trace: run bosses through the steering harness and print every
//! tick's snapshot as one JSON line.
//!
//! Usage:
//!   gait-trace --ticks 400 --bosses 3 --seed 7
//!   gait-trace --config gait.json --wound-at 200 --turn-at 100

mod logging;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::DVec3;

use gait_core::commands::HostCommand;
use gait_core::config::SteeringConfig;
use gait_core::constants::BOSS_MAX_HEALTH;
use gait_sim::{SimConfig, SteeringEngine};

#[derive(Debug, Parser)]
#[command(name = "gait-trace", about = "Trace natural boss steering tick by tick")]
struct Args {
    /// RNG seed; the same seed reproduces the same trace.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 200)]
    ticks: u64,

    /// Bosses spawned on a ring around the origin.
    #[arg(long, default_value_t = 1)]
    bosses: usize,

    /// Ring radius in blocks.
    #[arg(long, default_value_t = 32.0)]
    radius: f64,

    /// Desired speed in blocks per tick.
    #[arg(long, default_value_t = 0.4)]
    speed: f64,

    /// Rotate every boss's desired direction a quarter turn at this tick.
    #[arg(long)]
    turn_at: Option<u64>,

    /// Drop every boss below half health at this tick.
    #[arg(long)]
    wound_at: Option<u64>,

    /// JSON steering config; omitted fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Debug logging on stderr (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let steering = match &args.config {
        Some(path) => SteeringConfig::load(path)
            .with_context(|| format!("loading steering config {}", path.display()))?,
        None => SteeringConfig::default(),
    };

    let mut engine = SteeringEngine::new(SimConfig {
        seed: args.seed,
        steering,
    });
    let ids = engine.spawn_boss_ring(DVec3::ZERO, args.radius, args.speed, args.bosses);
    log::info!("Tracing {} boss(es) for {} ticks", ids.len(), args.ticks);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for tick in 0..args.ticks {
        if args.turn_at == Some(tick) {
            let turned: Vec<HostCommand> = ids
                .iter()
                .filter_map(|&actor| {
                    let d = engine.desired(actor)?;
                    Some(HostCommand::SetDesired {
                        actor,
                        velocity: DVec3::new(-d.z, d.y, d.x),
                    })
                })
                .collect();
            engine.queue_commands(turned);
        }
        if args.wound_at == Some(tick) {
            engine.queue_commands(ids.iter().map(|&actor| HostCommand::SetHealth {
                actor,
                health: BOSS_MAX_HEALTH * 0.25,
            }));
        }

        let snapshot = engine.tick();
        serde_json::to_writer(&mut out, &snapshot).context("encoding snapshot")?;
        writeln!(out).context("writing trace")?;
    }

    out.flush().context("flushing trace")?;
    Ok(())
}
