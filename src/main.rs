//! Command line driver for headless patrol/chase levels.
//!
//! The target bounces around the spawn area and defeats every agent it
//! touches. With `--waves`, clearing a level starts the next one of the
//! default wave plan until the last level is cleared.
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use prowl::config::LevelConfig;
use prowl::spawn::WavePlan;
use prowl::{init_logging, Level, SignalKind, SignalLog, FRAME_DELTA};

/// Run a patrol/chase level headlessly and print its signals as JSON
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Level description in JSON; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u32,

    /// Seconds per frame
    #[arg(long, default_value_t = FRAME_DELTA)]
    dt: f64,

    /// Override the placement seed
    #[arg(long)]
    seed: Option<u64>,

    /// Advance through the wave plan as levels are cleared
    #[arg(long)]
    waves: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn start_level(config: &LevelConfig, signals: &mut SignalLog) -> Result<Level> {
    let (level, started) = Level::from_config(config).context("building level")?;
    signals.append(started);
    Ok(level)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => LevelConfig::load(path)
            .with_context(|| format!("loading level config {}", path.display()))?,
        None => LevelConfig::default(),
    };
    let plan = WavePlan::default();
    let mut wave = 1;
    if args.waves {
        config = config.with_wave(&plan, wave);
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let mut signals = SignalLog::new();
    let mut level = start_level(&config, &mut signals)?;
    let mut target_velocity = config.target.velocity;
    for _ in 0..args.ticks {
        let report = level.tick(args.dt);
        signals.record_tick(&report);

        let (target, velocity) = config
            .area
            .bounce(level.target(), target_velocity, args.dt);
        level.set_target(target);
        target_velocity = velocity;

        for id in level.remove_within(config.contact_radius) {
            signals.record_removal(level.ticks(), level.elapsed(), id);
        }
        if !level.is_empty() {
            continue;
        }

        signals.push(
            level.ticks(),
            level.elapsed(),
            SignalKind::LevelCleared { level: wave },
        );
        info!("level {wave} cleared after {} ticks", level.ticks());
        if !args.waves || plan.is_last(wave) {
            break;
        }
        wave += 1;
        config = config.with_wave(&plan, wave);
        level = start_level(&config, &mut signals)?;
        target_velocity = config.target.velocity;
    }
    info!(
        "finished on level {wave} after {} ticks ({:.2}s), {} signals",
        level.ticks(),
        level.elapsed(),
        signals.len()
    );

    let json = signals.to_json().context("serialising signals")?;
    let mut out = io::stdout().lock();
    writeln!(out, "{json}").context("writing signals")?;
    Ok(())
}
