use std::{path::PathBuf, str::FromStr};

use anyhow::{bail, Context, Result};
use clap::Parser;
use kickoff_core::{DifficultyLevel, MatchOptions};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod autopilot;
mod run;
mod sound;

use run::{run_match, SnapshotWriter};

#[derive(Debug, Parser)]
#[command(name = "kickoff-cli", about = "Run a headless football match")]
struct Args {
    #[clap(long, default_value = "0")]
    seed: u64,

    /// Frames to simulate (60 per second of play).
    #[clap(long, default_value = "10800")]
    frames: u64,

    #[clap(long, default_value = "hard")]
    difficulty: DifficultyLevel,

    /// Number of sides driven by the autopilot instead of the CPU.
    #[clap(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=2))]
    players: u8,

    /// JSON file with match options. Overrides seed, difficulty and players.
    #[clap(long, short)]
    options: Option<PathBuf>,

    /// Write a snapshot every this many frames. 0 disables snapshots.
    #[clap(long, default_value = "0")]
    snapshot_every: u64,

    #[clap(long, default_value = "snapshots.jsonl")]
    snapshot_out: PathBuf,

    #[clap(long, default_value = "info")]
    log_level: String,

    /// Also write JSON logs to this file.
    #[clap(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn match_options(&self) -> Result<MatchOptions> {
        match &self.options {
            Some(path) => MatchOptions::load(path),
            None => Ok(MatchOptions {
                difficulty: self.difficulty,
                human: [self.players >= 1, self.players >= 2],
                seed: self.seed,
            }),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match tracing::Level::from_str(&args.log_level) {
        Ok(level) => level,
        Err(_) => bail!("Invalid log level: {}", args.log_level),
    };

    // Keeps the file writer alive until the end of main
    let mut _guard = None;
    let logfile_layer = match &args.log_file {
        Some(path) => {
            if path.exists() {
                bail!("Log file already exists: {}", path.display());
            }
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            let appender =
                tracing_appender::rolling::never(dir.unwrap_or_else(|| ".".as_ref()), name);
            let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);
            _guard = Some(guard);
            Some(
                fmt::Layer::default()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking_appender),
            )
        }
        None => None,
    };

    let stdout_layer = fmt::Subscriber::builder()
        .with_max_level(log_level)
        .without_time()
        .finish();
    stdout_layer
        .with(logfile_layer)
        .try_init()
        .context("Unable to set global tracing subscriber")?;

    if let Some(path) = &args.log_file {
        tracing::info!("Saving logs to {}", path.display());
    }

    let options = args.match_options()?;
    let snapshots = if args.snapshot_every > 0 {
        tracing::info!("Writing snapshots to {}", args.snapshot_out.display());
        Some(SnapshotWriter::create(&args.snapshot_out, args.snapshot_every)?)
    } else {
        None
    };

    let game = run_match(options, args.frames, snapshots)?;
    let [home, away] = game.scores();
    println!("Full time after {} frames: {} - {}", game.frame(), home, away);

    Ok(())
}
