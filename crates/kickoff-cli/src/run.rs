use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use kickoff_core::{MatchOptions, Side};
use kickoff_sim::{FrameInput, InputSource, Match};

use crate::{autopilot::Autopilot, sound::TracingSink};

/// Writes one JSON snapshot per line.
pub struct SnapshotWriter {
    out: BufWriter<File>,
    every: u64,
}

impl SnapshotWriter {
    pub fn create(path: &Path, every: u64) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create snapshot file {}", path.display()))?;
        Ok(Self {
            out: BufWriter::new(file),
            every: every.max(1),
        })
    }

    fn record(&mut self, game: &Match) -> Result<()> {
        if game.frame() % self.every != 0 {
            return Ok(());
        }
        serde_json::to_writer(&mut self.out, &game.snapshot())?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(mut self) -> Result<()> {
        self.out.flush().context("Failed to flush snapshots")
    }
}

/// Play a match for at most `frames` frames, or until it is won. Human sides are
/// driven by the autopilot. Returns the final match.
pub fn run_match(
    options: MatchOptions,
    frames: u64,
    mut snapshots: Option<SnapshotWriter>,
) -> Result<Match> {
    let mut game = Match::new(options.clone());
    let mut sink = TracingSink::new(options.seed);
    let mut sources: [Option<Box<dyn InputSource>>; 2] = Side::ALL.map(|side| {
        game.team(side)
            .human
            .then(|| Box::new(Autopilot::new()) as Box<dyn InputSource>)
    });

    tracing::info!(
        difficulty = %options.difficulty,
        seed = options.seed,
        "Kick off"
    );

    for _ in 0..frames {
        if game.is_finished() {
            tracing::info!("Match won after {} frames", game.frame());
            break;
        }
        let input = FrameInput::poll(&mut sources, &game);
        game.update(&input, &mut sink);

        if let Some(writer) = snapshots.as_mut() {
            writer.record(&game)?;
        }
    }

    if let Some(writer) = snapshots {
        writer.finish()?;
    }
    tracing::debug!("{} sounds requested", sink.played());
    Ok(game)
}
