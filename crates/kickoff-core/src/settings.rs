use std::{fs, path::Path, str::FromStr};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::Side;

/// Tuning for the CPU opponents.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Whether the defender nearest to its own goal drops back to guard it.
    pub goalie_enabled: bool,
    /// Whether a second defender presses the ball carrier.
    pub second_lead_enabled: bool,
    /// Extra speed for CPU carriers, and for CPU pressers against a human side.
    pub speed_boost: f64,
    /// Frames after a tackle before a CPU carrier is allowed to pass or shoot.
    pub holdoff_timer: i32,
}

/// The three selectable difficulty tiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Easy,
        DifficultyLevel::Medium,
        DifficultyLevel::Hard,
    ];

    /// The tuning bundle for this tier.
    pub fn settings(&self) -> Difficulty {
        match self {
            DifficultyLevel::Easy => Difficulty {
                goalie_enabled: false,
                second_lead_enabled: false,
                speed_boost: 0.0,
                holdoff_timer: 120,
            },
            DifficultyLevel::Medium => Difficulty {
                goalie_enabled: false,
                second_lead_enabled: true,
                speed_boost: 0.1,
                holdoff_timer: 90,
            },
            DifficultyLevel::Hard => Difficulty {
                goalie_enabled: true,
                second_lead_enabled: true,
                speed_boost: 0.2,
                holdoff_timer: 60,
            },
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            DifficultyLevel::Easy => 0,
            DifficultyLevel::Medium => 1,
            DifficultyLevel::Hard => 2,
        }
    }

    /// Move through the tiers by `steps`, wrapping around at either end.
    pub fn cycle(&self, steps: i32) -> Self {
        Self::ALL[(self.index() as i32 + steps).rem_euclid(3) as usize]
    }
}

impl TryFrom<u8> for DifficultyLevel {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self> {
        match Self::ALL.get(value as usize) {
            Some(level) => Ok(*level),
            None => bail!("Invalid difficulty index {} (expected 0-2)", value),
        }
    }
}

impl FromStr for DifficultyLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "0" => Ok(DifficultyLevel::Easy),
            "medium" | "1" => Ok(DifficultyLevel::Medium),
            "hard" | "2" => Ok(DifficultyLevel::Hard),
            other => bail!("Unknown difficulty: {}", other),
        }
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DifficultyLevel::Easy => write!(f, "easy"),
            DifficultyLevel::Medium => write!(f, "medium"),
            DifficultyLevel::Hard => write!(f, "hard"),
        }
    }
}

/// Options a match is constructed with. They never change during the match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    pub difficulty: DifficultyLevel,
    /// Which sides are driven by a human input source, indexed by team.
    pub human: [bool; 2],
    /// Seed for the formation jitter applied at every kick off.
    pub seed: u64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            difficulty: DifficultyLevel::Hard,
            human: [false, false],
            seed: 0,
        }
    }
}

impl MatchOptions {
    /// A CPU-only match, as played behind the menu.
    pub fn cpu_only(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// One human on the home side against the CPU.
    pub fn one_player(difficulty: DifficultyLevel, seed: u64) -> Self {
        Self {
            difficulty,
            human: [true, false],
            seed,
        }
    }

    /// Two humans. The CPU still drives every player that is not under control, so
    /// the hardest tuning is used.
    pub fn two_players(seed: u64) -> Self {
        Self {
            difficulty: DifficultyLevel::Hard,
            human: [true, true],
            seed,
        }
    }

    pub fn is_human(&self, side: Side) -> bool {
        self.human[side.index()]
    }

    /// Load match options from a JSON file. Missing fields take their default value.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read match options from {}", path.display()))?;
        let options = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse match options in {}", path.display()))?;
        log::debug!("Loaded match options from {}", path.display());
        Ok(options)
    }
}
