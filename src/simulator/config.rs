//! Simulation configuration.

use crate::error::{Result, SimError};
use crate::rules::Rules;
use serde::Deserialize;

pub const DEFAULT_PLAYER_COUNT: u64 = 10_000;

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Number range and ticket size
    pub rules: Rules,

    /// Players buying a ticket in each run
    pub player_count: u64,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Independent simulations to perform, each with its own draw
    pub runs: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            player_count: DEFAULT_PLAYER_COUNT,
            seed: None,
            runs: 1,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Parses a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SimError::configuration(format!("failed to parse config: {}", e)))
    }

    /// Quick seeded config for reproducible checks
    pub fn seeded(player_count: u64, seed: u64) -> Self {
        Self {
            player_count,
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.rules.validate()?;
        if self.player_count == 0 {
            return Err(SimError::configuration("player_count must be at least 1"));
        }
        if self.runs == 0 {
            return Err(SimError::configuration("runs must be at least 1"));
        }
        Ok(())
    }

    /// Seed for run `run_idx`; runs after the first get `seed + run_idx`.
    pub fn seed_for_run(&self, run_idx: u32) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(run_idx as u64))
    }
}
