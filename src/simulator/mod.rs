//! Monte Carlo lottery simulator.
//!
//! Draws one set of numbers, hands a random ticket to every player and tallies
//! how many numbers each ticket matched. Run many players to estimate the
//! probability of each match count.

mod config;
mod report;
mod runner;
mod tally;

pub use config::{SimConfig, DEFAULT_PLAYER_COUNT};
pub use report::{combined_text, format_thousands, summarize_tally, MatchSummary, SimResult};
pub use runner::{run_simulation, run_simulations, SimPhase, Simulation};
pub use tally::MatchTally;
