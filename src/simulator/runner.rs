//! Simulation runner.
//!
//! A [`Simulation`] moves through `Configured -> DrawGenerated ->
//! PlayersProcessed(n) -> Summarized` and produces exactly one [`SimResult`].

use super::config::SimConfig;
use super::report::SimResult;
use crate::error::{Result, SimError};
use crate::lottery::{generate_selection, Draw, Lottery};
use crate::rules::Rules;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

/// Where a simulation is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimPhase {
    Configured,
    DrawGenerated,
    PlayersProcessed(u64),
    Summarized,
}

/// Runs a lottery for a fixed number of players.
#[derive(Debug)]
pub struct Simulation {
    player_count: u64,
    lottery: Lottery,
    result: SimResult,
    phase: SimPhase,
}

impl Simulation {
    /// Fails with [`SimError::Configuration`] on invalid rules or zero players.
    pub fn new(player_count: u64, rules: Rules) -> Result<Self> {
        if player_count == 0 {
            return Err(SimError::configuration("player_count must be at least 1"));
        }
        let lottery = Lottery::new(rules)?;

        Ok(Self {
            player_count,
            lottery,
            result: SimResult::new(player_count),
            phase: SimPhase::Configured,
        })
    }

    pub fn from_config(config: &SimConfig) -> Result<Self> {
        Self::new(config.player_count, config.rules)
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn player_count(&self) -> u64 {
        self.player_count
    }

    /// Draws the lottery numbers. Only valid once, before any player.
    pub fn generate_draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Draw> {
        if self.phase != SimPhase::Configured {
            return Err(SimError::invalid_state(format!(
                "draw already generated (phase {:?})",
                self.phase
            )));
        }

        self.phase = SimPhase::DrawGenerated;
        debug!(player_count = self.player_count, "draw generated");
        Ok(self.lottery.draw_numbers(rng))
    }

    /// Generates, scores and records one player. Returns the player's match count.
    pub fn process_player<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize> {
        let processed = match self.phase {
            // Scoring without a draw is rejected by the lottery below.
            SimPhase::Configured | SimPhase::DrawGenerated => 0,
            SimPhase::PlayersProcessed(n) if n < self.player_count => n,
            SimPhase::PlayersProcessed(_) => {
                return Err(SimError::invalid_state(format!(
                    "all {} players already processed",
                    self.player_count
                )))
            }
            SimPhase::Summarized => {
                return Err(SimError::invalid_state("simulation already summarized"))
            }
        };

        let selection = generate_selection(self.lottery.rules(), rng);
        let matches = self.lottery.check_numbers(&selection)?;
        self.result.record_match(matches);
        self.phase = SimPhase::PlayersProcessed(processed + 1);

        trace!(player = processed + 1, matches, "player scored");
        Ok(matches)
    }

    /// Attaches the drawn numbers and hands back the result.
    pub fn finish(mut self) -> Result<SimResult> {
        match self.phase {
            SimPhase::PlayersProcessed(n) if n == self.player_count => {}
            phase => {
                return Err(SimError::invalid_state(format!(
                    "cannot summarize in phase {:?}, {} players expected",
                    phase, self.player_count
                )))
            }
        }

        self.result.drawn_numbers = self.lottery.drawn_numbers()?;
        self.phase = SimPhase::Summarized;
        debug!(
            total_players = self.result.total_players,
            "simulation summarized"
        );
        Ok(self.result)
    }

    /// Runs the whole simulation: one draw, then every player in turn.
    pub fn start<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<SimResult> {
        self.generate_draw(rng)?;
        for _ in 0..self.player_count {
            self.process_player(rng)?;
        }
        self.finish()
    }
}

fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Run a single simulation and return its result.
pub fn run_simulation(config: &SimConfig) -> Result<SimResult> {
    config.validate()?;
    let mut rng = create_rng(config.seed_for_run(0));
    Simulation::from_config(config)?.start(&mut rng)
}

/// Run `config.runs` independent simulations.
pub fn run_simulations(config: &SimConfig) -> Result<Vec<SimResult>> {
    config.validate()?;
    let mut results = Vec::with_capacity(config.runs as usize);

    for run_idx in 0..config.runs {
        let mut rng = create_rng(config.seed_for_run(run_idx));
        let result = Simulation::from_config(config)?.start(&mut rng)?;

        if config.verbosity >= 2 {
            info!(
                run = run_idx + 1,
                runs = config.runs,
                numbers = ?result.drawn_numbers,
                top_match = ?result.tally.max_match_count(),
                "run complete"
            );
        }
        results.push(result);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_full_simulation() {
        let config = SimConfig::seeded(1000, 42);
        let result = run_simulation(&config).unwrap();

        assert_eq!(result.total_players, 1000);
        assert_eq!(result.tally.total(), 1000);
        assert!(result.tally.max_match_count().unwrap() <= 6);
        assert_eq!(result.drawn_numbers.len(), 6);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = SimConfig::seeded(500, 99);
        assert_eq!(
            run_simulation(&config).unwrap(),
            run_simulation(&config).unwrap()
        );
    }

    #[test]
    fn test_phases_advance_in_order() {
        let mut rng = create_test_rng();
        let mut sim = Simulation::new(3, Rules::default()).unwrap();
        assert_eq!(sim.phase(), SimPhase::Configured);

        sim.generate_draw(&mut rng).unwrap();
        assert_eq!(sim.phase(), SimPhase::DrawGenerated);

        for n in 1..=3 {
            let matches = sim.process_player(&mut rng).unwrap();
            assert!(matches <= 6);
            assert_eq!(sim.phase(), SimPhase::PlayersProcessed(n));
        }

        let result = sim.finish().unwrap();
        assert_eq!(result.tally.total(), 3);
    }

    #[test]
    fn test_player_before_draw_fails() {
        let mut rng = create_test_rng();
        let mut sim = Simulation::new(3, Rules::default()).unwrap();
        let err = sim.process_player(&mut rng).unwrap_err();
        assert!(err.is_invalid_state());
        assert_eq!(sim.phase(), SimPhase::Configured);
    }

    #[test]
    fn test_second_draw_fails() {
        let mut rng = create_test_rng();
        let mut sim = Simulation::new(3, Rules::default()).unwrap();
        sim.generate_draw(&mut rng).unwrap();
        assert!(sim.generate_draw(&mut rng).unwrap_err().is_invalid_state());
    }

    #[test]
    fn test_extra_player_fails() {
        let mut rng = create_test_rng();
        let mut sim = Simulation::new(1, Rules::default()).unwrap();
        sim.generate_draw(&mut rng).unwrap();
        sim.process_player(&mut rng).unwrap();
        assert!(sim.process_player(&mut rng).unwrap_err().is_invalid_state());
    }

    #[test]
    fn test_finish_before_all_players_fails() {
        let mut rng = create_test_rng();
        let mut sim = Simulation::new(2, Rules::default()).unwrap();
        sim.generate_draw(&mut rng).unwrap();
        sim.process_player(&mut rng).unwrap();
        assert!(sim.finish().unwrap_err().is_invalid_state());

        let sim = Simulation::new(2, Rules::default()).unwrap();
        assert!(sim.finish().unwrap_err().is_invalid_state());
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(Simulation::new(100, Rules::new(10, 5, 6))
            .unwrap_err()
            .is_configuration());
        assert!(Simulation::new(0, Rules::default())
            .unwrap_err()
            .is_configuration());

        let config = SimConfig {
            rules: Rules::new(1, 5, 6),
            ..Default::default()
        };
        assert!(run_simulation(&config).unwrap_err().is_configuration());
    }

    #[test]
    fn test_multiple_runs_use_distinct_seeds() {
        let config = SimConfig {
            runs: 3,
            ..SimConfig::seeded(200, 7)
        };
        let results = run_simulations(&config).unwrap();

        assert_eq!(results.len(), 3);
        for result in &results {
            assert_eq!(result.tally.total(), 200);
        }
        // First run matches the single-run entry point with the same seed
        assert_eq!(results[0], run_simulation(&config).unwrap());
        assert_ne!(results[0].drawn_numbers, results[1].drawn_numbers);
    }
}
