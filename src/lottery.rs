//! Lottery draw, player ticket generation and scoring.
//!
//! Draws and tickets use the same sampler: the full number range is laid out
//! in a fresh buffer, partially shuffled, and the shuffled end is kept. Every
//! combination of `required_selection_count` numbers is equally likely and no
//! pool is shared between calls.

use crate::error::{Result, SimError};
use crate::rules::Rules;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// Picks `rules.pick_count()` distinct numbers uniformly from the rules' range.
///
/// The returned numbers are in draw order, not sorted.
pub fn pick_numbers<R: Rng + ?Sized>(rules: &Rules, rng: &mut R) -> Vec<u32> {
    let mut pool: Vec<u32> = rules.number_range().collect();
    let (picked, _rest) = pool.partial_shuffle(rng, rules.pick_count());
    picked.to_vec()
}

/// Generates one player's ticket, independent of the draw and other players.
pub fn generate_selection<R: Rng + ?Sized>(rules: &Rules, rng: &mut R) -> Vec<u32> {
    pick_numbers(rules, rng)
}

/// The numbers drawn for a lottery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// Ascending.
    numbers: Vec<u32>,
    lookup: HashSet<u32>,
}

impl Draw {
    pub(crate) fn from_numbers(mut numbers: Vec<u32>) -> Self {
        numbers.sort_unstable();
        let lookup = numbers.iter().copied().collect();
        Self { numbers, lookup }
    }

    /// Drawn numbers in ascending order.
    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn contains(&self, number: u32) -> bool {
        self.lookup.contains(&number)
    }

    /// Size of the intersection between `selection` (as a set) and the draw.
    pub fn matches(&self, selection: &[u32]) -> usize {
        let picked: HashSet<u32> = selection.iter().copied().collect();
        picked.iter().filter(|n| self.lookup.contains(n)).count()
    }
}

/// Handles the lottery draw and checks tickets against it.
#[derive(Debug, Clone)]
pub struct Lottery {
    rules: Rules,
    draw: Option<Draw>,
}

impl Lottery {
    /// Fails with [`SimError::Configuration`] if the rules are invalid.
    pub fn new(rules: Rules) -> Result<Self> {
        rules.validate()?;
        Ok(Self { rules, draw: None })
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Performs a fresh draw, replacing any previous one.
    pub fn draw_numbers<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Draw {
        let draw = Draw::from_numbers(pick_numbers(&self.rules, rng));
        debug!(numbers = ?draw.numbers(), "lottery draw complete");
        self.draw.insert(draw)
    }

    pub fn draw(&self) -> Option<&Draw> {
        self.draw.as_ref()
    }

    fn current_draw(&self) -> Result<&Draw> {
        self.draw
            .as_ref()
            .ok_or_else(|| SimError::invalid_state("draw has not happened yet"))
    }

    /// Counts how many numbers of a player's ticket were drawn.
    pub fn check_numbers(&self, selection: &[u32]) -> Result<usize> {
        Ok(self.current_draw()?.matches(selection))
    }

    pub fn is_drawn(&self, number: u32) -> Result<bool> {
        Ok(self.current_draw()?.contains(number))
    }

    /// Drawn numbers, ascending.
    pub fn drawn_numbers(&self) -> Result<Vec<u32>> {
        Ok(self.current_draw()?.numbers().to_vec())
    }
}
