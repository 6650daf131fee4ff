//! Lottery rules: the number range and how many numbers make up a ticket.

use crate::error::{Result, SimError};
use serde::Deserialize;
use std::ops::RangeInclusive;

pub const DEFAULT_MIN_NUMBER: u32 = 1;
pub const DEFAULT_MAX_NUMBER: u32 = 49;
pub const DEFAULT_REQUIRED_SELECTION_COUNT: u32 = 6;

/// Defines the lottery setup. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    min_number: u32,
    max_number: u32,
    required_selection_count: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_number: DEFAULT_MIN_NUMBER,
            max_number: DEFAULT_MAX_NUMBER,
            required_selection_count: DEFAULT_REQUIRED_SELECTION_COUNT,
        }
    }
}

impl Rules {
    /// Builds rules without checking them. Use [`Rules::validate`] before drawing.
    pub fn new(min_number: u32, max_number: u32, required_selection_count: u32) -> Self {
        Self {
            min_number,
            max_number,
            required_selection_count,
        }
    }

    pub fn min_number(&self) -> u32 {
        self.min_number
    }

    pub fn max_number(&self) -> u32 {
        self.max_number
    }

    pub fn required_selection_count(&self) -> u32 {
        self.required_selection_count
    }

    /// Number of balls a draw or ticket holds, as a length.
    pub fn pick_count(&self) -> usize {
        self.required_selection_count as usize
    }

    /// Inclusive range every ball is drawn from.
    pub fn number_range(&self) -> RangeInclusive<u32> {
        self.min_number..=self.max_number
    }

    /// How many distinct numbers the range holds.
    pub fn range_size(&self) -> usize {
        if self.max_number < self.min_number {
            0
        } else {
            (self.max_number - self.min_number) as usize + 1
        }
    }

    /// `min < required < max` and `min >= 1`.
    pub fn is_valid(&self) -> bool {
        let ordered = self.min_number < self.required_selection_count
            && self.required_selection_count < self.max_number;
        let positive = self.min_number >= 1;
        // Both conjuncts are always evaluated.
        ordered & positive
    }

    /// Fails with [`SimError::Configuration`] when the rules cannot produce a draw.
    pub fn validate(&self) -> Result<()> {
        if !self.is_valid() {
            return Err(SimError::configuration(format!(
                "incorrect parameters for lottery: need 1 <= min_number ({}) < \
                 required_selection_count ({}) < max_number ({})",
                self.min_number, self.required_selection_count, self.max_number
            )));
        }

        if self.range_size() < self.pick_count() {
            return Err(SimError::configuration(format!(
                "range {}..={} holds {} numbers, fewer than the {} required",
                self.min_number,
                self.max_number,
                self.range_size(),
                self.required_selection_count
            )));
        }

        Ok(())
    }
}
