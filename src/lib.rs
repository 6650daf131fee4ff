//! Lottery Simulator Library
//!
//! Estimates how often players match 0..=N balls in a lottery draw.

pub mod build_info;
pub mod error;
pub mod lottery;
pub mod rules;
pub mod simulator;

pub use error::{Result, SimError};
pub use lottery::{generate_selection, pick_numbers, Draw, Lottery};
pub use rules::Rules;
