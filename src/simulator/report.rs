//! Simulation result and text summary.

use super::tally::MatchTally;
use std::io::{self, Write};

/// One line of the match distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSummary {
    pub match_count: usize,
    pub players: u64,
    /// Share of all players, rounded to 2 decimal places
    pub percentage: f64,
}

/// Outcome of a single simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimResult {
    pub total_players: u64,
    pub tally: MatchTally,
    /// Ascending; empty until the simulation finishes.
    pub drawn_numbers: Vec<u32>,
}

impl SimResult {
    pub fn new(total_players: u64) -> Self {
        Self {
            total_players,
            tally: MatchTally::new(),
            drawn_numbers: Vec::new(),
        }
    }

    /// Records that one player matched `match_count` numbers.
    pub fn record_match(&mut self, match_count: usize) {
        self.tally.record_match(match_count);
    }

    /// Distribution of match counts, ascending.
    pub fn summarize(&self) -> Vec<MatchSummary> {
        summarize_tally(&self.tally, self.total_players)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str(&format!(
            "total players = {}\n",
            format_thousands(self.total_players)
        ));
        report.push_str(&format!("numbers = {:?}\n", self.drawn_numbers));
        push_distribution(&mut report, &self.summarize());

        report
    }

    /// Writes the text report to `out`.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.to_text().as_bytes())
    }
}

/// Builds the distribution lines for `tally` against `total_players`.
pub fn summarize_tally(tally: &MatchTally, total_players: u64) -> Vec<MatchSummary> {
    tally
        .iter()
        .map(|(match_count, players)| MatchSummary {
            match_count,
            players,
            percentage: percentage_of(players, total_players),
        })
        .collect()
}

/// Text report of several runs pooled together.
pub fn combined_text(results: &[SimResult]) -> String {
    let mut tally = MatchTally::new();
    let mut total_players = 0;
    for result in results {
        tally.merge(&result.tally);
        total_players += result.total_players;
    }

    let mut report = String::new();
    report.push_str(&format!("combined runs = {}\n", results.len()));
    report.push_str(&format!(
        "total players = {}\n",
        format_thousands(total_players)
    ));
    push_distribution(&mut report, &summarize_tally(&tally, total_players));

    report
}

fn push_distribution(report: &mut String, rows: &[MatchSummary]) {
    for row in rows {
        report.push_str(&format!(
            "Ball count = {} Players Matched = {} Percentage = {:.2}%\n",
            row.match_count,
            format_thousands(row.players),
            row.percentage
        ));
    }
}

fn percentage_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = 100.0 * part as f64 / total as f64;
    (pct * 100.0).round() / 100.0
}

/// Formats `n` with comma thousands separators.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
