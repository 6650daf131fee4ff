//! Match-count tally.

use std::collections::BTreeMap;

/// Players per match count, ordered by match count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTally {
    counts: BTreeMap<usize, u64>,
}

impl MatchTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that one player matched exactly `match_count` numbers.
    pub fn record_match(&mut self, match_count: usize) {
        *self.counts.entry(match_count).or_insert(0) += 1;
    }

    /// Players who matched exactly `match_count` numbers.
    pub fn get(&self, match_count: usize) -> u64 {
        self.counts.get(&match_count).copied().unwrap_or(0)
    }

    /// Players recorded across every bucket.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn max_match_count(&self) -> Option<usize> {
        self.counts.keys().next_back().copied()
    }

    /// `(match_count, players)` pairs, ascending by match count.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().map(|(&k, &v)| (k, v))
    }

    /// Adds another tally bucket by bucket. Order of merges does not matter.
    pub fn merge(&mut self, other: &MatchTally) {
        for (match_count, players) in other.iter() {
            *self.counts.entry(match_count).or_insert(0) += players;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_match() {
        let mut tally = MatchTally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.get(2), 0);

        tally.record_match(2);
        tally.record_match(0);
        tally.record_match(2);

        assert_eq!(tally.get(0), 1);
        assert_eq!(tally.get(2), 2);
        assert_eq!(tally.get(1), 0);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.max_match_count(), Some(2));
    }

    #[test]
    fn test_iter_is_ascending() {
        let mut tally = MatchTally::new();
        for count in [5, 1, 3, 1, 0] {
            tally.record_match(count);
        }
        let keys: Vec<usize> = tally.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![0, 1, 3, 5]);
    }

    #[test]
    fn test_merge_is_commutative() {
        let mut a = MatchTally::new();
        a.record_match(0);
        a.record_match(1);
        let mut b = MatchTally::new();
        b.record_match(1);
        b.record_match(3);

        let mut ab = a.clone();
        ab.merge(&b);
        let mut ba = b.clone();
        ba.merge(&a);

        assert_eq!(ab, ba);
        assert_eq!(ab.total(), 4);
        assert_eq!(ab.get(1), 2);
    }
}
