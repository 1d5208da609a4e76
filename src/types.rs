//! Match result types and highlight-range arithmetic
//!
//! All offsets are byte offsets into the target string. Ranges are
//! inclusive on both ends and, once normalized, sorted by start,
//! pairwise disjoint and non-adjacent.

use serde::{Deserialize, Serialize};

/// Inclusive span of matched bytes in a target string, used for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

impl MatchRange {
    /// Coalesce a strictly increasing list of matched byte positions into
    /// inclusive ranges: consecutive positions extend the current range,
    /// any gap starts a new one.
    pub fn from_positions(positions: &[usize]) -> Vec<MatchRange> {
        let mut ranges: Vec<MatchRange> = Vec::new();
        for &pos in positions {
            match ranges.last_mut() {
                Some(current) if pos == current.end + 1 => current.end = pos,
                _ => ranges.push(MatchRange { start: pos, end: pos }),
            }
        }
        ranges
    }

    fn touches(&self, other: &MatchRange) -> bool {
        // inclusive bounds: adjacency counts, so [0,1] and [2,3] merge
        self.start <= other.end.saturating_add(1) && other.start <= self.end.saturating_add(1)
    }
}

/// Sort ranges by start and merge every overlapping or adjacent pair.
/// Idempotent.
pub fn normalize_ranges(mut ranges: Vec<MatchRange>) -> Vec<MatchRange> {
    ranges.sort_by(|a, b| a.start.cmp(&b.start));

    let mut normalized: Vec<MatchRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match normalized.last_mut() {
            Some(current) if current.touches(&range) => {
                current.start = current.start.min(range.start);
                current.end = current.end.max(range.end);
            }
            _ => normalized.push(range),
        }
    }
    normalized
}

/// A scored fuzzy match of one candidate string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The candidate string that matched.
    pub text: String,
    /// Position of the candidate in its input list; the join key for
    /// mapping results back to the caller's records.
    pub index: usize,
    /// Ranking score. Zero only in the empty-query identity pass.
    pub score: u32,
    /// Matched byte ranges, sorted, disjoint and non-adjacent.
    pub ranges: Vec<MatchRange>,
}

/// A match merged across two parallel candidate lists that describe the
/// same record by shared index. At least one side is always `Some`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiMatch {
    pub index: usize,
    /// Sum of the scores of the sides that matched.
    pub score: u32,
    pub match1: Option<Match>,
    pub match2: Option<Match>,
}

impl MultiMatch {
    pub(crate) fn both(match1: Match, match2: Match) -> Self {
        let index = match1.index;
        let score = match1.score + match2.score;
        Self {
            index,
            score,
            match1: Some(match1),
            match2: Some(match2),
        }
    }

    pub(crate) fn only_first(match1: Match) -> Self {
        Self {
            index: match1.index,
            score: match1.score,
            match1: Some(match1),
            match2: None,
        }
    }

    pub(crate) fn only_second(match2: Match) -> Self {
        Self {
            index: match2.index,
            score: match2.score,
            match1: None,
            match2: Some(match2),
        }
    }
}
