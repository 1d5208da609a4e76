//! Query preparation & multi-word splitting
//!
//! A query is trimmed of outer whitespace, split on single spaces and
//! case-folded once up front. Scoring a target against a multi-word
//! query requires every word to match the same target (logical AND):
//! the word scores sum and their highlight ranges union.

use crate::fuzzy;
use crate::types::{normalize_ranges, MatchRange};

/// A query split into its space-separated words, each folded once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    words: Vec<QueryWord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct QueryWord {
    raw: String,
    lower: String,
}

/// Combined score and highlight ranges for one target against a query.
///
/// A zero score means the target is not a match; ranges are then empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoredTarget {
    pub score: u32,
    pub ranges: Vec<MatchRange>,
}

impl ParsedQuery {
    /// Split a query on single spaces.
    ///
    /// Repeated interior spaces are not collapsed: the empty word they
    /// produce matches nothing and therefore fails the whole query.
    pub fn parse(query: &str) -> Self {
        let words = query
            .trim()
            .split(' ')
            .map(|word| QueryWord {
                raw: word.to_string(),
                lower: word.to_ascii_lowercase(),
            })
            .collect();
        Self { words }
    }

    /// Score one target against every word of the query.
    pub fn score_target(&self, target: &str) -> ScoredTarget {
        if self.words.len() == 1 {
            let word = &self.words[0];
            let scored = fuzzy::score_folded(target, &word.raw, &word.lower, true);
            return ScoredTarget {
                score: scored.score,
                ranges: MatchRange::from_positions(&scored.positions),
            };
        }

        let mut total = 0;
        let mut ranges = Vec::new();
        for word in &self.words {
            let scored = fuzzy::score_folded(target, &word.raw, &word.lower, true);
            if scored.score == 0 {
                // every word has to be found, or the target is out
                return ScoredTarget::default();
            }
            total += scored.score;
            ranges.extend(MatchRange::from_positions(&scored.positions));
        }

        ScoredTarget {
            score: total,
            ranges: normalize_ranges(ranges),
        }
    }
}
