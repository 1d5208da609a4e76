//! Candidate ranking: single-list search and dual-list merge
//!
//! `search` ranks one candidate list best-to-worst. `search_dual` ranks
//! two parallel lists describing the same records (for example a label
//! field and a content field) and merges the per-field matches into one
//! ranked list keyed by the shared candidate index.
//!
//! Both sorts are stable with strict comparators, so equal-score
//! candidates keep their input order.

use tracing::debug;

use crate::parser::ParsedQuery;
use crate::types::{Match, MultiMatch};

/// Rank every candidate in `targets` against `query`, best match first.
///
/// Candidates that do not match are dropped. An empty query returns all
/// candidates unranked, in input order, with score 0 and no ranges, so
/// an empty search box can show the full list.
pub fn search<S: AsRef<str>>(query: &str, targets: &[S]) -> Vec<Match> {
    if query.is_empty() {
        return targets
            .iter()
            .enumerate()
            .map(|(index, target)| Match {
                text: target.as_ref().to_string(),
                index,
                score: 0,
                ranges: Vec::new(),
            })
            .collect();
    }

    let parsed = ParsedQuery::parse(query);
    let mut matches: Vec<Match> = Vec::new();
    for (index, target) in targets.iter().enumerate() {
        let target = target.as_ref();
        let scored = parsed.score_target(target);
        if scored.score > 0 {
            matches.push(Match {
                text: target.to_string(),
                index,
                score: scored.score,
                ranges: scored.ranges,
            });
        }
    }

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    debug!(
        "query {:?} matched {} of {} candidates",
        query,
        matches.len(),
        targets.len()
    );
    matches
}

/// Rank two parallel candidate lists and merge the results by shared
/// index, best combined match first.
///
/// A record that matched in only one list keeps `None` on the other
/// side; a record that matched in both sums the two scores. The lists
/// need not be the same length.
pub fn search_dual<S: AsRef<str>>(
    query: &str,
    targets1: &[S],
    targets2: &[S],
) -> Vec<MultiMatch> {
    let mut matches1 = search(query, targets1);
    let mut matches2 = search(query, targets2);

    // Score order is irrelevant for the join; index order makes it linear.
    matches1.sort_by(|a, b| a.index.cmp(&b.index));
    matches2.sort_by(|a, b| a.index.cmp(&b.index));

    let mut combined: Vec<MultiMatch> = Vec::with_capacity(matches1.len().max(matches2.len()));
    let mut matches2 = matches2.into_iter().peekable();

    for m1 in matches1 {
        while let Some(m2) = matches2.next_if(|m2| m2.index < m1.index) {
            combined.push(MultiMatch::only_second(m2));
        }
        match matches2.next_if(|m2| m2.index == m1.index) {
            Some(m2) => combined.push(MultiMatch::both(m1, m2)),
            None => combined.push(MultiMatch::only_first(m1)),
        }
    }
    for m2 in matches2 {
        combined.push(MultiMatch::only_second(m2));
    }

    combined.sort_by(|a, b| b.score.cmp(&a.score));
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(targets: &[&str]) -> Vec<String> {
        targets.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_ranks_best_match_first() {
        let targets = strings(&[
            "docker bash: docker exec -ti container bash",
            "openssl view cert: openssl x509 -text -noout -in",
        ]);

        let ranked = search("cert", &targets);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[1].index, 0);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_empty_query_returns_identity() {
        let targets = strings(&["banana", "apple", "pear"]);

        let ranked = search("", &targets);
        let texts: Vec<&str> = ranked.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["banana", "apple", "pear"]);
        assert!(ranked.iter().all(|m| m.score == 0 && m.ranges.is_empty()));
        assert_eq!(ranked[2].index, 2);
    }

    #[test]
    fn test_whitespace_only_query_matches_nothing() {
        let targets = strings(&["banana", "apple"]);
        assert!(search("   ", &targets).is_empty());
    }

    #[test]
    fn test_non_matches_are_dropped() {
        let targets = strings(&["banana", "apple", "pear"]);

        let ranked = search("pp", &targets);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].index, 1);
        assert!(ranked[0].score > 0);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let targets = strings(&["abc", "abc", "abc"]);

        let ranked = search("ab", &targets);
        let indices: Vec<usize> = ranked.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_match_carries_highlight_ranges() {
        let targets = strings(&["Hello"]);

        let ranked = search("lo", &targets);
        assert_eq!(ranked.len(), 1);
        assert_eq!(
            ranked[0].ranges,
            vec![crate::types::MatchRange { start: 3, end: 4 }]
        );
    }

    #[test]
    fn test_dual_merges_both_sides_by_index() {
        let targets1 = strings(&["a", "b"]);
        let targets2 = strings(&["x", "b-match"]);

        let merged = search_dual("b", &targets1, &targets2);
        assert_eq!(merged.len(), 1);

        let m = &merged[0];
        assert_eq!(m.index, 1);
        let match1 = m.match1.as_ref().unwrap();
        let match2 = m.match2.as_ref().unwrap();
        assert_eq!(m.score, match1.score + match2.score);
        assert_eq!(match1.index, 1);
        assert_eq!(match2.index, 1);
    }

    #[test]
    fn test_dual_keeps_one_sided_matches() {
        let targets1 = strings(&["a", "b"]);
        let targets2 = strings(&["x", "b-match"]);

        let merged = search_dual("x", &targets1, &targets2);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].index, 0);
        assert!(merged[0].match1.is_none());
        assert_eq!(merged[0].score, merged[0].match2.as_ref().unwrap().score);
    }

    #[test]
    fn test_dual_orders_by_combined_score() {
        // index 2 matches in both lists, 0 only in the first, 1 only in
        // the second; the combined hit outranks the one-sided ones, and
        // the equal-score pair keeps merge (index) order
        let targets1 = strings(&["zz", "a", "zz"]);
        let targets2 = strings(&["b", "zz", "zz"]);

        let merged = search_dual("zz", &targets1, &targets2);
        let indices: Vec<usize> = merged.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![2, 0, 1]);
        assert!(merged[0].match1.is_some() && merged[0].match2.is_some());
        assert_eq!(merged[0].score, merged[1].score + merged[2].score);
    }

    #[test]
    fn test_dual_tolerates_mismatched_lengths() {
        let targets1 = strings(&["zz"]);
        let targets2 = strings(&["a", "zz", "zz"]);

        let merged = search_dual("zz", &targets1, &targets2);
        let indices: Vec<usize> = merged.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(merged[0].match1.is_some() && merged[0].match2.is_none());
        assert!(merged[1].match1.is_none() && merged[1].match2.is_some());
    }

    #[test]
    fn test_dual_empty_lists_yield_empty_result() {
        let none: Vec<String> = Vec::new();
        assert!(search_dual("query", &none, &none).is_empty());
    }
}
