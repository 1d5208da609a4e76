//! Single-string fuzzy scorer
//!
//! Scores one query against one target string with a dynamic-programming
//! score matrix plus a parallel consecutive-run matrix, then backtracks
//! to recover the matched byte positions for highlighting.
//!
//! Matching is byte-oriented with ASCII-only case folding, so matrix
//! indices and highlight offsets share one coordinate system. The path
//! separators `/` and `\` fold equal to each other.

/// Targets are only compared up to this many bytes; anything beyond is
/// never scored or matched.
pub(crate) const MAX_TARGET_LEN: usize = 512;

/// Score and matched byte positions for one query against one target.
///
/// A zero score means no match; positions are then empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuzzyScore {
    pub score: u32,
    pub positions: Vec<usize>,
}

/// Score `query` against `target`.
///
/// Returns a zero score if either string is empty or the capped target is
/// shorter than the query. Positions in the result are strictly
/// increasing and each points at a byte that fold-equals the
/// corresponding query byte.
pub fn score(target: &str, query: &str) -> FuzzyScore {
    score_folded(target, query, &query.to_ascii_lowercase(), true)
}

/// Scorer entry point for callers that already folded the query once.
pub(crate) fn score_folded(
    target: &str,
    query: &str,
    query_lower: &str,
    allow_non_contiguous: bool,
) -> FuzzyScore {
    if target.is_empty() || query.is_empty() {
        return FuzzyScore::default();
    }

    let target_len = target.len().min(MAX_TARGET_LEN);
    let query_len = query.len();
    if target_len < query_len {
        // query cannot possibly be contained in the target
        return FuzzyScore::default();
    }

    let target = &target.as_bytes()[..target_len];
    let target_lower: Vec<u8> = target.iter().map(u8::to_ascii_lowercase).collect();

    fill_and_backtrack(
        query.as_bytes(),
        query_lower.as_bytes(),
        target,
        &target_lower,
        allow_non_contiguous,
    )
}

/// Fill the score and run matrices row-major (one row per query byte),
/// then walk back from the bottom-right cell to collect the matched
/// positions.
///
/// Both matrices are flat `query_len * target_len` buffers indexed by
/// `qi * target_len + ti`.
fn fill_and_backtrack(
    query: &[u8],
    query_lower: &[u8],
    target: &[u8],
    target_lower: &[u8],
    allow_non_contiguous: bool,
) -> FuzzyScore {
    let query_len = query.len();
    let target_len = target.len();

    let mut scores = vec![0u32; query_len * target_len];
    let mut runs = vec![0u32; query_len * target_len];

    for qi in 0..query_len {
        let row = qi * target_len;
        let query_byte = query[qi];
        let query_lower_byte = query_lower[qi];

        for ti in 0..target_len {
            let current = row + ti;

            let left_score = if ti > 0 { scores[current - 1] } else { 0 };
            let (diag_score, run_len) = if qi > 0 && ti > 0 {
                let diag = row - target_len + ti - 1;
                (scores[diag], runs[diag])
            } else {
                (0, 0)
            };

            // Past the first query byte, a cell only scores when anchored
            // to a match of the previous query byte (the diagonal).
            // Otherwise "de" against "ede" would score its 'e' on the
            // target's first 'e' and claim an out-of-order match.
            let char_score = if qi > 0 && diag_score == 0 {
                0
            } else {
                compute_char_score(query_byte, query_lower_byte, target, target_lower, ti, run_len)
            };

            // Accept the cell as a match point when it beats (or meets)
            // the carry-over from the left. Contiguity only needs
            // checking on the first query byte; later rows are already
            // anchored through the diagonal.
            let accepted = char_score > 0
                && diag_score + char_score >= left_score
                && (allow_non_contiguous
                    || qi > 0
                    || target_lower[ti..].starts_with(query_lower));

            if accepted {
                scores[current] = diag_score + char_score;
                runs[current] = run_len + 1;
            } else {
                scores[current] = left_score;
                runs[current] = 0;
            }
        }
    }

    // Walk back from the bottom-right cell: a zero run means no match
    // here, step left; otherwise record the position and step diagonally.
    let mut positions = Vec::with_capacity(query_len);
    let mut qi = query_len;
    let mut ti = target_len;
    while qi > 0 && ti > 0 {
        if runs[(qi - 1) * target_len + (ti - 1)] == 0 {
            ti -= 1;
        } else {
            positions.push(ti - 1);
            qi -= 1;
            ti -= 1;
        }
    }
    positions.reverse();

    FuzzyScore {
        score: scores[query_len * target_len - 1],
        positions,
    }
}

/// Score one query byte against one target byte.
fn compute_char_score(
    query_byte: u8,
    query_lower_byte: u8,
    target: &[u8],
    target_lower: &[u8],
    ti: usize,
    run_len: u32,
) -> u32 {
    if !fold_equal(query_lower_byte, target_lower[ti]) {
        return 0;
    }

    // Base match bonus
    let mut score = 1;

    // Consecutive match bonus
    if run_len > 0 {
        score += run_len * 5;
    }

    // Exact case bonus
    if query_byte == target[ti] {
        score += 1;
    }

    if ti == 0 {
        // Start of target bonus
        score += 8;
    } else {
        let separator = separator_bonus(target[ti - 1]);
        if separator > 0 {
            // Bonus for matching right after a separator
            score += separator;
        } else if target[ti].is_ascii_uppercase() {
            // Camel-case word start
            score += 2;
        }
    }

    score
}

/// Case-folded byte equality; `/` and `\` count as the same character so
/// platform path differences do not break matching.
fn fold_equal(a: u8, b: u8) -> bool {
    if a == b {
        return true;
    }
    if a == b'/' || a == b'\\' {
        return b == b'/' || b == b'\\';
    }
    false
}

/// Path separators outrank the other word-boundary characters.
fn separator_bonus(byte: u8) -> u32 {
    match byte {
        b'/' | b'\\' => 5,
        b'_' | b'-' | b'.' | b' ' | b'\'' | b'"' | b':' => 4,
        _ => 0,
    }
}
