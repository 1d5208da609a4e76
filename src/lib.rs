//! snipmatch: fuzzy matching and ranking for interactive search lists
//!
//! Given a user query and one or two parallel lists of candidate
//! strings, snipmatch finds every candidate that fuzzily contains the
//! query, scores match quality, reports the matched byte ranges for
//! highlighting, and returns a best-to-worst ranking. Two parallel
//! lists (two fields of the same record) merge into one ranked list
//! keyed by the shared candidate index.
//!
//! The engine is pure and synchronous: every call is a function of its
//! inputs with no shared state, no I/O and no caching. Callers re-invoke
//! it on every query change and own the returned results entirely.
//!
//! All offsets are byte offsets and case folding is ASCII-only, with `/`
//! and `\` treated as equal; non-ASCII bytes match only when identical.

pub mod fuzzy;
pub mod parser;
pub mod ranking;
pub mod types;

pub use ranking::{search, search_dual};
pub use types::{Match, MatchRange, MultiMatch};
