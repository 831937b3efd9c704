// lerequete - Query & Highlight Engine
//
// *La Requête* (The Query) - Substring search over glossary entries with
// additive relevance ranking and match highlighting

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Match highlighting and related-entry computation.
pub mod highlight;

/// Raw query parsing into a mode and term list.
pub mod query;

/// Additive relevance scoring.
pub mod ranking;

/// Filter & rank over an in-memory collection.
pub mod search;

pub use highlight::{highlight, RelatedEntry, Span};
pub use query::{ParsedQuery, SearchMode};
pub use ranking::RelevanceScorer;
pub use search::{filter_and_rank, RankedEntry, SearchEngine};

/// Engine library initialization
pub fn init() {
    let _ = tracing::subscriber::set_default(tracing::subscriber::NoSubscriber::default());
}
