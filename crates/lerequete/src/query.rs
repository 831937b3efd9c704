// Query parsing
//
// A raw search string becomes a mode plus a list of terms. `|` separates
// alternatives (any-term match); `||` separates terms that must co-occur
// within a single content item (same-line match).

use serde::{Deserialize, Serialize};

/// How a query's terms are applied to a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    /// Terms separated by `|`; an entry matches if any term matches anywhere
    AnyMatch,

    /// Terms separated by `||`; a content item matches only if every term
    /// appears within that item's text
    SameLineMatch,
}

/// A parsed query, recomputed from the raw input on every change
///
/// Has no identity or persistence of its own; the raw string is kept
/// because the relevance scorer derives its comparison words from it
/// rather than from `terms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// The user-supplied string, verbatim
    pub raw: String,

    /// Non-empty trimmed pieces of the raw string, in input order
    pub terms: Vec<String>,

    /// Delimiter-derived mode
    pub mode: SearchMode,
}

impl ParsedQuery {
    /// Parse a raw search string.
    ///
    /// The `||` check must run before the `|` split: every occurrence of
    /// `||` also contains `|`, so splitting on the single delimiter first
    /// would misreport the mode and garble the terms.
    ///
    /// There is no escaping mechanism. A term containing a literal `|`
    /// cannot be searched for under [`SearchMode::AnyMatch`], and a term
    /// containing `||` cannot be searched for at all.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self {
                raw: String::new(),
                terms: Vec::new(),
                mode: SearchMode::AnyMatch,
            };
        }

        let (pieces, mode): (Vec<&str>, SearchMode) = if raw.contains("||") {
            (raw.split("||").collect(), SearchMode::SameLineMatch)
        } else {
            (raw.split('|').collect(), SearchMode::AnyMatch)
        };

        let terms = pieces
            .into_iter()
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            raw: raw.to_string(),
            terms,
            mode,
        }
    }

    /// Whether this query filters at all.
    ///
    /// Empty terms mean "include everything, default sort order", never
    /// "nothing matches".
    pub fn is_unfiltered(&self) -> bool {
        self.terms.is_empty()
    }
}
