// Collection validation
//
// The query engine assumes ids are unique and terms are unique; data loaded
// from outside the built-in sample is checked here before use.

use std::collections::HashSet;

use crate::entry::Entry;

/// Collection validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// An entry has an empty id
    #[error("entry at position {index} has an empty id")]
    EmptyId {
        /// Position of the offending entry
        index: usize,
    },

    /// An entry has an empty term
    #[error("entry '{id}' has an empty term")]
    EmptyTerm {
        /// Id of the offending entry
        id: String,
    },

    /// Two entries share an id
    #[error("duplicate entry id '{id}'")]
    DuplicateId {
        /// The repeated id
        id: String,
    },

    /// Two entries share a term (compared case-insensitively)
    #[error("duplicate term '{term}'")]
    DuplicateTerm {
        /// The repeated term
        term: String,
    },
}

/// Check a collection against the invariants the query engine assumes.
///
/// Returns the first violation found, in input order.
pub fn validate(entries: &[Entry]) -> Result<(), ValidationError> {
    let mut seen_ids = HashSet::new();
    let mut seen_terms = HashSet::new();

    for (index, entry) in entries.iter().enumerate() {
        if entry.id.is_empty() {
            return Err(ValidationError::EmptyId { index });
        }
        if entry.term.is_empty() {
            return Err(ValidationError::EmptyTerm {
                id: entry.id.clone(),
            });
        }
        if !seen_ids.insert(entry.id.clone()) {
            return Err(ValidationError::DuplicateId {
                id: entry.id.clone(),
            });
        }
        if !seen_terms.insert(entry.term.to_lowercase()) {
            return Err(ValidationError::DuplicateTerm {
                term: entry.term.clone(),
            });
        }
    }

    Ok(())
}
