// Glossary entry records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One explanatory text unit within an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Sentence or paragraph of explanatory content
    pub text: String,

    /// The entry term this item originated from. May differ from the
    /// owning entry's term when the item is cross-referenced material.
    pub source_term: String,
}

impl ContentItem {
    /// Create a new content item
    pub fn new(text: impl Into<String>, source_term: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_term: source_term.into(),
        }
    }

    /// Whether this item was pulled in from another entry
    pub fn is_cross_reference(&self, owning_term: &str) -> bool {
        !self.source_term.is_empty() && self.source_term != owning_term
    }
}

/// A glossary record
///
/// `content` is display-ordered and never mutated after construction; a
/// collection of entries is read-only input for the lifetime of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique stable identifier, used as an anchor/reference target
    pub id: String,

    /// Display name of the concept. Assumed unique within a collection;
    /// uniqueness is checkable via [`crate::validate`], not enforced here.
    pub term: String,

    /// Ordered explanatory content items
    pub content: Vec<ContentItem>,

    /// Auxiliary strings contributing to relevance scoring
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Related concept names contributing to relevance scoring
    #[serde(default)]
    pub shared_terms: Vec<String>,

    /// Creation timestamp, display-only
    pub compiled_date: NaiveDate,

    /// Last-modification timestamp, display-only
    pub edited_date: NaiveDate,
}
