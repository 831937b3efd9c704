// Match highlighting
//
// Splits display text into plain and matched spans, and computes for each
// matched fragment the entries a hover popover would link to.

use lelexique::Entry;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Identity and label of an entry a matched span links to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedEntry {
    /// Anchor target ([`Entry::id`])
    pub id: String,

    /// Display label ([`Entry::term`])
    pub term: String,
}

/// A contiguous run of display text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Span {
    /// Text outside any match, emitted verbatim
    Plain {
        /// Fragment text, original casing preserved
        text: String,
    },

    /// A fragment that case-insensitively equals one of the query terms
    Matched {
        /// Fragment text, original casing preserved
        text: String,

        /// Index of the first equal term. Consumers pick a highlight color
        /// via `color_index % palette_len`.
        color_index: usize,

        /// Entries whose term or content mentions this fragment
        related: Vec<RelatedEntry>,
    },
}

impl Span {
    /// The fragment text regardless of kind
    pub fn text(&self) -> &str {
        match self {
            Span::Plain { text } | Span::Matched { text, .. } => text,
        }
    }

    /// Whether this span is a highlighted match
    pub fn is_matched(&self) -> bool {
        matches!(self, Span::Matched { .. })
    }

    fn plain(text: &str) -> Self {
        Span::Plain {
            text: text.to_string(),
        }
    }
}

/// Split `text` into alternating plain/matched spans for the given terms.
///
/// Every fragment is preserved, including empty ones at match boundaries,
/// so concatenating the span texts reproduces `text` exactly. With no terms
/// or no text, the whole input comes back as a single plain span.
///
/// Deterministic and side-effect free for identical inputs.
pub fn highlight(text: &str, terms: &[String], all_entries: &[Entry]) -> Vec<Span> {
    let Some(pattern) = build_pattern(terms) else {
        return vec![Span::plain(text)];
    };
    if text.is_empty() {
        return vec![Span::plain(text)];
    }

    let mut spans = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        spans.push(classify(&text[last..found.start()], terms, all_entries));
        spans.push(classify(found.as_str(), terms, all_entries));
        last = found.end();
    }
    spans.push(classify(&text[last..], terms, all_entries));

    spans
}

/// Case-insensitive alternation over the escaped terms.
///
/// Escaping makes every regex metacharacter in a term literal, so the
/// build cannot fail; `.ok()` keeps the caller total regardless.
fn build_pattern(terms: &[String]) -> Option<Regex> {
    if terms.is_empty() {
        return None;
    }

    let alternation = terms
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");

    RegexBuilder::new(&alternation)
        .case_insensitive(true)
        .build()
        .ok()
}

/// A fragment is matched iff it case-insensitively equals one of the terms;
/// the first equal term supplies the color index.
fn classify(fragment: &str, terms: &[String], all_entries: &[Entry]) -> Span {
    let fragment_lower = fragment.to_lowercase();
    let position = terms
        .iter()
        .position(|term| term.to_lowercase() == fragment_lower);

    match position {
        Some(color_index) => Span::Matched {
            text: fragment.to_string(),
            color_index,
            related: related_entries(&fragment_lower, all_entries),
        },
        None => Span::plain(fragment),
    }
}

fn related_entries(fragment_lower: &str, all_entries: &[Entry]) -> Vec<RelatedEntry> {
    all_entries
        .iter()
        .filter(|entry| {
            entry.term.to_lowercase().contains(fragment_lower)
                || entry
                    .content
                    .iter()
                    .any(|item| item.text.to_lowercase().contains(fragment_lower))
        })
        .map(|entry| RelatedEntry {
            id: entry.id.clone(),
            term: entry.term.clone(),
        })
        .collect()
}
