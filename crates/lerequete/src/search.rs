// Filter & rank over an in-memory collection

use lelexique::{ContentItem, Entry};
use serde::{Deserialize, Serialize};

use crate::query::{ParsedQuery, SearchMode};
use crate::ranking::RelevanceScorer;

/// One surviving entry with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based position after ranking
    pub rank: usize,

    /// The entry, with content filtered down under same-line mode
    pub entry: Entry,

    /// Additive relevance score; 0 on the unfiltered listing path
    pub score: u32,
}

/// Search engine over a fixed, read-only entry collection
pub struct SearchEngine {
    entries: Vec<Entry>,
    scorer: RelevanceScorer,
}

impl SearchEngine {
    /// Create an engine over a collection
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            scorer: RelevanceScorer::new(),
        }
    }

    /// Replace the default scorer
    pub fn with_scorer(mut self, scorer: RelevanceScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// The collection this engine searches
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Filter and rank the collection against a parsed query
    pub fn search(&self, query: &ParsedQuery) -> Vec<RankedEntry> {
        let results = rank(&self.entries, query, &self.scorer);
        tracing::debug!(
            candidates = self.entries.len(),
            survivors = results.len(),
            "search complete"
        );
        results
    }
}

/// Filter and rank `entries` against `query` with the standard weights.
///
/// With no terms, every entry comes back ascending by term with its content
/// untouched. Otherwise content is filtered per mode, zero-score entries and
/// entries with no remaining content are discarded, and survivors are
/// ordered descending by score. The sort is stable: entries with equal
/// scores keep their relative input order, which downstream highlighting
/// relies on for deterministic output.
pub fn filter_and_rank(entries: &[Entry], query: &ParsedQuery) -> Vec<RankedEntry> {
    rank(entries, query, &RelevanceScorer::new())
}

fn rank(entries: &[Entry], query: &ParsedQuery, scorer: &RelevanceScorer) -> Vec<RankedEntry> {
    if query.is_unfiltered() {
        let mut all = entries.to_vec();
        all.sort_by(|a, b| a.term.cmp(&b.term));
        return all
            .into_iter()
            .enumerate()
            .map(|(index, entry)| RankedEntry {
                rank: index + 1,
                entry,
                score: 0,
            })
            .collect();
    }

    let mut survivors = Vec::new();
    for entry in entries {
        let content = filter_content(entry, query);
        // Scored against the full entry, not the filtered copy
        let score = scorer.score(entry, query);
        if score == 0 || content.is_empty() {
            continue;
        }

        let mut kept = entry.clone();
        kept.content = content;
        survivors.push(RankedEntry {
            rank: 0, // Will be set after sorting
            entry: kept,
            score,
        });
    }

    // sort_by is stable; equal scores keep input order
    survivors.sort_by(|a, b| b.score.cmp(&a.score));
    for (index, result) in survivors.iter_mut().enumerate() {
        result.rank = index + 1;
    }

    survivors
}

/// Content filtering per mode.
///
/// Any-match mode never restricts which content items are shown; it only
/// gates entry-level inclusion. Same-line mode keeps the items whose text
/// contains every parsed term.
fn filter_content(entry: &Entry, query: &ParsedQuery) -> Vec<ContentItem> {
    match query.mode {
        SearchMode::AnyMatch => entry.content.clone(),
        SearchMode::SameLineMatch => entry
            .content
            .iter()
            .filter(|item| {
                let text = item.text.to_lowercase();
                query
                    .terms
                    .iter()
                    .all(|term| text.contains(term.to_lowercase().as_str()))
            })
            .cloned()
            .collect(),
    }
}
