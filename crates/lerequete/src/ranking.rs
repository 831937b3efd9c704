// Additive relevance scoring

use lelexique::Entry;

use crate::query::{ParsedQuery, SearchMode};

/// Additive relevance scorer
///
/// Accumulates a weighted count of case-insensitive substring hits across
/// an entry's term, content, keywords, and shared terms. Scores are never
/// normalized by entry size or word count.
pub struct RelevanceScorer {
    /// Weight for a hit on the entry's term
    term_weight: u32,

    /// Weight per content item hit
    content_weight: u32,

    /// Weight per keyword hit
    keyword_weight: u32,

    /// Weight per shared-term hit
    shared_term_weight: u32,

    /// Bonus per content item containing every comparison word
    same_line_bonus: u32,
}

impl RelevanceScorer {
    /// Create a scorer with the standard weights
    pub fn new() -> Self {
        Self {
            term_weight: 10,
            content_weight: 3,
            keyword_weight: 5,
            shared_term_weight: 4,
            same_line_bonus: 15,
        }
    }

    /// Set custom weights
    pub fn with_weights(
        mut self,
        term: u32,
        content: u32,
        keyword: u32,
        shared_term: u32,
        same_line_bonus: u32,
    ) -> Self {
        self.term_weight = term;
        self.content_weight = content;
        self.keyword_weight = keyword;
        self.shared_term_weight = shared_term;
        self.same_line_bonus = same_line_bonus;
        self
    }

    /// Score an entry against a parsed query.
    ///
    /// Returns 0 for a query with no terms; callers treat that case as
    /// "include everything" rather than "exclude everything".
    pub fn score(&self, entry: &Entry, query: &ParsedQuery) -> u32 {
        if query.terms.is_empty() {
            return 0;
        }

        let words = comparison_words(query);
        let term = entry.term.to_lowercase();
        let mut score = 0;

        for word in &words {
            if term.contains(word.as_str()) {
                score += self.term_weight;
            }

            for item in &entry.content {
                if item.text.to_lowercase().contains(word.as_str()) {
                    score += self.content_weight;
                }
            }

            for keyword in &entry.keywords {
                let keyword = keyword.to_lowercase();
                if keyword.contains(word.as_str()) || word.contains(keyword.as_str()) {
                    score += self.keyword_weight;
                }
            }

            for shared in &entry.shared_terms {
                if shared.to_lowercase().contains(word.as_str()) {
                    score += self.shared_term_weight;
                }
            }
        }

        if query.mode == SearchMode::SameLineMatch {
            for item in &entry.content {
                let text = item.text.to_lowercase();
                if words.iter().all(|word| text.contains(word.as_str())) {
                    score += self.same_line_bonus;
                }
            }
        }

        score
    }
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Comparison words for scoring.
///
/// Derived from the raw query string, not from [`ParsedQuery::terms`]: the
/// any-match split is on whitespace, the same-line split is on `||` with
/// pieces trimmed but empty pieces retained. The two splits disagree with
/// the parser on edge-case inputs (repeated delimiters, embedded spaces);
/// both code paths are public behavior and stay independent.
pub fn comparison_words(query: &ParsedQuery) -> Vec<String> {
    let raw = query.raw.to_lowercase();
    match query.mode {
        SearchMode::AnyMatch => raw.split_whitespace().map(str::to_string).collect(),
        SearchMode::SameLineMatch => raw
            .split("||")
            .map(|piece| piece.trim().to_string())
            .collect(),
    }
}
