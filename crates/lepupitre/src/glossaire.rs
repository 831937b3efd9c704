// Glossary orchestration
//
// *Le Glossaire* (The Glossary) - Unified API over the lexicon and the
// query engine

use std::fs;
use std::path::Path;

use lelexique::{sample_entries, validate, Entry};
use lerequete::{ParsedQuery, RankedEntry, SearchEngine};
use tracing::debug;

use crate::errors::{GlossaireError, Result};

/// A loaded entry collection plus the engine that searches it
pub struct Glossaire {
    engine: SearchEngine,
}

impl Glossaire {
    /// Create a glossary over the built-in sample entries
    pub fn builtin() -> Self {
        Self {
            engine: SearchEngine::new(sample_entries()),
        }
    }

    /// Create a glossary over an already-validated collection
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self {
            engine: SearchEngine::new(entries),
        }
    }

    /// Load a glossary from a JSON data file.
    ///
    /// The file holds an array of entries in the same shape as the
    /// built-in sample (`sourceTerm`, `sharedTerms`, ISO dates). The
    /// collection is validated before use.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| GlossaireError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let entries: Vec<Entry> =
            serde_json::from_str(&content).map_err(|source| GlossaireError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        validate(&entries).map_err(|source| GlossaireError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(count = entries.len(), path = %path.display(), "loaded data file");
        Ok(Self::from_entries(entries))
    }

    /// The full collection, in load order
    pub fn entries(&self) -> &[Entry] {
        self.engine.entries()
    }

    /// Parse a raw query string and rank the collection against it
    pub fn search(&self, raw: &str) -> (ParsedQuery, Vec<RankedEntry>) {
        let query = ParsedQuery::parse(raw);
        let results = self.engine.search(&query);
        (query, results)
    }

    /// Look up one entry by id
    pub fn entry_by_id(&self, id: &str) -> Result<&Entry> {
        self.engine
            .entries()
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| GlossaireError::UnknownId { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_collection_loads() {
        let glossaire = Glossaire::builtin();
        assert_eq!(glossaire.entries().len(), 3);
    }

    #[test]
    fn test_search_parses_and_ranks() {
        let glossaire = Glossaire::builtin();
        let (query, results) = glossaire.search("karma||action");

        assert_eq!(query.terms, vec!["karma", "action"]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.id, "meditation");
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let glossaire = Glossaire::builtin();
        assert!(matches!(
            glossaire.entry_by_id("nope"),
            Err(GlossaireError::UnknownId { .. })
        ));
    }
}
