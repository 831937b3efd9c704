// Data-file error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for glossary data operations
pub type Result<T> = std::result::Result<T, GlossaireError>;

/// Reading-desk error types
#[derive(Debug, Error)]
pub enum GlossaireError {
    /// A data file could not be read
    #[error("failed to read data file {path:?}")]
    Read {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A data file held malformed JSON
    #[error("failed to parse data file {path:?}")]
    Parse {
        /// Path of the file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A data file violated a collection invariant
    #[error("invalid data file {path:?}")]
    Invalid {
        /// Path of the file
        path: PathBuf,
        /// The violated invariant
        #[source]
        source: lelexique::ValidationError,
    },

    /// An entry id was not found in the collection
    #[error("no entry with id '{id}'")]
    UnknownId {
        /// The requested id
        id: String,
    },
}
