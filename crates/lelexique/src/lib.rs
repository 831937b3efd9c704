// lelexique - Glossary Data Model
//
// *Le Lexique* (The Lexicon) - Entry records, built-in sample data, and
// collection validation

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Entry and content-item records.
pub mod entry;

/// Built-in sample glossary.
pub mod sample;

/// Collection invariant checks.
pub mod validate;

pub use entry::{ContentItem, Entry};
pub use sample::sample_entries;
pub use validate::{validate, ValidationError};
