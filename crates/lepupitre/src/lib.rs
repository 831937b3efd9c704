// lepupitre - CLI & Configuration
//
// *Le Pupitre* (The Reading Desk) - Command-line front end for LeGlossaire

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Command-line interface.
pub mod cli;

/// Reading-desk configuration.
pub mod config;

/// Data-file error types.
pub mod errors;

/// Glossary orchestration facade.
pub mod glossaire;

/// Plain-text rendering of ranked results.
pub mod render;

pub use config::GlossaireConfig;
pub use errors::{GlossaireError, Result};
pub use glossaire::Glossaire;

/// Reading-desk library initialization
pub fn init() {
    let _ = tracing::subscriber::set_default(tracing::subscriber::NoSubscriber::default());
}
