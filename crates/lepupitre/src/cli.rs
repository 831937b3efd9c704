// CLI Interface
//
// This module provides the command-line interface for LeGlossaire.

use std::path::PathBuf;

use anyhow::{Context, Result as AnyhowResult};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::GlossaireConfig;
use crate::glossaire::Glossaire;
use crate::render;

/// LeGlossaire - Searchable Glossary
#[derive(Parser, Debug)]
#[command(name = "leglossaire")]
#[command(author = "LeGlossaire Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search a glossary: | separates any-match terms, || same-line terms", long_about = None)]
pub struct Cli {
    /// Path to a JSON data file (defaults to the built-in sample)
    #[arg(global = true, long = "data", short = 'd')]
    pub data_path: Option<PathBuf>,

    /// Base directory holding `.leglossaire/config.toml`
    #[arg(global = true, long = "config-dir")]
    pub config_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search entries ("karma|action" for any match, "karma||action" for
    /// same-line matches)
    Search {
        /// Search query
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// List every entry, ascending by term
    List,

    /// Show a single entry by id
    Show {
        /// Entry id
        #[arg(value_name = "ID")]
        id: String,
    },
}

impl Cli {
    /// Run the CLI
    pub fn run(self) -> AnyhowResult<()> {
        init_logging_impl(self.verbose);

        let config_base = self
            .config_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let config = GlossaireConfig::load(&config_base)?;

        let glossaire = match &self.data_path {
            Some(path) => Glossaire::from_file(path)
                .with_context(|| format!("Failed to load data file: {}", path.display()))?,
            None => Glossaire::builtin(),
        };

        let command = self.command.unwrap_or(Commands::List);
        match command {
            Commands::Search { query } => cmd_search_impl(&glossaire, &query, &config),
            Commands::List => cmd_list_impl(&glossaire, &config),
            Commands::Show { id } => cmd_show_impl(&glossaire, &id, &config),
        }
    }
}

/// Initialize logging implementation
fn init_logging_impl(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Search command implementation
fn cmd_search_impl(glossaire: &Glossaire, raw: &str, config: &GlossaireConfig) -> AnyhowResult<()> {
    info!("Searching for: {}", raw);

    let (query, mut results) = glossaire.search(raw);

    if results.is_empty() {
        println!("No results found for: {}", raw);
        return Ok(());
    }

    if config.top_k > 0 && results.len() > config.top_k {
        results.truncate(config.top_k);
    }

    println!("\nFound {} result(s) for: '{}'\n", results.len(), raw);
    print!("{}", render::render_results(&results, &query, config));

    Ok(())
}

/// List command implementation
fn cmd_list_impl(glossaire: &Glossaire, config: &GlossaireConfig) -> AnyhowResult<()> {
    let (query, results) = glossaire.search("");

    println!("\n{} entries\n", results.len());
    print!("{}", render::render_results(&results, &query, config));

    Ok(())
}

/// Show command implementation
fn cmd_show_impl(glossaire: &Glossaire, id: &str, config: &GlossaireConfig) -> AnyhowResult<()> {
    let entry = glossaire.entry_by_id(id)?;

    println!("\n{} ({})", entry.term, entry.id);
    if config.show_dates {
        println!("compiled {}, edited {}", entry.compiled_date, entry.edited_date);
    }
    println!();

    for item in &entry.content {
        print!("  - {}", item.text);
        if item.is_cross_reference(&entry.term) {
            print!(" [from: {}]", item.source_term);
        }
        println!();
    }

    if !entry.keywords.is_empty() {
        println!("\n  keywords: {}", entry.keywords.join(", "));
    }
    if !entry.shared_terms.is_empty() {
        println!("  shared terms: {}", entry.shared_terms.join(", "));
    }

    Ok(())
}
