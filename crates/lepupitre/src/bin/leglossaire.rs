// LeGlossaire binary entry point

use clap::Parser;
use lepupitre::cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
