//! Noughts CLI - move-selection engine for noughts and crosses
//!
//! This CLI exposes the engine without a graphical shell:
//! - Pitting the engine against stand-in opponents over many rounds
//! - Inspecting the evaluation and every tier's pick for one position

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Move-selection engine for noughts and crosses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play orchestrated rounds against a stand-in opponent
    Duel(noughts::cli::duel::DuelArgs),

    /// Evaluate a single position and show each tier's pick
    Analyze(noughts::cli::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Duel(args) => noughts::cli::duel::execute(args),
        Commands::Analyze(args) => noughts::cli::analyze::execute(args),
    }
}
