//! CLI - command-line argument parsing
//!
//! Keeps argument parsing separate from execution logic. Without a
//! subcommand the binary starts the interactive TUI.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Civi command line
#[derive(Parser)]
#[command(name = "civi")]
#[command(about = "Civi - profile your political stance from a written statement", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Analyzer endpoint (overrides the configured URL)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Path to the config file (overrides $CIVI_CONFIG and defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand (if not provided, starts the interactive TUI)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive terminal interface
    Tui,

    /// Analyze a statement and print per-policy scores
    Analyze {
        /// Statement text; read from stdin when omitted
        text: Option<String>,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Rank candidates from a stance CSV against an analyzed statement
    Match {
        /// Stance CSV (overrides the configured path)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Statement to analyze for the user vector; neutral when omitted
        #[arg(long)]
        text: Option<String>,

        /// How many candidates to report
        #[arg(long)]
        top: Option<usize>,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Show analyzer endpoint status and effective configuration
    Status {
        /// Output JSON only
        #[arg(long)]
        json: bool,
    },
}
