//! Civi - collect a statement of political values, analyze it, and explore
//! the resulting policy stances and campaigns.

use anyhow::Result;
use clap::Parser;

use civi::cli::{Cli, Commands};
use civi::{commands, logging, tui};
use civi_common::CiviConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CiviConfig::load(cli.config.as_deref())?;
    if let Some(endpoint) = &cli.endpoint {
        config.analyzer_url = endpoint.clone();
    }

    match cli.command {
        None | Some(Commands::Tui) => {
            logging::init_for_tui();
            tui::run(config).await
        }
        Some(Commands::Analyze { text, json }) => {
            logging::init_for_cli();
            commands::analyze(&config, text, json).await
        }
        Some(Commands::Match {
            csv,
            text,
            top,
            json,
        }) => {
            logging::init_for_cli();
            commands::match_candidates(&config, csv, text, top, json).await
        }
        Some(Commands::Status { json }) => {
            logging::init_for_cli();
            commands::status(&config, json).await
        }
    }
}
