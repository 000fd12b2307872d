//! One-shot command handlers

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use civi_common::matching::{load_candidates, rank_candidates, user_vector};
use civi_common::{apply_scores, seed_policies, AnalyzerClient, CiviConfig, SentimentScore};

use crate::display;

fn build_client(config: &CiviConfig) -> Result<AnalyzerClient> {
    AnalyzerClient::new(config.analyzer_url.clone(), config.request_timeout_secs)
        .context("failed to build analyzer client")
}

fn statement_text(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read statement from stdin")?;
            Ok(buffer)
        }
    }
}

fn thinking_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Run one analysis, with a spinner on human output.
async fn analyze_statement(
    client: &AnalyzerClient,
    text: &str,
    quiet: bool,
) -> Result<Vec<SentimentScore>> {
    let spinner = (!quiet).then(|| thinking_spinner("Analyzing statement..."));
    let result = client.analyze(text).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    result.context("sentiment analysis failed")
}

/// `civi analyze` - send a statement, print the per-policy scores.
pub async fn analyze(config: &CiviConfig, text: Option<String>, json: bool) -> Result<()> {
    let text = statement_text(text)?;
    if text.trim().is_empty() {
        anyhow::bail!("statement is empty");
    }

    let client = build_client(config)?;
    let scores = analyze_statement(&client, &text, json).await?;
    info!(scores = scores.len(), "analysis complete");

    let mut policies = seed_policies();
    apply_scores(&mut policies, &scores);

    if json {
        println!("{}", serde_json::to_string_pretty(&policies)?);
    } else {
        display::print_scores(&policies);
    }
    Ok(())
}

/// `civi match` - rank candidates from a stance CSV.
pub async fn match_candidates(
    config: &CiviConfig,
    csv: Option<PathBuf>,
    text: Option<String>,
    top: Option<usize>,
    json: bool,
) -> Result<()> {
    let path = csv
        .or_else(|| config.candidates_csv.clone())
        .context("no stance CSV configured; pass --csv or set candidates_csv")?;

    let mut policies = seed_policies();
    if let Some(text) = text {
        if text.trim().is_empty() {
            anyhow::bail!("statement is empty");
        }
        let client = build_client(config)?;
        let scores = analyze_statement(&client, &text, json).await?;
        apply_scores(&mut policies, &scores);
    }

    let candidates = load_candidates(&path)
        .with_context(|| format!("failed to load candidates from {}", path.display()))?;
    let top_k = top.unwrap_or_else(|| config.effective_match_top_k());
    let ranked = rank_candidates(&candidates, &user_vector(&policies), top_k);
    info!(candidates = candidates.len(), reported = ranked.len(), "ranking complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        display::print_matches(&ranked);
    }
    Ok(())
}

/// `civi status` - endpoint reachability and effective configuration.
pub async fn status(config: &CiviConfig, json: bool) -> Result<()> {
    let client = build_client(config)?;
    let reachable = client.probe().await;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "analyzer_url": config.analyzer_url,
                "reachable": reachable,
                "request_timeout_secs": config.request_timeout_secs,
                "word_limit": config.effective_word_limit(),
            }))?
        );
    } else {
        display::print_status(config, reachable);
    }
    Ok(())
}
