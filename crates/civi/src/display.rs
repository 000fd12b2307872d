//! Human-readable output for one-shot commands

use owo_colors::OwoColorize;

use civi_common::matching::CandidateMatch;
use civi_common::{CiviConfig, Policy};

/// Print per-policy scores as an aligned table.
pub fn print_scores(policies: &[Policy]) {
    let width = policies.iter().map(|p| p.name.len()).max().unwrap_or(0);

    println!("{}", "Policy alignment".bold());
    for policy in policies {
        let leaning = match policy.user_choice.signum() {
            1 => policy.leaning().green().to_string(),
            -1 => policy.leaning().red().to_string(),
            _ => policy.leaning().dimmed().to_string(),
        };
        println!(
            "  {:<width$}  {:>5}  {}",
            policy.name,
            policy.user_choice,
            leaning,
            width = width
        );
    }
}

/// Print ranked candidates. Lower distance is a closer match.
pub fn print_matches(matches: &[CandidateMatch]) {
    if matches.is_empty() {
        println!("No candidates matched.");
        return;
    }

    println!("{}", "Closest candidates".bold());
    for (rank, entry) in matches.iter().enumerate() {
        println!(
            "  {:>2}. {:<24} distance {:.3}",
            rank + 1,
            entry.name,
            entry.distance
        );
    }
}

/// Print endpoint status and the effective configuration.
pub fn print_status(config: &CiviConfig, reachable: bool) {
    println!("{}", "Analyzer".bold());
    println!("  endpoint   {}", config.analyzer_url);
    if reachable {
        println!("  status     {}", "reachable".green());
    } else {
        println!("  status     {}", "unreachable".red());
    }

    println!();
    println!("{}", "Configuration".bold());
    println!("  word limit       {}", config.effective_word_limit());
    if config.request_timeout_secs == 0 {
        println!("  request timeout  disabled");
    } else {
        println!("  request timeout  {}s", config.request_timeout_secs);
    }
    match &config.candidates_csv {
        Some(path) => println!("  stance csv       {}", path.display()),
        None => println!("  stance csv       (not set)"),
    }
}
