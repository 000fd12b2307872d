//! Candidate matching - weighted distance ranking against stance files
//!
//! Stance files are CSV without headers: first column the candidate name,
//! remaining columns numeric stances aligned with the policy list order.

use std::path::Path;

use serde::Serialize;
use tracing::warn;

use crate::errors::MatchError;
use crate::policy::Policy;

/// One candidate row from a stance file.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateStances {
    pub name: String,
    pub stances: Vec<f64>,
}

/// A ranked candidate. Lower distance means closer alignment.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateMatch {
    pub name: String,
    pub distance: f64,
}

/// A user stance value with its weight.
pub type WeightedStance = (f64, f64);

/// Load candidate rows from a stance CSV. Rows with a missing name or
/// non-numeric stance values are skipped with a warning.
pub fn load_candidates(path: &Path) -> Result<Vec<CandidateStances>, MatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut candidates = Vec::new();
    for record in reader.records() {
        let record = record?;
        let Some(name) = record.get(0).map(str::trim).filter(|n| !n.is_empty()) else {
            warn!("skipping stance row without a candidate name");
            continue;
        };

        let mut stances = Vec::with_capacity(record.len().saturating_sub(1));
        let mut numeric = true;
        for field in record.iter().skip(1) {
            match field.trim().parse::<f64>() {
                Ok(value) => stances.push(value),
                Err(_) => {
                    numeric = false;
                    break;
                }
            }
        }
        if !numeric {
            warn!(candidate = name, "skipping stance row with non-numeric values");
            continue;
        }

        candidates.push(CandidateStances {
            name: name.to_string(),
            stances,
        });
    }

    if candidates.is_empty() {
        return Err(MatchError::Empty);
    }
    Ok(candidates)
}

/// Derive the user's weighted stance vector from the session's policies.
/// Slider values map to [-1, 1]; every stance carries unit weight.
pub fn user_vector(policies: &[Policy]) -> Vec<WeightedStance> {
    policies
        .iter()
        .map(|p| (p.user_choice as f64 / 100.0, 1.0))
        .collect()
}

/// Rank candidates by weighted Euclidean distance to the user's vector,
/// ascending, ties broken alphabetically by name. Candidates whose stance
/// count does not match the user vector are skipped with a warning. At
/// most `top_k` results are returned.
pub fn rank_candidates(
    candidates: &[CandidateStances],
    user: &[WeightedStance],
    top_k: usize,
) -> Vec<CandidateMatch> {
    let mut ranked: Vec<CandidateMatch> = candidates
        .iter()
        .filter(|c| {
            if c.stances.len() == user.len() {
                true
            } else {
                warn!(
                    candidate = %c.name,
                    expected = user.len(),
                    got = c.stances.len(),
                    "skipping candidate with mismatched stance count"
                );
                false
            }
        })
        .map(|c| {
            let sum: f64 = c
                .stances
                .iter()
                .zip(user)
                .map(|(stance, (value, weight))| weight * (stance - value).powi(2))
                .sum();
            CandidateMatch {
                name: c.name.clone(),
                distance: sum.sqrt(),
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(top_k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::seed_policies;
    use std::io::Write;

    fn candidate(name: &str, stances: &[f64]) -> CandidateStances {
        CandidateStances {
            name: name.to_string(),
            stances: stances.to_vec(),
        }
    }

    #[test]
    fn closest_candidate_ranks_first() {
        let candidates = vec![candidate("Alice", &[1.0, 0.0]), candidate("Bob", &[0.0, 0.0])];
        let user = vec![(0.0, 1.0), (0.0, 1.0)];

        let ranked = rank_candidates(&candidates, &user, 10);
        assert_eq!(ranked[0].name, "Bob");
        assert!(ranked[0].distance.abs() < f64::EPSILON);
        assert_eq!(ranked[1].name, "Alice");
        assert!((ranked[1].distance - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ties_break_alphabetically() {
        let candidates = vec![
            candidate("Zed", &[1.0]),
            candidate("Ann", &[-1.0]),
        ];
        let user = vec![(0.0, 1.0)];

        let ranked = rank_candidates(&candidates, &user, 10);
        assert_eq!(ranked[0].name, "Ann");
        assert_eq!(ranked[1].name, "Zed");
    }

    #[test]
    fn weights_scale_the_distance() {
        let candidates = vec![candidate("Alice", &[1.0])];
        let ranked = rank_candidates(&candidates, &[(0.0, 4.0)], 10);
        assert!((ranked[0].distance - 2.0).abs() < 1e-9);
    }

    #[test]
    fn mismatched_rows_are_skipped_and_top_k_truncates() {
        let candidates = vec![
            candidate("Alice", &[0.1]),
            candidate("Broken", &[0.1, 0.2]),
            candidate("Bob", &[0.2]),
            candidate("Cara", &[0.3]),
        ];
        let ranked = rank_candidates(&candidates, &[(0.0, 1.0)], 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "Alice");
        assert_eq!(ranked[1].name, "Bob");
    }

    #[test]
    fn user_vector_maps_sliders_to_unit_range() {
        let mut policies = seed_policies();
        policies[0].user_choice = 50;
        policies[1].user_choice = -100;

        let user = user_vector(&policies);
        assert_eq!(user, vec![(0.5, 1.0), (-1.0, 1.0), (0.0, 1.0)]);
    }

    #[test]
    fn stance_files_load_and_skip_bad_rows() {
        let mut file = tempfile::NamedTempFile::new().expect("temp stance file");
        writeln!(file, "Alice,1,0,-1").expect("write row");
        writeln!(file, "Bob,not-a-number,0,0").expect("write row");
        writeln!(file, "Cara,0,0,0").expect("write row");

        let candidates = load_candidates(file.path()).expect("load stance file");
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0], candidate("Alice", &[1.0, 0.0, -1.0]));
        assert_eq!(candidates[1], candidate("Cara", &[0.0, 0.0, 0.0]));
    }

    #[test]
    fn empty_stance_file_is_an_error() {
        let file = tempfile::NamedTempFile::new().expect("temp stance file");
        let result = load_candidates(file.path());
        assert!(matches!(result, Err(MatchError::Empty)));
    }
}
