//! Policy and campaign records - the data model behind the dashboard

use serde::{Deserialize, Serialize};

/// A policy position the user holds, adjustable between -100 (oppose)
/// and 100 (support).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub id: u32,
    pub name: String,
    /// Slider value; 0 is neutral.
    pub user_choice: i32,
}

impl Policy {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            user_choice: 0,
        }
    }

    /// Human label for the current position.
    pub fn leaning(&self) -> &'static str {
        if self.user_choice > 0 {
            "Support"
        } else if self.user_choice < 0 {
            "Oppose"
        } else {
            "Neutral"
        }
    }
}

/// A campaign entry shown on the dashboard. Immutable for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    pub description: String,
}

/// Policies every session starts with.
pub fn seed_policies() -> Vec<Policy> {
    vec![
        Policy::new(1, "Pro-Choice"),
        Policy::new(2, "Requiring ID to Vote"),
        Policy::new(3, "Gun-Control"),
    ]
}

/// Placeholder campaign list until a real data source exists.
pub fn seed_campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: 1,
            name: "Campaign A".to_string(),
            description: "Details about Campaign A".to_string(),
        },
        Campaign {
            id: 2,
            name: "Campaign B".to_string(),
            description: "Details about Campaign B".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_policies_start_neutral() {
        let policies = seed_policies();
        assert_eq!(policies.len(), 3);
        assert!(policies.iter().all(|p| p.user_choice == 0));
        assert_eq!(
            policies.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn leaning_labels() {
        let mut policy = Policy::new(1, "Gun-Control");
        assert_eq!(policy.leaning(), "Neutral");
        policy.user_choice = 42;
        assert_eq!(policy.leaning(), "Support");
        policy.user_choice = -1;
        assert_eq!(policy.leaning(), "Oppose");
    }
}
