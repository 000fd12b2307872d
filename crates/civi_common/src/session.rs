//! Session state - the single owner of everything the client renders
//!
//! All mutation goes through the named operations below; rendering derives
//! one of three views from the state and nothing else. No loose field
//! writes outside this module.

use crate::analyzer::{apply_scores, SentimentScore};
use crate::policy::{seed_campaigns, seed_policies, Campaign, Policy};
use crate::statement::StatementBuffer;

/// Which top-level screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Input,
    Dashboard,
}

/// The view to render. Exactly one applies to any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Input,
    CampaignDetail,
    Dashboard,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub screen: Screen,
    pub selected_campaign: Option<Campaign>,
    pub statement: StatementBuffer,
    pub policies: Vec<Policy>,
    pub campaigns: Vec<Campaign>,
}

impl SessionState {
    pub fn new(word_limit: usize) -> Self {
        Self {
            screen: Screen::Input,
            selected_campaign: None,
            statement: StatementBuffer::new(word_limit),
            policies: seed_policies(),
            campaigns: seed_campaigns(),
        }
    }

    /// Select which of the three views the state renders as.
    pub fn view(&self) -> ViewKind {
        match (self.screen, &self.selected_campaign) {
            (Screen::Input, _) => ViewKind::Input,
            (Screen::Dashboard, Some(_)) => ViewKind::CampaignDetail,
            (Screen::Dashboard, None) => ViewKind::Dashboard,
        }
    }

    /// A successful analysis: apply the returned scores and move to the
    /// dashboard. Failed analyses never reach this point.
    pub fn complete_analysis(&mut self, scores: &[SentimentScore]) {
        apply_scores(&mut self.policies, scores);
        self.screen = Screen::Dashboard;
    }

    /// Open a campaign's detail view. Ignored while still on the input
    /// screen: a selection may only exist on the dashboard. Unknown ids
    /// leave the current selection alone.
    pub fn select_campaign(&mut self, id: u32) {
        if self.screen != Screen::Dashboard {
            return;
        }
        if let Some(campaign) = self.campaigns.iter().find(|c| c.id == id) {
            self.selected_campaign = Some(campaign.clone());
        }
    }

    /// Back out of the detail view. The screen itself is unchanged.
    pub fn clear_selection(&mut self) {
        self.selected_campaign = None;
    }

    /// Overwrite one policy's slider value, leaving every other policy and
    /// the list order untouched. Unknown ids are ignored.
    pub fn set_policy_choice(&mut self, id: u32, value: i32) {
        if let Some(policy) = self.policies.iter_mut().find(|p| p.id == id) {
            policy.user_choice = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::SentimentScore;

    fn dashboard_session() -> SessionState {
        let mut session = SessionState::new(150);
        session.complete_analysis(&[]);
        session
    }

    #[test]
    fn set_policy_choice_touches_only_the_matching_id() {
        let mut session = SessionState::new(150);
        session.set_policy_choice(2, 55);

        assert_eq!(
            session.policies.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(session.policies[0].user_choice, 0);
        assert_eq!(session.policies[1].user_choice, 55);
        assert_eq!(session.policies[2].user_choice, 0);
    }

    #[test]
    fn set_policy_choice_ignores_unknown_ids() {
        let mut session = SessionState::new(150);
        session.set_policy_choice(99, 55);
        assert!(session.policies.iter().all(|p| p.user_choice == 0));
    }

    #[test]
    fn completed_analysis_applies_scores_and_shows_dashboard() {
        let mut session = SessionState::new(150);
        session.complete_analysis(&[SentimentScore {
            policy: "Gun-Control".to_string(),
            score: 42,
        }]);

        assert_eq!(session.screen, Screen::Dashboard);
        assert_eq!(session.view(), ViewKind::Dashboard);
        assert_eq!(session.policies[2].user_choice, 42);
        assert_eq!(session.policies[0].user_choice, 0);
        assert_eq!(session.policies[1].user_choice, 0);
    }

    #[test]
    fn campaigns_cannot_be_selected_from_the_input_screen() {
        let mut session = SessionState::new(150);
        session.select_campaign(1);
        assert!(session.selected_campaign.is_none());
        assert_eq!(session.view(), ViewKind::Input);
    }

    #[test]
    fn select_and_back_round_trip() {
        let mut session = dashboard_session();

        session.select_campaign(2);
        let selected = session.selected_campaign.as_ref().expect("selection");
        assert_eq!(selected.id, 2);
        assert_eq!(session.view(), ViewKind::CampaignDetail);

        session.clear_selection();
        assert!(session.selected_campaign.is_none());
        assert_eq!(session.screen, Screen::Dashboard);
        assert_eq!(session.view(), ViewKind::Dashboard);
    }

    #[test]
    fn unknown_campaign_id_keeps_the_current_selection() {
        let mut session = dashboard_session();
        session.select_campaign(1);
        session.select_campaign(99);
        assert_eq!(session.selected_campaign.as_ref().map(|c| c.id), Some(1));
    }

    #[test]
    fn view_is_a_pure_function_of_screen_and_selection() {
        let mut session = SessionState::new(150);
        assert_eq!(session.view(), session.view());

        session.complete_analysis(&[]);
        assert_eq!(session.view(), ViewKind::Dashboard);
        assert_eq!(session.view(), session.view());

        session.select_campaign(1);
        assert_eq!(session.view(), ViewKind::CampaignDetail);
        assert_eq!(session.view(), session.view());
    }
}
