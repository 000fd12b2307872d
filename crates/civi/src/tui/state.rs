//! TUI state and key reducers
//!
//! `handle_key` is a pure reducer over `CiviTuiState`: it never touches the
//! terminal or the network, which keeps every transition unit-testable.
//! Submissions surface as `KeyOutcome::Submit` for the event loop to spawn.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use civi_common::{SessionState, ViewKind};

/// How far one Left/Right keypress moves a slider.
pub const SLIDER_STEP: i32 = 5;

/// Which dashboard panel has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    Policies,
    Campaigns,
}

/// What the event loop should do after a key was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
    /// Submit the statement for analysis.
    Submit(String),
}

#[derive(Debug, Clone)]
pub struct CiviTuiState {
    pub session: SessionState,
    pub focus: PanelFocus,
    pub policy_cursor: usize,
    pub campaign_cursor: usize,
    pub show_help: bool,
}

impl CiviTuiState {
    pub fn new(word_limit: usize) -> Self {
        Self {
            session: SessionState::new(word_limit),
            focus: PanelFocus::Policies,
            policy_cursor: 0,
            campaign_cursor: 0,
            show_help: false,
        }
    }
}

/// Handle one key event against the current state.
pub fn handle_key(state: &mut CiviTuiState, key: KeyEvent) -> KeyOutcome {
    // Key releases (reported on some platforms) are not edits.
    if key.kind == KeyEventKind::Release {
        return KeyOutcome::Continue;
    }

    // Ctrl+C exits regardless of view.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyOutcome::Quit;
    }
    if key.code == KeyCode::F(1) {
        state.show_help = !state.show_help;
        return KeyOutcome::Continue;
    }

    match state.session.view() {
        ViewKind::Input => handle_input_key(state, key),
        ViewKind::Dashboard => handle_dashboard_key(state, key),
        ViewKind::CampaignDetail => handle_detail_key(state, key),
    }
}

fn handle_input_key(state: &mut CiviTuiState, key: KeyEvent) -> KeyOutcome {
    let statement = &mut state.session.statement;
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => {
            if statement.has_content() {
                return KeyOutcome::Submit(statement.as_str().to_string());
            }
        }
        (KeyCode::Backspace, _) => statement.backspace(),
        (KeyCode::Left, _) => statement.move_left(),
        (KeyCode::Right, _) => statement.move_right(),
        (KeyCode::Home, _) => statement.move_home(),
        (KeyCode::End, _) => statement.move_end(),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => statement.clear(),
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            // A rejected edit is dropped without feedback.
            statement.insert_char(c);
        }
        _ => {}
    }
    KeyOutcome::Continue
}

fn handle_dashboard_key(state: &mut CiviTuiState, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Char('q') => return KeyOutcome::Quit,
        KeyCode::Tab => {
            state.focus = match state.focus {
                PanelFocus::Policies => PanelFocus::Campaigns,
                PanelFocus::Campaigns => PanelFocus::Policies,
            };
        }
        KeyCode::Up => match state.focus {
            PanelFocus::Policies => {
                state.policy_cursor = state.policy_cursor.saturating_sub(1);
            }
            PanelFocus::Campaigns => {
                state.campaign_cursor = state.campaign_cursor.saturating_sub(1);
            }
        },
        KeyCode::Down => match state.focus {
            PanelFocus::Policies => {
                let last = state.session.policies.len().saturating_sub(1);
                state.policy_cursor = (state.policy_cursor + 1).min(last);
            }
            PanelFocus::Campaigns => {
                let last = state.session.campaigns.len().saturating_sub(1);
                state.campaign_cursor = (state.campaign_cursor + 1).min(last);
            }
        },
        KeyCode::Left => adjust_focused_policy(state, -SLIDER_STEP),
        KeyCode::Right => adjust_focused_policy(state, SLIDER_STEP),
        KeyCode::Enter => {
            if state.focus == PanelFocus::Campaigns {
                if let Some(campaign) = state.session.campaigns.get(state.campaign_cursor) {
                    let id = campaign.id;
                    state.session.select_campaign(id);
                }
            }
        }
        _ => {}
    }
    KeyOutcome::Continue
}

/// Move the focused slider, clamped to the control's [-100, 100] range.
fn adjust_focused_policy(state: &mut CiviTuiState, delta: i32) {
    if state.focus != PanelFocus::Policies {
        return;
    }
    if let Some(policy) = state.session.policies.get(state.policy_cursor) {
        let id = policy.id;
        let value = (policy.user_choice + delta).clamp(-100, 100);
        state.session.set_policy_choice(id, value);
    }
}

fn handle_detail_key(state: &mut CiviTuiState, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Char('q') => return KeyOutcome::Quit,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            state.session.clear_selection();
        }
        _ => {}
    }
    KeyOutcome::Continue
}
