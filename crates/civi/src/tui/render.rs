//! Rendering - draw functions for the three views

use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use civi_common::{Campaign, ViewKind};

use super::layout::{centered_rect, compute_layout, split_dashboard};
use super::state::{CiviTuiState, PanelFocus};

const ACCENT: Color = Color::Rgb(150, 200, 255);
const FOCUS: Color = Color::Rgb(100, 255, 100);
const DIM: Color = Color::Rgb(180, 180, 180);

/// Draw the UI: header, the active view, status bar, optional help overlay.
pub fn draw_ui(f: &mut Frame, state: &CiviTuiState) {
    let grid = compute_layout(f.size());

    draw_header(f, grid.header);

    match state.session.view() {
        ViewKind::Input => draw_input_view(f, grid.content, state),
        ViewKind::Dashboard => draw_dashboard(f, grid.content, state),
        ViewKind::CampaignDetail => {
            if let Some(campaign) = &state.session.selected_campaign {
                draw_campaign_detail(f, grid.content, campaign);
            }
        }
    }

    draw_status_bar(f, grid.status_bar, state);

    if state.show_help {
        draw_help_overlay(f, f.size());
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let text = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!(
                "Civi v{} | political stance profiler",
                env!("CARGO_PKG_VERSION")
            ),
            Style::default().fg(ACCENT),
        ),
    ]);
    let header = Paragraph::new(text).style(Style::default().bg(Color::Rgb(0, 0, 0)));
    f.render_widget(header, area);
}

fn draw_status_bar(f: &mut Frame, area: Rect, state: &CiviTuiState) {
    let time_str = Local::now().format("%H:%M:%S").to_string();
    let keys = match state.session.view() {
        ViewKind::Input => format!(
            "Enter analyze | F1 help | Ctrl+C quit | words {}/{}",
            state.session.statement.word_count(),
            state.session.statement.word_limit()
        ),
        ViewKind::Dashboard => {
            "Tab switch panel | Up/Down move | Left/Right adjust | Enter open | q quit".to_string()
        }
        ViewKind::CampaignDetail => "Esc back | q quit".to_string(),
    };

    let text = Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("{time_str} | {keys}"), Style::default().fg(DIM)),
    ]);
    let bar = Paragraph::new(text).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(bar, area);
}

fn draw_input_view(f: &mut Frame, area: Rect, state: &CiviTuiState) {
    let card = centered_rect(70, 60, area);
    let statement = &state.session.statement;
    let (before, after) = statement.split_at_cursor();

    let lines = vec![
        Line::from(Span::styled(
            "Tell Civi where you stand.",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw(before.to_string()),
            Span::styled("▏", Style::default().fg(FOCUS)),
            Span::raw(after.to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "words {}/{}",
                statement.word_count(),
                statement.word_limit()
            ),
            Style::default().fg(DIM),
        )),
    ];

    let card_widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Your statement ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(FOCUS)),
    );
    f.render_widget(card_widget, card);
}

fn draw_dashboard(f: &mut Frame, area: Rect, state: &CiviTuiState) {
    let (policy_area, campaign_area) = split_dashboard(area);
    draw_policy_panel(f, policy_area, state);
    draw_campaign_panel(f, campaign_area, state);
}

fn panel_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS)
    } else {
        Style::default().fg(Color::Rgb(80, 180, 255))
    }
}

fn draw_policy_panel(f: &mut Frame, area: Rect, state: &CiviTuiState) {
    let focused = state.focus == PanelFocus::Policies;
    let track_width = (area.width.saturating_sub(6) as usize).max(11);

    let mut lines: Vec<Line<'static>> = Vec::new();
    for (i, policy) in state.session.policies.iter().enumerate() {
        let selected = focused && i == state.policy_cursor;
        let marker = if selected { "▸ " } else { "  " };
        let name_style = if selected {
            Style::default().fg(FOCUS).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(policy.name.clone(), name_style),
            Span::styled(
                format!("  {} ({})", policy.leaning(), policy.user_choice),
                Style::default().fg(DIM),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                slider_track(policy.user_choice, track_width),
                Style::default().fg(ACCENT),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" You support these policies ")
            .borders(Borders::ALL)
            .border_style(panel_border(focused)),
    );
    f.render_widget(panel, area);
}

fn draw_campaign_panel(f: &mut Frame, area: Rect, state: &CiviTuiState) {
    let focused = state.focus == PanelFocus::Campaigns;

    let mut lines: Vec<Line<'static>> = Vec::new();
    for (i, campaign) in state.session.campaigns.iter().enumerate() {
        let selected = focused && i == state.campaign_cursor;
        let marker = if selected { "▸ " } else { "  " };
        let style = if selected {
            Style::default().fg(FOCUS).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(campaign.name.clone(), style),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Matching campaigns ")
            .borders(Borders::ALL)
            .border_style(panel_border(focused)),
    );
    f.render_widget(panel, area);
}

fn draw_campaign_detail(f: &mut Frame, area: Rect, campaign: &Campaign) {
    let card = centered_rect(70, 70, area);
    let content_width = card.width.saturating_sub(4).max(20) as usize;

    let mut lines = vec![
        Line::from(Span::styled(
            campaign.name.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for wrapped in textwrap::wrap(&campaign.description, content_width) {
        lines.push(Line::from(Span::raw(wrapped.into_owned())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "← Esc to go back",
        Style::default().fg(DIM),
    )));

    let card_widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Campaign ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT)),
    );
    f.render_widget(card_widget, card);
}

/// Render a slider value in [-100, 100] as a one-line track.
fn slider_track(value: i32, width: usize) -> String {
    let width = width.max(3);
    let clamped = value.clamp(-100, 100);
    let pos = ((clamped + 100) as usize * (width - 1)) / 200;

    let mut track = String::with_capacity(width * 3);
    for i in 0..width {
        track.push(if i == pos { '●' } else { '─' });
    }
    track
}

fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(k, Style::default().fg(Color::Cyan)),
            Span::raw(format!(" - {desc}")),
        ])
    };

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        key("Enter", "Analyze statement / open campaign"),
        key("Tab", "Switch dashboard panel"),
        key("Up/Down", "Move within a panel"),
        key("Left/Right", "Adjust the focused slider"),
        key("Esc", "Back from campaign detail"),
        key("Ctrl+U", "Clear the statement"),
        key("Ctrl+C", "Exit"),
        key("F1", "Toggle help"),
        Line::from(""),
        Line::from(Span::styled(
            "Press F1 to close",
            Style::default().fg(Color::Gray),
        )),
    ];

    let help_area = centered_rect(50, 50, area);
    let help_block = Paragraph::new(help_text)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().bg(Color::Black));
    f.render_widget(help_block, help_area);
}
