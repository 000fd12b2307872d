//! Layout - screen grid computation

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Panel rectangles shared by every view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiLayout {
    /// Header bar (top)
    pub header: Rect,
    /// Active view content
    pub content: Rect,
    /// Status bar (bottom)
    pub status_bar: Rect,
}

const HEADER_HEIGHT: u16 = 1;
const STATUS_BAR_HEIGHT: u16 = 1;

/// Compute the layout grid: one-line header, flexible content, one-line
/// status bar.
pub fn compute_layout(frame_area: Rect) -> TuiLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame_area);

    TuiLayout {
        header: chunks[0],
        content: chunks[1],
        status_bar: chunks[2],
    }
}

/// Split the dashboard content 1:2 between the policy panel and the
/// campaign panel, the original dual-panel proportions.
pub fn split_dashboard(content: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(content);
    (chunks[0], chunks[1])
}

/// Create a centered rect (input card, detail card, help overlay).
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
