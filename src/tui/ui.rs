//! Layout helpers for the selection screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows taken by the entry details box under the list.
pub const DETAILS_HEIGHT: u16 = 6;

/// Areas of the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub list: Rect,
    pub details: Rect,
    pub preview: Rect,
    pub status: Rect,
    pub footer: Rect,
}

/// Split `area` into list + details | preview, then status and footer rows.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[0]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(DETAILS_HEIGHT)])
        .split(columns[0]);

    ScreenLayout {
        list: left[0],
        details: left[1],
        preview: columns[1],
        status: rows[1],
        footer: rows[2],
    }
}

/// Create a centered rectangle taking the given percentages of `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}
