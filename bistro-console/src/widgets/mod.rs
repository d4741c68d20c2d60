//! Rendering helpers shared by the pages

pub mod chart;
pub mod data_table;
pub mod modal;
pub mod stat_card;
pub mod toasts;

use ratatui::prelude::*;
use shared::table::BadgeTone;

pub fn tone_color(tone: BadgeTone) -> Color {
    match tone {
        BadgeTone::Success => Color::Green,
        BadgeTone::Warning => Color::Yellow,
        BadgeTone::Danger => Color::Red,
        BadgeTone::Info => Color::Cyan,
        BadgeTone::Neutral => Color::Gray,
    }
}

/// `percent_x` by `percent_y` rect centered in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
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
        .split(vertical[1])[1]
}
