pub mod article_modal;
pub mod header;
pub mod help;
pub mod home;
pub mod menu;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Truncate a string to fit in `max_width` columns, appending "\u{2026}" if truncated.
pub fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.len() <= max_width {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    truncated.push('\u{2026}');
    truncated
}

/// Create a centered rectangle of the given width (columns) and height (rows).
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area);
    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}
