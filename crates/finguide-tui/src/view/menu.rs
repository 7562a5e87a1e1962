use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::App;
use crate::model::page::SectionId;
use crate::view::centered_rect;

/// Render the section navigation menu as a centered popup, recording its
/// area and the screen row of the first entry for click handling.
pub fn render(f: &mut Frame, app: &mut App) {
    let theme = &app.theme;
    let sections = SectionId::all();
    let popup = centered_rect(26, sections.len() as u16 + 2, f.area());

    let mut lines = Vec::new();
    for (i, section) in sections.into_iter().enumerate() {
        let selected = i == app.menu_cursor;
        let marker = if selected { "\u{25B8} " } else { "  " };
        let mut style = Style::default().fg(theme.text);
        if selected {
            style = style.bg(theme.highlight_bg).add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(Span::styled(
            format!(" {marker}{}  {}", i + 1, section.label()),
            style,
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Sections "),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);

    app.menu_area = Some(popup);
    app.menu_first_row = popup.y + 1;
}
