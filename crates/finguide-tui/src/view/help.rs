use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::theme::Theme;
use crate::view::centered_rect;

/// Render the help overlay as a centered popup.
pub fn render(f: &mut Frame, theme: &Theme) {
    let popup = centered_rect(58, 24, f.area());

    let lines = vec![
        Line::from(Span::styled(
            " Keyboard Shortcuts ",
            theme.header_style(false),
        )),
        Line::from(""),
        section_header("Page", theme),
        key_line("j / \u{2193}", "Scroll down", theme),
        key_line("k / \u{2191}", "Scroll up", theme),
        key_line("Ctrl+d / PgDn", "Page down", theme),
        key_line("Ctrl+u / PgUp", "Page up", theme),
        key_line("g / Home", "Go to top", theme),
        key_line("G / End", "Go to bottom", theme),
        key_line("1-5", "Jump to section", theme),
        key_line("m", "Sections menu", theme),
        Line::from(""),
        section_header("Articles", theme),
        key_line("Tab / Shift+Tab", "Next / previous card", theme),
        key_line("Enter", "Open the focused article", theme),
        key_line("Esc", "Close the article", theme),
        key_line("Click", "Open card / close on backdrop", theme),
        Line::from(""),
        section_header("Global", theme),
        key_line("t", "Switch theme", theme),
        key_line("?", "Toggle this help", theme),
        key_line("q / Ctrl+c", "Quit", theme),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn section_header<'a>(title: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {key:<16}"), Style::default().fg(theme.text)),
        Span::styled(desc, Style::default().fg(theme.dim)),
    ])
}
