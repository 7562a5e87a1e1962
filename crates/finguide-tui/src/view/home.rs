use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::model::page::{Card, CardKind, PageLayout, Reveal, SectionId};
use crate::theme::Theme;
use crate::view::truncate;

const HERO_ART: &[&str] = &[
    r"  _____ _        ____       _     _      ",
    r" |  ___(_)_ __  / ___|_   _(_) __| | ___ ",
    r" | |_  | | '_ \| |  _| | | | |/ _` |/ _ \",
    r" |  _| | | | | | |_| | |_| | | (_| |  __/",
    r" |_|   |_|_| |_|\____|\__,_|_|\__,_|\___|",
];

/// Render the scrollable page into `area` and the key hints into
/// `footer_area`, recording the frame's geometry on the app.
pub fn render_in(f: &mut Frame, app: &mut App, area: Rect, footer_area: Rect) {
    let (lines, layout) = build_page(app, area);
    app.layout = layout;
    app.page_area = Some(area);
    app.clamp_scroll();

    let page = Paragraph::new(lines).scroll((app.scroll, 0));
    f.render_widget(page, area);

    render_footer(f, footer_area, &app.theme);
}

fn build_page(app: &App, area: Rect) -> (Vec<Line<'static>>, PageLayout) {
    let theme = &app.theme;
    let width = area.width as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut layout = PageLayout {
        viewport: area.height,
        ..Default::default()
    };

    // --- Hero ---
    let start = lines.len() as u16;
    lines.push(Line::from(""));
    for art in HERO_ART {
        lines.push(Line::from(Span::styled(
            (*art).to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Master your money, one guide at a time.".to_string(),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "  Practical budgeting, saving, and investing guidance without the jargon.".to_string(),
        Style::default().fg(theme.dim),
    )));
    lines.push(Line::from(""));
    lines.push(hint_line(
        &[
            ("Tab", "browse cards"),
            ("Enter", "read"),
            ("m", "sections"),
        ],
        theme,
    ));
    lines.push(Line::from(""));
    layout
        .sections
        .push((SectionId::Hero, start..lines.len() as u16));

    // --- Money-saving tips (feature cards) ---
    let start = lines.len() as u16;
    section_title(&mut lines, "Smart Money-Saving Tips", width, theme);
    for (idx, card) in app.cards.iter().enumerate() {
        if matches!(card.kind, CardKind::Feature) {
            push_card(&mut lines, &mut layout, idx, card, app, width);
        }
    }
    layout
        .sections
        .push((SectionId::Tips, start..lines.len() as u16));

    // --- Stats ---
    let start = lines.len() as u16;
    section_title(&mut lines, "FinGuide by the Numbers", width, theme);
    for counter in &app.counters {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:>10}", counter.display()),
                Style::default().fg(theme.stat).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", counter.label),
                Style::default().fg(theme.text),
            ),
        ]));
        lines.push(Line::from(""));
    }
    layout
        .sections
        .push((SectionId::Stats, start..lines.len() as u16));

    // --- Guides (post cards) ---
    let start = lines.len() as u16;
    section_title(&mut lines, "Latest Guides", width, theme);
    for (idx, card) in app.cards.iter().enumerate() {
        if matches!(card.kind, CardKind::Post { .. }) {
            push_card(&mut lines, &mut layout, idx, card, app, width);
        }
    }
    layout
        .sections
        .push((SectionId::Guides, start..lines.len() as u16));

    // --- About ---
    let start = lines.len() as u16;
    section_title(&mut lines, "About FinGuide", width, theme);
    for text in [
        "  FinGuide is a financial-literacy publication covering budgeting,",
        "  saving, investing, and earning more. Every guide is practical,",
        "  step-by-step, and free.",
    ] {
        lines.push(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(theme.text),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Educational content only. Nothing here is financial advice.".to_string(),
        Style::default().fg(theme.dim),
    )));
    lines.push(Line::from(Span::styled(
        "  \u{00A9} 2025 FinGuide".to_string(),
        Style::default().fg(theme.dim),
    )));
    lines.push(Line::from(""));
    layout
        .sections
        .push((SectionId::About, start..lines.len() as u16));

    layout.height = lines.len() as u16;
    (lines, layout)
}

/// Push one card and record its row range. Hidden cards keep their geometry
/// (blank rows) so the page doesn't reflow as reveals run.
fn push_card(
    lines: &mut Vec<Line<'static>>,
    layout: &mut PageLayout,
    idx: usize,
    card: &Card,
    app: &App,
    width: usize,
) {
    let theme = &app.theme;
    let focused = app.card_focus == Some(idx);
    let start = lines.len() as u16;
    let rows = match card.kind {
        CardKind::Feature => 2,
        CardKind::Post { .. } => 3,
    };

    if card.reveal.is_hidden() {
        for _ in 0..rows {
            lines.push(Line::from(""));
        }
    } else {
        let settled = card.reveal == Reveal::Shown;
        let body_fg = if settled { theme.text } else { theme.dim };

        let mut title_style = Style::default().fg(body_fg);
        if settled {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }
        if focused {
            title_style = title_style.bg(theme.highlight_bg);
        }
        lines.push(Line::from(vec![
            Span::styled("  \u{25B8} ".to_string(), Style::default().fg(theme.accent)),
            Span::styled(truncate(card.title, width.saturating_sub(6)), title_style),
        ]));

        if let CardKind::Post {
            category,
            date,
            read_time,
        } = card.kind
        {
            lines.push(Line::from(vec![
                Span::styled("    ".to_string(), Style::default()),
                Span::styled(
                    category.label().to_string(),
                    Style::default().fg(theme.category_color(category)),
                ),
                Span::styled(
                    format!(" \u{00B7} Finance Guide \u{00B7} {date} \u{00B7} {read_time}"),
                    Style::default().fg(theme.dim),
                ),
            ]));
        }

        lines.push(Line::from(Span::styled(
            format!("    {}", truncate(&card.blurb, width.saturating_sub(6))),
            Style::default().fg(theme.dim),
        )));
    }

    layout.cards.push((idx, start..lines.len() as u16));
    lines.push(Line::from(""));
}

fn section_title(lines: &mut Vec<Line<'static>>, title: &str, width: usize, theme: &Theme) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.heading)
            .add_modifier(Modifier::BOLD),
    )));
    let rule_len = width.saturating_sub(4).min(60);
    lines.push(Line::from(Span::styled(
        format!("  {}", "\u{2500}".repeat(rule_len)),
        theme.border_style(),
    )));
    lines.push(Line::from(""));
}

fn hint_line(pairs: &[(&str, &str)], theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled("  ".to_string(), Style::default())];
    for (key, desc) in pairs {
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {desc}   "),
            Style::default().fg(theme.dim),
        ));
    }
    Line::from(spans)
}

fn render_footer(f: &mut Frame, area: Rect, theme: &Theme) {
    let footer = Line::from(Span::styled(
        " j/k:scroll  Tab:cards  Enter:read  1-5:jump  m:menu  t:theme  ?:help  q:quit",
        theme.footer_style(),
    ));
    f.render_widget(Paragraph::new(footer), area);
}
