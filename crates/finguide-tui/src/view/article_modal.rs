use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use finguide_content::{Block as DocBlock, CalloutKind, Inline, ListItem};

use crate::app::App;
use crate::theme::Theme;
use crate::view::truncate;

/// Render the article modal as a centered overlay above the page, recording
/// its surface and close-control rectangles for click hit-testing.
pub fn render(f: &mut Frame, app: &mut App) {
    let screen = f.area();
    let area = modal_rect(screen);
    app.modal_area = Some(area);
    app.modal_close_area = Some(Rect {
        x: area.x + area.width.saturating_sub(6),
        y: area.y,
        width: 5.min(area.width),
        height: 1,
    });

    let theme = &app.theme;
    let Some(open) = app.modal.article() else {
        return;
    };
    let article = open.article;

    let mut lines: Vec<Line<'static>> = Vec::new();
    if let Some(category) = article.category {
        lines.push(Line::from(vec![
            Span::styled(
                category.label().to_string(),
                Style::default()
                    .fg(theme.category_color(category))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    " \u{00B7} {} \u{00B7} {} \u{00B7} {}",
                    article.author.unwrap_or(""),
                    article.date.unwrap_or(""),
                    article.read_time.unwrap_or(""),
                ),
                Style::default().fg(theme.dim),
            ),
        ]));
        lines.push(Line::from(""));
    }
    push_blocks(&open.doc.blocks, theme, &mut lines);

    let title = format!(
        " {} ",
        truncate(article.title, area.width.saturating_sub(12) as usize)
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title_top(Line::from(Span::styled(
            title,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )))
        .title_top(
            Line::from(Span::styled(
                " \u{2715} ",
                Style::default().fg(theme.dim).add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        )
        .title_bottom(
            Line::from(Span::styled(
                " j/k scroll \u{00B7} Esc close ",
                Style::default().fg(theme.dim),
            ))
            .right_aligned(),
        );

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((open.scroll, 0));

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

/// The modal surface: centered, leaving a border of page visible so the
/// overlay background remains clickable.
fn modal_rect(screen: Rect) -> Rect {
    let width = screen.width.saturating_sub(10).clamp(30, 100);
    let height = screen.height.saturating_sub(4).max(8);
    crate::view::centered_rect(width, height, screen)
}

fn push_blocks(blocks: &[DocBlock], theme: &Theme, lines: &mut Vec<Line<'static>>) {
    for block in blocks {
        match block {
            DocBlock::Heading { level, text } => {
                if lines.last().is_some_and(|l| l.width() != 0) {
                    lines.push(Line::from(""));
                }
                let style = match level {
                    3 => Style::default()
                        .fg(theme.heading)
                        .add_modifier(Modifier::BOLD),
                    4 => Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    _ => Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::BOLD | Modifier::ITALIC),
                };
                lines.push(Line::from(Span::styled(text.clone(), style)));
            }
            DocBlock::Paragraph(inlines) => {
                lines.push(Line::from(inline_spans(inlines, theme)));
                lines.push(Line::from(""));
            }
            DocBlock::List { ordered, items } => {
                push_list(items, *ordered, theme, 0, lines);
                lines.push(Line::from(""));
            }
            DocBlock::Callout { kind, blocks } => {
                let bar_color = match kind {
                    CalloutKind::Intro => theme.dim,
                    CalloutKind::Highlight => theme.stat,
                    CalloutKind::Stats => theme.accent,
                };
                let mut inner: Vec<Line<'static>> = Vec::new();
                push_blocks(blocks, theme, &mut inner);
                while inner.last().is_some_and(|l| l.width() == 0) {
                    inner.pop();
                }
                for line in inner {
                    let mut spans = vec![Span::styled(
                        "\u{258C} ".to_string(),
                        Style::default().fg(bar_color),
                    )];
                    spans.extend(line.spans);
                    lines.push(Line::from(spans));
                }
                lines.push(Line::from(""));
            }
            DocBlock::StatGrid(entries) => {
                for entry in entries {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("{:>12}  ", entry.number),
                            Style::default().fg(theme.stat).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(entry.label.clone(), Style::default().fg(theme.dim)),
                    ]));
                }
                lines.push(Line::from(""));
            }
        }
    }
}

fn push_list(
    items: &[ListItem],
    ordered: bool,
    theme: &Theme,
    depth: usize,
    lines: &mut Vec<Line<'static>>,
) {
    for (i, item) in items.iter().enumerate() {
        let indent = "  ".repeat(depth + 1);
        let bullet = if ordered {
            format!("{}{}. ", indent, i + 1)
        } else if depth == 0 {
            format!("{indent}\u{2022} ")
        } else {
            format!("{indent}\u{25E6} ")
        };
        let mut spans = vec![Span::styled(bullet, Style::default().fg(theme.accent))];
        spans.extend(inline_spans(&item.content, theme));
        lines.push(Line::from(spans));

        for nested in &item.nested {
            if let DocBlock::List { ordered, items } = nested {
                push_list(items, *ordered, theme, depth + 1, lines);
            }
        }
    }
}

fn inline_spans(inlines: &[Inline], theme: &Theme) -> Vec<Span<'static>> {
    inlines
        .iter()
        .map(|inline| match inline {
            Inline::Text(t) => Span::styled(t.clone(), Style::default().fg(theme.text)),
            Inline::Strong(t) => Span::styled(
                t.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Inline::Em(t) => Span::styled(
                t.clone(),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::ITALIC),
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use finguide_content::registry;

    fn lines_for(id: &str) -> Vec<Line<'static>> {
        let article = registry().lookup(id).expect("known id");
        let mut lines = Vec::new();
        push_blocks(&article.document().blocks, &Theme::dark(), &mut lines);
        lines
    }

    fn text_of(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_headings_and_bullets() {
        let text = text_of(&lines_for("emergency-fund"));
        assert!(text.contains("Why You Need a $10,000 Emergency Fund"));
        assert!(text.contains("\u{2022} Major car repairs ($2,000-$5,000)"));
    }

    // The XRP guide nests its comparison lists two deep.
    #[test]
    fn renders_nested_list_with_secondary_bullets() {
        let text = text_of(&lines_for("xrp-analysis-2025"));
        assert!(text.contains("\u{25E6} "));
    }

    #[test]
    fn callouts_get_a_bar_prefix() {
        let text = text_of(&lines_for("emergency-fund"));
        assert!(text.contains("\u{258C} Quick Win Strategy"));
    }

    #[test]
    fn stat_grids_render_number_and_label() {
        let text = text_of(&lines_for("index-fund-investing"));
        assert!(text.contains("20s-30s"));
        assert!(text.contains("90% Stocks, 10% Bonds"));
    }

    #[test]
    fn every_article_renders_visible_lines() {
        for article in registry().iter() {
            let mut lines = Vec::new();
            push_blocks(&article.document().blocks, &Theme::dark(), &mut lines);
            assert!(
                lines.iter().any(|l| l.width() > 0),
                "{} rendered blank",
                article.id
            );
        }
    }
}
