use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::model::page::SectionId;

/// Render the persistent site header: brand bar plus a rule line. The bar
/// compacts and darkens once the page scrolls past the threshold.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let theme = &app.theme;
    let scrolled = app.header_scrolled();
    let style = theme.header_style(scrolled);

    let brand_row = Rect {
        height: 1.min(area.height),
        ..area
    };
    let brand = if scrolled {
        " $ FinGuide "
    } else {
        " $ FinGuide \u{00B7} Master Your Money "
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(brand, style))).style(style),
        brand_row,
    );

    // Section shortcuts, painted over the right side of the brand bar.
    let mut nav_spans: Vec<Span> = Vec::new();
    for (i, section) in SectionId::all().into_iter().enumerate() {
        nav_spans.push(Span::styled(format!("{} ", i + 1), style));
        nav_spans.push(Span::styled(format!("{}  ", section.label()), style));
    }
    f.render_widget(
        Paragraph::new(Line::from(nav_spans)).alignment(Alignment::Right),
        brand_row,
    );

    if area.height > 1 {
        let rule_row = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        let rule_color = if scrolled { theme.accent } else { theme.border };
        let rule = "\u{2500}".repeat(area.width as usize);
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                rule,
                Style::default().fg(rule_color),
            ))),
            rule_row,
        );
    }
}
