use ratatui::style::{Color, Modifier, Style};

use finguide_content::Category;

/// Color theme for the TUI.
pub struct Theme {
    pub brand_fg: Color,
    pub brand_bg: Color,
    /// Header background once the page has scrolled past the threshold.
    pub brand_scrolled_bg: Color,

    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub heading: Color,
    pub stat: Color,
    pub highlight_bg: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Theme {
    /// Default dark theme: money-green brand on a dark terminal.
    pub fn dark() -> Self {
        Self {
            brand_fg: Color::Black,
            brand_bg: Color::Rgb(0, 190, 100),
            brand_scrolled_bg: Color::Rgb(0, 140, 75),

            text: Color::White,
            dim: Color::DarkGray,
            border: Color::DarkGray,
            accent: Color::Rgb(0, 210, 120),
            heading: Color::Rgb(0, 210, 120),
            stat: Color::Rgb(245, 200, 70),
            highlight_bg: Color::Rgb(25, 45, 35),
            footer_fg: Color::DarkGray,
            footer_bg: Color::Reset,
        }
    }

    /// Light theme for bright terminal palettes.
    pub fn light() -> Self {
        Self {
            brand_fg: Color::White,
            brand_bg: Color::Rgb(0, 140, 75),
            brand_scrolled_bg: Color::Rgb(0, 100, 55),

            text: Color::Black,
            dim: Color::Rgb(110, 110, 110),
            border: Color::Rgb(150, 150, 150),
            accent: Color::Rgb(0, 120, 80),
            heading: Color::Rgb(0, 120, 80),
            stat: Color::Rgb(175, 120, 0),
            highlight_bg: Color::Rgb(215, 235, 222),
            footer_fg: Color::Rgb(110, 110, 110),
            footer_bg: Color::Reset,
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Stocks => Color::Rgb(90, 200, 250),
            Category::Investing => Color::Rgb(120, 160, 255),
            Category::Crypto => Color::Rgb(250, 170, 60),
            Category::MakingMoney => Color::Rgb(230, 120, 200),
            Category::PassiveIncome => Color::Rgb(120, 220, 160),
        }
    }

    pub fn header_style(&self, scrolled: bool) -> Style {
        let bg = if scrolled {
            self.brand_scrolled_bg
        } else {
            self.brand_bg
        };
        Style::default()
            .fg(self.brand_fg)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }
}
