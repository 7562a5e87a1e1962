mod update;

use ratatui::layout::{Position, Rect};

use finguide_content::registry;

use crate::model::modal::ArticleModal;
use crate::model::page::{Card, PageLayout, SectionId, overlap};
use crate::model::stats::StatCounter;
use crate::theme::Theme;

/// Rows of page scroll after which the header switches to its compact style.
pub const HEADER_SCROLL_THRESHOLD: u16 = 6;

/// Fraction of the Stats section that must be visible before the counters
/// start (half), expressed as numerator/denominator.
const STATS_VISIBILITY_NUM: u16 = 1;
const STATS_VISIBILITY_DEN: u16 = 2;

/// Main application state.
pub struct App {
    /// Page scroll offset in rows.
    pub scroll: u16,
    /// Pending smooth-scroll destination; eased toward on each tick.
    pub scroll_target: Option<u16>,
    /// All cards in page order: the six tips, then the thirteen guides.
    pub cards: Vec<Card>,
    pub counters: Vec<StatCounter>,
    pub card_focus: Option<usize>,
    pub modal: ArticleModal,
    pub menu_open: bool,
    pub menu_cursor: usize,
    pub show_help: bool,
    pub theme: Theme,
    pub theme_name: String,
    pub tick: usize,
    pub should_quit: bool,

    /// Geometry of the last rendered frame (see `PageLayout`).
    pub layout: PageLayout,
    /// Screen area the page body was last rendered into.
    pub page_area: Option<Rect>,
    /// Modal surface and its close control, for click hit-testing.
    pub modal_area: Option<Rect>,
    pub modal_close_area: Option<Rect>,
    /// Menu popup area and the screen row of its first entry.
    pub menu_area: Option<Rect>,
    pub menu_first_row: u16,
}

impl App {
    pub fn new(theme_name: &str) -> Self {
        let reg = registry();
        let cards: Vec<Card> = reg
            .tips()
            .chain(reg.posts())
            .map(Card::from_article)
            .collect();

        let counters = vec![
            StatCounter::new("Monthly readers", 48_000),
            StatCounter::new("Money-saving tips shared", 350),
            StatCounter::new("In-depth guides", reg.len() as u64),
            StatCounter::new("Average yearly savings ($)", 2_400),
        ];

        Self {
            scroll: 0,
            scroll_target: None,
            cards,
            counters,
            card_focus: None,
            modal: ArticleModal::new(),
            menu_open: false,
            menu_cursor: 0,
            show_help: false,
            theme: Theme::by_name(theme_name),
            theme_name: theme_name.to_string(),
            tick: 0,
            should_quit: false,
            layout: PageLayout::default(),
            page_area: None,
            modal_area: None,
            modal_close_area: None,
            menu_area: None,
            menu_first_row: 0,
        }
    }

    /// Open an article in the modal; unknown ids fail soft.
    pub fn open_article(&mut self, id: &str) -> bool {
        self.modal.open(registry(), id)
    }

    pub fn header_scrolled(&self) -> bool {
        self.scroll > HEADER_SCROLL_THRESHOLD
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.height.saturating_sub(self.layout.viewport)
    }

    pub fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Manual scroll; cancels any in-flight smooth scroll.
    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll_target = None;
        let next = (self.scroll as i32 + delta).max(0) as u16;
        self.scroll = next.min(self.max_scroll());
    }

    /// Page-sized scroll step.
    pub fn page_rows(&self) -> u16 {
        self.layout.viewport.max(1)
    }

    /// Smooth-scroll so the section's first row sits at the top.
    pub fn jump_to_section(&mut self, id: SectionId) {
        if let Some(range) = self.layout.section_range(id) {
            self.scroll_target = Some(range.start.min(self.max_scroll()));
        }
    }

    pub fn focus_next_card(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let next = match self.card_focus {
            Some(i) => (i + 1) % self.cards.len(),
            None => 0,
        };
        self.set_focus(next);
    }

    pub fn focus_prev_card(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let prev = match self.card_focus {
            Some(0) | None => self.cards.len() - 1,
            Some(i) => i - 1,
        };
        self.set_focus(prev);
    }

    fn set_focus(&mut self, idx: usize) {
        self.card_focus = Some(idx);
        // Bring the card into view, with a little headroom.
        if let Some((_, range)) = self.layout.cards.iter().find(|(i, _)| *i == idx) {
            let viewport = self.layout.viewport;
            if viewport == 0 {
                return;
            }
            let top = self.scroll;
            let bottom = top + viewport;
            if range.start < top || range.end > bottom {
                let target = range.start.saturating_sub(3).min(self.max_scroll());
                self.scroll_target = Some(target);
            }
        }
    }

    pub fn cycle_theme(&mut self) {
        let name = match self.theme_name.as_str() {
            "dark" => "light",
            _ => "dark",
        };
        self.theme_name = name.to_string();
        self.theme = Theme::by_name(name);
    }

    /// Per-tick bookkeeping: smooth scroll easing, visibility-triggered
    /// animations, and animation stepping.
    pub(super) fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        // Page scrolling is suspended while the modal covers it.
        if !self.modal.is_open() {
            self.ease_scroll();
        }
        self.run_visibility_triggers();
        self.advance_animations();
    }

    /// Move a quarter of the remaining distance toward the target each tick,
    /// always at least one row, settling exactly on the target.
    fn ease_scroll(&mut self) {
        let Some(target) = self.scroll_target else {
            return;
        };
        let target = target.min(self.max_scroll());
        let current = self.scroll as i32;
        let delta = target as i32 - current;
        if delta == 0 {
            self.scroll_target = None;
            return;
        }
        let step = (delta.abs() / 4).max(1) * delta.signum();
        self.scroll = (current + step) as u16;
        if self.scroll == target {
            self.scroll_target = None;
        }
    }

    /// Start animations for whatever just scrolled into view. Skipped until
    /// the first frame has recorded real geometry.
    fn run_visibility_triggers(&mut self) {
        let viewport = self.layout.viewport;
        if viewport == 0 {
            return;
        }
        let visible = self.scroll..self.scroll.saturating_add(viewport);

        if let Some(stats) = self.layout.section_range(SectionId::Stats) {
            let shown = overlap(&stats, &visible);
            let len = stats.end.saturating_sub(stats.start);
            if shown * STATS_VISIBILITY_DEN >= len * STATS_VISIBILITY_NUM && shown > 0 {
                for counter in &mut self.counters {
                    counter.start();
                }
            }
        }

        for (idx, range) in &self.layout.cards {
            let shown = overlap(range, &visible);
            let len = range.end.saturating_sub(range.start);
            // A tenth of the card visible is enough to wake it up.
            if shown > 0 && shown * 10 >= len {
                if let Some(card) = self.cards.get_mut(*idx) {
                    card.reveal.trigger();
                }
            }
        }
    }

    fn advance_animations(&mut self) {
        for counter in &mut self.counters {
            counter.step();
        }
        for card in &mut self.cards {
            card.reveal.step();
        }
    }

    pub(super) fn handle_page_click(&mut self, x: u16, y: u16) {
        let Some(area) = self.page_area else {
            return;
        };
        if !area.contains(Position::new(x, y)) {
            return;
        }
        let row = (y - area.y).saturating_add(self.scroll);
        if let Some(idx) = self.layout.card_at(row) {
            self.card_focus = Some(idx);
            let id = self.cards[idx].article_id;
            self.open_article(id);
        }
    }

    pub(super) fn handle_modal_click(&mut self, x: u16, y: u16) {
        let pos = Position::new(x, y);
        if let Some(close) = self.modal_close_area
            && close.contains(pos)
        {
            self.modal.close();
            return;
        }
        match self.modal_area {
            // Inside the article surface: stay open.
            Some(area) if area.contains(pos) => {}
            // Overlay background: dismiss.
            Some(_) => self.modal.close(),
            // No frame rendered yet; nothing to hit-test against.
            None => {}
        }
    }

    pub(super) fn handle_menu_click(&mut self, x: u16, y: u16) {
        let pos = Position::new(x, y);
        match self.menu_area {
            Some(area) if area.contains(pos) => {
                let sections = SectionId::all();
                let row = y.saturating_sub(self.menu_first_row) as usize;
                if y >= self.menu_first_row && row < sections.len() {
                    self.menu_open = false;
                    self.jump_to_section(sections[row]);
                }
            }
            Some(_) => self.menu_open = false,
            None => {}
        }
    }

    /// Render the current frame.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let area = f.area();

        let header_area = Rect {
            height: 2.min(area.height),
            ..area
        };
        let footer_area = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(1),
            width: area.width,
            height: 1.min(area.height),
        };
        let body_area = Rect {
            x: area.x,
            y: area.y + header_area.height,
            width: area.width,
            height: area
                .height
                .saturating_sub(header_area.height)
                .saturating_sub(footer_area.height),
        };

        crate::view::header::render(f, self, header_area);
        crate::view::home::render_in(f, self, body_area, footer_area);

        if self.modal.is_open() {
            crate::view::article_modal::render(f, self);
        } else {
            self.modal_area = None;
            self.modal_close_area = None;
        }

        if self.menu_open {
            crate::view::menu::render(f, self);
        } else {
            self.menu_area = None;
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests;
