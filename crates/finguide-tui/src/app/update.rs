use super::App;
use crate::action::Action;
use crate::model::page::SectionId;

impl App {
    /// Process a user action and update state. Returns true if the app
    /// should quit.
    pub fn update(&mut self, action: Action) -> bool {
        // Help overlay sits above everything.
        if self.show_help {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::ToggleHelp | Action::NavigateBack => {
                    self.show_help = false;
                }
                Action::Tick => self.on_tick(),
                _ => {}
            }
            return false;
        }

        // Navigation menu overlay.
        if self.menu_open {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::ToggleMenu | Action::NavigateBack => {
                    self.menu_open = false;
                }
                Action::MoveDown => {
                    let max = SectionId::all().len() - 1;
                    if self.menu_cursor < max {
                        self.menu_cursor += 1;
                    }
                }
                Action::MoveUp => {
                    self.menu_cursor = self.menu_cursor.saturating_sub(1);
                }
                Action::DrillIn => {
                    let section = SectionId::all()[self.menu_cursor];
                    self.menu_open = false;
                    self.jump_to_section(section);
                }
                Action::ClickAt(x, y) => self.handle_menu_click(x, y),
                Action::ToggleHelp => self.show_help = true,
                Action::Tick => self.on_tick(),
                _ => {}
            }
            return false;
        }

        // Article modal: while open it owns scroll input, so the page
        // underneath cannot move until it closes.
        if self.modal.is_open() {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::NavigateBack => self.modal.close(),
                Action::MoveDown => self.modal.scroll_down(1),
                Action::MoveUp => self.modal.scroll_up(1),
                Action::PageDown => self.modal.scroll_down(self.page_rows()),
                Action::PageUp => self.modal.scroll_up(self.page_rows()),
                Action::GoTop => self.modal.scroll_top(),
                Action::ClickAt(x, y) => self.handle_modal_click(x, y),
                Action::ToggleHelp => self.show_help = true,
                Action::Tick => self.on_tick(),
                _ => {}
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
                return true;
            }
            Action::MoveDown => self.scroll_by(1),
            Action::MoveUp => self.scroll_by(-1),
            Action::PageDown => self.scroll_by(self.page_rows() as i32),
            Action::PageUp => self.scroll_by(-(self.page_rows() as i32)),
            Action::GoTop => self.scroll_by(i32::MIN / 2),
            Action::GoBottom => self.scroll_by(i32::MAX / 2),
            Action::DrillIn => {
                if let Some(idx) = self.card_focus {
                    let id = self.cards[idx].article_id;
                    self.open_article(id);
                }
            }
            // Nothing is open; Esc deliberately changes nothing.
            Action::NavigateBack => {}
            Action::NextCard => self.focus_next_card(),
            Action::PrevCard => self.focus_prev_card(),
            Action::JumpSection(i) => {
                if let Some(&section) = SectionId::all().get(i) {
                    self.jump_to_section(section);
                }
            }
            Action::ToggleMenu => {
                self.menu_open = true;
                self.menu_cursor = 0;
            }
            Action::ToggleHelp => self.show_help = true,
            Action::CycleTheme => self.cycle_theme(),
            Action::ClickAt(x, y) => self.handle_page_click(x, y),
            Action::Tick => self.on_tick(),
            Action::Resize(..) => {}
            Action::None => {}
        }
        false
    }
}
