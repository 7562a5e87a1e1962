use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::action::Action;

/// Map a crossterm terminal event to a TUI action.
pub fn map_event(event: &Event) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl+C always quits
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Action::Quit;
            }
            map_key(key)
        }
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(w, h) => Action::Resize(*w, *h),
        _ => Action::None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::MoveDown,
        MouseEventKind::ScrollUp => Action::MoveUp,
        MouseEventKind::Down(MouseButton::Left) => Action::ClickAt(mouse.column, mouse.row),
        _ => Action::None,
    }
}

fn map_key(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageDown,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Char('g') | KeyCode::Home => Action::GoTop,
        KeyCode::Char('G') | KeyCode::End => Action::GoBottom,
        KeyCode::Enter => Action::DrillIn,
        KeyCode::Esc => Action::NavigateBack,
        KeyCode::Tab => Action::NextCard,
        KeyCode::BackTab => Action::PrevCard,
        KeyCode::Char('m') => Action::ToggleMenu,
        KeyCode::Char('t') => Action::CycleTheme,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char(c @ '1'..='5') => {
            Action::JumpSection(c as usize - '1' as usize)
        }
        _ => Action::None,
    }
}
