/// Flat set of user intents the event loop feeds into `App::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveDown,
    MoveUp,
    PageDown,
    PageUp,
    GoTop,
    GoBottom,
    /// Enter: open the focused card's article (or confirm a menu choice).
    DrillIn,
    /// Esc: dismiss the topmost overlay; a no-op with nothing open.
    NavigateBack,
    NextCard,
    PrevCard,
    ToggleMenu,
    ToggleHelp,
    CycleTheme,
    /// Jump to a page section by position (0 = hero).
    JumpSection(usize),
    ClickAt(u16, u16),
    Resize(u16, u16),
    Tick,
    None,
}
