use ratatui::layout::Rect;

use super::*;
use crate::action::Action;
use crate::model::page::Reveal;

/// Create a minimal App with a plausible rendered layout injected, since
/// tests never draw a real frame.
fn test_app() -> App {
    let mut app = App::new("dark");
    app.layout = PageLayout {
        sections: vec![
            (SectionId::Hero, 0..12),
            (SectionId::Tips, 12..40),
            (SectionId::Stats, 40..50),
            (SectionId::Guides, 50..110),
            (SectionId::About, 110..120),
        ],
        cards: vec![(0, 14..16), (1, 18..20), (6, 52..55)],
        height: 120,
        viewport: 20,
    };
    app
}

// ── Modal open/close lifecycle ──────────────────────────────────

#[test]
fn starts_closed() {
    let app = test_app();
    assert!(!app.modal.is_open());
}

#[test]
fn open_valid_id_opens_modal() {
    let mut app = test_app();
    assert!(app.open_article("emergency-fund"));
    let open = app.modal.article().expect("open");
    assert_eq!(
        open.article.title,
        "How to Build a $10,000 Emergency Fund in 12 Months"
    );
}

#[test]
fn open_missing_id_stays_closed() {
    let mut app = test_app();
    assert!(!app.open_article("not-a-real-id"));
    assert!(!app.modal.is_open());
}

#[test]
fn open_replaces_open_modal() {
    let mut app = test_app();
    app.open_article("emergency-fund");
    app.modal.scroll_down(9);

    app.open_article("defi-explained");

    let open = app.modal.article().expect("open");
    assert_eq!(open.article.id, "defi-explained");
    assert_eq!(open.scroll, 0, "no residue from the previous article");
}

#[test]
fn esc_closes_modal() {
    let mut app = test_app();
    app.open_article("emergency-fund");
    app.update(Action::NavigateBack);
    assert!(!app.modal.is_open());
}

#[test]
fn esc_with_nothing_open_is_noop() {
    let mut app = test_app();
    app.scroll = 17;
    app.card_focus = Some(1);

    app.update(Action::NavigateBack);

    assert!(!app.modal.is_open());
    assert_eq!(app.scroll, 17);
    assert_eq!(app.card_focus, Some(1));
    assert!(!app.menu_open && !app.show_help);
}

// ── Scroll lock while the modal is open ─────────────────────────

#[test]
fn modal_owns_scroll_input_while_open() {
    let mut app = test_app();
    app.scroll = 30;
    app.open_article("emergency-fund");

    app.update(Action::MoveDown);
    app.update(Action::MoveDown);
    app.update(Action::MoveDown);

    assert_eq!(app.scroll, 30, "page must not move behind the modal");
    assert_eq!(app.modal.article().unwrap().scroll, 3);
}

#[test]
fn page_scroll_resumes_after_close() {
    let mut app = test_app();
    app.scroll = 30;
    app.open_article("emergency-fund");
    app.update(Action::MoveDown);
    app.update(Action::NavigateBack);

    app.update(Action::MoveDown);
    assert_eq!(app.scroll, 31);
}

#[test]
fn smooth_scroll_pauses_while_modal_open() {
    let mut app = test_app();
    app.scroll_target = Some(60);
    app.open_article("emergency-fund");

    app.update(Action::Tick);
    assert_eq!(app.scroll, 0, "easing is suspended behind the modal");

    app.update(Action::NavigateBack);
    app.update(Action::Tick);
    assert!(app.scroll > 0, "easing resumes once closed");
}

// ── Click hit-testing ───────────────────────────────────────────

fn place_modal(app: &mut App) {
    app.modal_area = Some(Rect::new(10, 4, 60, 16));
    app.modal_close_area = Some(Rect::new(64, 4, 5, 1));
}

#[test]
fn click_on_overlay_background_closes() {
    let mut app = test_app();
    app.open_article("emergency-fund");
    place_modal(&mut app);

    app.update(Action::ClickAt(2, 2));
    assert!(!app.modal.is_open());
}

#[test]
fn click_inside_content_keeps_open() {
    let mut app = test_app();
    app.open_article("emergency-fund");
    place_modal(&mut app);

    app.update(Action::ClickAt(30, 10));
    assert!(app.modal.is_open());
}

#[test]
fn click_on_close_control_closes() {
    let mut app = test_app();
    app.open_article("emergency-fund");
    place_modal(&mut app);

    app.update(Action::ClickAt(66, 4));
    assert!(!app.modal.is_open());
}

#[test]
fn click_before_first_frame_is_skipped() {
    let mut app = test_app();
    app.open_article("emergency-fund");
    // No modal geometry recorded yet.
    app.update(Action::ClickAt(0, 0));
    assert!(app.modal.is_open());
}

#[test]
fn click_on_card_opens_its_article() {
    let mut app = test_app();
    app.page_area = Some(Rect::new(0, 2, 80, 20));
    app.scroll = 10;

    // Screen row 6 → page row 6 - 2 + 10 = 14, inside card 0.
    app.update(Action::ClickAt(5, 6));

    assert_eq!(app.card_focus, Some(0));
    let open = app.modal.article().expect("card click opens modal");
    assert_eq!(open.article.id, app.cards[0].article_id);
}

#[test]
fn click_between_cards_does_nothing() {
    let mut app = test_app();
    app.page_area = Some(Rect::new(0, 2, 80, 20));
    app.scroll = 10;

    // Page row 17 falls between the first two cards.
    app.update(Action::ClickAt(5, 9));
    assert!(!app.modal.is_open());
}

// ── Card focus ──────────────────────────────────────────────────

#[test]
fn tab_cycles_focus_through_cards() {
    let mut app = test_app();
    app.update(Action::NextCard);
    assert_eq!(app.card_focus, Some(0));
    app.update(Action::NextCard);
    assert_eq!(app.card_focus, Some(1));

    app.update(Action::PrevCard);
    assert_eq!(app.card_focus, Some(0));
    app.update(Action::PrevCard);
    assert_eq!(app.card_focus, Some(app.cards.len() - 1));
}

#[test]
fn enter_opens_focused_card() {
    let mut app = test_app();
    app.update(Action::NextCard);
    app.update(Action::DrillIn);
    let open = app.modal.article().expect("open");
    assert_eq!(open.article.id, app.cards[0].article_id);
}

#[test]
fn enter_without_focus_is_noop() {
    let mut app = test_app();
    app.update(Action::DrillIn);
    assert!(!app.modal.is_open());
}

#[test]
fn focusing_offscreen_card_schedules_scroll() {
    let mut app = test_app();
    // Card 6 lives at rows 52..55, below the 20-row viewport.
    app.card_focus = Some(1);
    while app.card_focus != Some(6) {
        app.update(Action::NextCard);
    }
    assert_eq!(app.scroll_target, Some(49));
}

// ── Smooth scrolling ────────────────────────────────────────────

#[test]
fn smooth_scroll_eases_to_target_and_settles() {
    let mut app = test_app();
    app.scroll_target = Some(40);

    let mut prev = app.scroll;
    for _ in 0..200 {
        app.update(Action::Tick);
        assert!(app.scroll >= prev, "easing is monotonic");
        prev = app.scroll;
        if app.scroll_target.is_none() {
            break;
        }
    }
    assert_eq!(app.scroll, 40);
    assert!(app.scroll_target.is_none());
}

#[test]
fn manual_scroll_cancels_smooth_scroll() {
    let mut app = test_app();
    app.scroll_target = Some(40);
    app.update(Action::MoveDown);
    assert!(app.scroll_target.is_none());
}

#[test]
fn scroll_clamps_to_page_bottom() {
    let mut app = test_app();
    app.update(Action::GoBottom);
    assert_eq!(app.scroll, 100); // height 120 - viewport 20
    app.update(Action::MoveDown);
    assert_eq!(app.scroll, 100);
}

#[test]
fn menu_selection_jumps_to_section() {
    let mut app = test_app();
    app.update(Action::ToggleMenu);
    assert!(app.menu_open);

    app.update(Action::MoveDown);
    app.update(Action::MoveDown); // cursor on Stats
    app.update(Action::DrillIn);

    assert!(!app.menu_open, "choosing a link closes the menu");
    assert_eq!(app.scroll_target, Some(40));
}

#[test]
fn digit_jump_targets_section() {
    let mut app = test_app();
    app.update(Action::JumpSection(3));
    assert_eq!(app.scroll_target, Some(50));
}

// ── Header scroll styling ───────────────────────────────────────

#[test]
fn header_switches_style_past_threshold() {
    let mut app = test_app();
    app.scroll = HEADER_SCROLL_THRESHOLD;
    assert!(!app.header_scrolled());
    app.scroll = HEADER_SCROLL_THRESHOLD + 1;
    assert!(app.header_scrolled());
    app.scroll = 0;
    assert!(!app.header_scrolled());
}

// ── Visibility-triggered animations ─────────────────────────────

#[test]
fn counters_start_when_stats_half_visible() {
    let mut app = test_app();
    // Stats occupy rows 40..50; at scroll 25 the viewport shows 25..45,
    // which is exactly half the section.
    app.scroll = 25;
    for _ in 0..10 {
        app.update(Action::Tick);
    }

    assert!(app.counters.iter().all(|c| c.value() > 0));
}

#[test]
fn counters_stay_idle_below_half_visibility() {
    let mut app = test_app();
    // Viewport 4..24 shows nothing of the stats section.
    app.scroll = 4;
    for _ in 0..10 {
        app.update(Action::Tick);
    }
    assert!(app.counters.iter().all(|c| c.value() == 0));

    // 24..44 shows 4 of 10 stats rows, still under half.
    app.scroll = 24;
    for _ in 0..10 {
        app.update(Action::Tick);
    }
    assert!(app.counters.iter().all(|c| c.value() == 0));
}

#[test]
fn counters_run_to_completion_once_started() {
    let mut app = test_app();
    app.scroll = 25;
    // 2000ms / 16ms = 125 ticks, plus slack.
    for _ in 0..200 {
        app.update(Action::Tick);
    }
    for counter in &app.counters {
        assert!(counter.is_done());
        assert_eq!(counter.display(), format!("{}+", counter.target));
    }

    // Scrolling away and back must not restart them.
    app.scroll = 0;
    app.update(Action::Tick);
    app.scroll = 25;
    app.update(Action::Tick);
    assert!(app.counters.iter().all(|c| c.is_done()));
}

#[test]
fn cards_reveal_when_scrolled_into_view() {
    let mut app = test_app();
    // Viewport 0..20 covers cards 0 and 1 but not card 6 (rows 52..55).
    app.update(Action::Tick);

    assert!(!app.cards[0].reveal.is_hidden());
    assert!(!app.cards[1].reveal.is_hidden());
    assert!(app.cards[6].reveal.is_hidden());

    // Bring card 6 into view; it reveals independently.
    app.scroll = 45;
    app.update(Action::Tick);
    assert!(!app.cards[6].reveal.is_hidden());
}

#[test]
fn revealed_cards_settle_and_stay() {
    let mut app = test_app();
    for _ in 0..100 {
        app.update(Action::Tick);
    }
    assert_eq!(app.cards[0].reveal, Reveal::Shown);

    app.scroll = 100;
    app.update(Action::Tick);
    app.scroll = 0;
    app.update(Action::Tick);
    assert_eq!(app.cards[0].reveal, Reveal::Shown);
}

// ── Overlays and theme ──────────────────────────────────────────

#[test]
fn help_overlay_toggles() {
    let mut app = test_app();
    app.update(Action::ToggleHelp);
    assert!(app.show_help);
    app.update(Action::NavigateBack);
    assert!(!app.show_help);
}

#[test]
fn menu_ignores_page_scrolling() {
    let mut app = test_app();
    app.scroll = 9;
    app.update(Action::ToggleMenu);
    app.update(Action::PageDown);
    assert_eq!(app.scroll, 9);
}

#[test]
fn theme_cycles_between_dark_and_light() {
    let mut app = test_app();
    assert_eq!(app.theme_name, "dark");
    app.update(Action::CycleTheme);
    assert_eq!(app.theme_name, "light");
    app.update(Action::CycleTheme);
    assert_eq!(app.theme_name, "dark");
}

#[test]
fn quit_sets_flag() {
    let mut app = test_app();
    assert!(app.update(Action::Quit));
    assert!(app.should_quit);
}

// ── Page construction ───────────────────────────────────────────

#[test]
fn cards_cover_the_whole_registry() {
    let app = test_app();
    assert_eq!(app.cards.len(), 19);
    assert!(app.cards.iter().take(6).all(|c| matches!(
        c.kind,
        crate::model::page::CardKind::Feature
    )));
    assert!(app.cards.iter().skip(6).all(|c| matches!(
        c.kind,
        crate::model::page::CardKind::Post { .. }
    )));
}

#[test]
fn guide_count_stat_tracks_registry() {
    let app = test_app();
    let guides = app
        .counters
        .iter()
        .find(|c| c.label == "In-depth guides")
        .expect("guides counter");
    assert_eq!(guides.target, 19);
}
