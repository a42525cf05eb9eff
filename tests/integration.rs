//! Integration tests for Scanwedge
//!
//! These tests exercise the full pipeline: boundary events through the App
//! into the decoder and focus tracker, and back out as scan history.

use scanwedge::config::Config;
use scanwedge::scanner::{DecoderState, InputEvent, SourceEvent, SCAN_PULSE};
use scanwedge::ui::{App, AppState, AppView, FocusTarget};
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn key(c: char, at: Instant) -> SourceEvent {
    SourceEvent::Key(InputEvent::printable(c, at))
}

fn control_key(at: Instant) -> SourceEvent {
    SourceEvent::Key(InputEvent::control(at))
}

/// Feed a burst of characters starting at `start`, `gap` apart
fn feed_str(app: &mut App, text: &str, start: Instant, gap: Duration) {
    for (i, c) in text.chars().enumerate() {
        app.handle_source_event(key(c, start + gap * i as u32));
    }
}

fn tokens(app: &App) -> Vec<&str> {
    app.history.iter().map(|r| r.token.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Scan segmentation
// ---------------------------------------------------------------------------

#[test]
fn scanner_burst_decodes_into_history() {
    let mut app = App::default();
    let base = Instant::now();

    // A, B, C, D at 10ms intervals, then 60ms of silence
    feed_str(&mut app, "ABCD", base, ms(10));
    app.tick(base + ms(90));

    assert_eq!(tokens(&app), vec!["ABCD"]);
    assert_eq!(app.decoder.current_token(), Some("ABCD"));
    assert!(app.decoder.is_scanning());

    // The pulse clears itself roughly 50ms later
    app.tick(base + ms(90) + SCAN_PULSE);
    assert!(!app.decoder.is_scanning());
    assert_eq!(app.decoder.current_token(), Some("ABCD"));
}

#[test]
fn short_burst_never_reaches_history() {
    let mut app = App::default();
    let base = Instant::now();

    feed_str(&mut app, "AB", base, ms(10));
    app.tick(base + ms(100));

    assert!(app.history.is_empty());
    assert_eq!(app.decoder.current_token(), None);
    assert_eq!(app.decoder.state(), DecoderState::Idle);
}

#[test]
fn silence_gap_splits_two_scans() {
    let mut app = App::default();
    let base = Instant::now();

    feed_str(&mut app, "1111", base, ms(5));
    app.tick(base + ms(100));
    feed_str(&mut app, "2222", base + ms(200), ms(5));
    app.tick(base + ms(300));

    assert_eq!(tokens(&app), vec!["1111", "2222"]);
}

#[test]
fn slow_human_typing_is_dropped() {
    let mut app = App::default();
    let base = Instant::now();

    // One keystroke every 200ms; each flushes alone and fails the length check
    for (i, c) in "hello".chars().enumerate() {
        let at = base + ms(200) * i as u32;
        app.handle_source_event(key(c, at));
        app.tick(at + ms(100));
    }

    assert!(app.history.is_empty());
}

#[test]
fn control_keys_never_buffer() {
    let mut app = App::default();
    let base = Instant::now();

    app.handle_source_event(control_key(base));
    app.handle_source_event(key('A', base + ms(5)));
    app.handle_source_event(control_key(base + ms(10)));
    app.handle_source_event(key('B', base + ms(15)));
    app.tick(base + ms(200));

    // Only the two literal characters were buffered; too short, dropped
    assert!(app.history.is_empty());
    assert_eq!(app.total_keys, 4);
}

// ---------------------------------------------------------------------------
// Gating: enable switch
// ---------------------------------------------------------------------------

#[test]
fn disabling_discards_partial_and_suppresses_tokens() {
    let mut app = App::default();
    let base = Instant::now();

    feed_str(&mut app, "AB", base, ms(5));
    app.toggle_enabled();
    assert!(!app.decoder.is_enabled());
    assert_eq!(app.decoder.state(), DecoderState::Gated);

    // Scanner keeps firing while disabled: nothing comes out
    feed_str(&mut app, "CDEF", base + ms(50), ms(5));
    app.tick(base + ms(300));
    assert!(app.history.is_empty());

    // Re-enabling resumes from empty
    app.toggle_enabled();
    feed_str(&mut app, "WXYZ", base + ms(400), ms(5));
    app.tick(base + ms(500));
    assert_eq!(tokens(&app), vec!["WXYZ"]);
}

#[test]
fn disabled_decoder_lets_keystrokes_pass_through() {
    let mut app = App::default();
    let base = Instant::now();

    app.toggle_enabled();
    feed_str(&mut app, "AB", base, ms(5));

    // Not consumed, so the default effect applies (echo on the scan pane)
    assert_eq!(app.echo, "AB");
}

// ---------------------------------------------------------------------------
// Gating: focus
// ---------------------------------------------------------------------------

#[test]
fn notes_focus_pauses_decoder_and_routes_text() {
    let mut app = App::default();
    let base = Instant::now();

    app.cycle_focus();
    assert_eq!(app.focus_target, FocusTarget::Notes);
    assert_eq!(app.decoder.state(), DecoderState::Gated);

    // Typed characters land in the field instead of the scan buffer
    feed_str(&mut app, "milk", base, ms(200));
    app.tick(base + ms(800));
    assert_eq!(app.notes, "milk");
    assert!(app.history.is_empty());

    // Moving focus away re-enables scanning from empty state
    app.cycle_focus();
    feed_str(&mut app, "ABCD", base + ms(1000), ms(5));
    app.tick(base + ms(1100));
    assert_eq!(tokens(&app), vec!["ABCD"]);
    assert_eq!(app.notes, "milk");
}

#[test]
fn focus_steal_mid_sequence_discards_partial() {
    let mut app = App::default();
    let base = Instant::now();

    // Two characters arrive, then the user clicks into the notes field
    feed_str(&mut app, "AB", base, ms(10));
    app.cycle_focus();
    app.cycle_focus();

    // "C", "D" alone must not complete the earlier partial token
    feed_str(&mut app, "CD", base + ms(40), ms(10));
    app.tick(base + ms(300));
    assert!(app.history.is_empty());
}

#[test]
fn terminal_focus_loss_does_not_cancel_partial() {
    let mut app = App::default();
    let base = Instant::now();

    feed_str(&mut app, "AB", base, ms(5));
    app.handle_source_event(SourceEvent::FocusLost);

    // Nothing meaningful holds focus: that is not text entry, so the narrow
    // gating leaves the buffer alone
    feed_str(&mut app, "CD", base + ms(15), ms(5));
    app.tick(base + ms(100));
    assert_eq!(tokens(&app), vec!["ABCD"]);

    app.handle_source_event(SourceEvent::FocusGained);
    assert_eq!(app.decoder.state(), DecoderState::Idle);
}

// ---------------------------------------------------------------------------
// preventDefault
// ---------------------------------------------------------------------------

#[test]
fn consumed_keystrokes_do_not_echo() {
    let mut app = App::default();
    let base = Instant::now();

    feed_str(&mut app, "ABCD", base, ms(5));
    assert_eq!(app.echo, "");
}

#[test]
fn passthrough_mode_echoes_and_still_decodes() {
    let mut config = Config::default();
    config.decoder.prevent_default = false;
    let mut app = App::new(config);
    let base = Instant::now();

    feed_str(&mut app, "ABCD", base, ms(5));
    app.tick(base + ms(100));

    assert_eq!(app.echo, "ABCD");
    assert_eq!(tokens(&app), vec!["ABCD"]);
}

// ---------------------------------------------------------------------------
// Reset and state management
// ---------------------------------------------------------------------------

#[test]
fn reset_is_idempotent() {
    let mut app = App::default();
    let base = Instant::now();

    feed_str(&mut app, "ABCD", base, ms(5));
    app.tick(base + ms(100));
    assert_eq!(app.decoder.current_token(), Some("ABCD"));

    app.reset_decoder();
    assert_eq!(app.decoder.current_token(), None);
    assert_eq!(app.decoder.state(), DecoderState::Idle);

    // Resetting an already-idle decoder changes nothing observable
    app.reset_decoder();
    assert_eq!(app.decoder.current_token(), None);
    assert_eq!(app.decoder.state(), DecoderState::Idle);
    assert!(!app.decoder.is_scanning());
}

#[test]
fn quit_state() {
    let mut app = App::default();
    app.quit();
    assert_eq!(app.state, AppState::Quitting);
}

#[test]
fn status_message_lifecycle() {
    let mut app = App::default();

    // Initially no status
    assert!(app.get_status().is_none());

    app.set_status("Test message".to_string());
    assert_eq!(app.get_status(), Some("Test message"));

    // Status should still be visible (within 3 seconds)
    assert!(app.status_message.is_some());
}

#[test]
fn toggle_help_switches_view() {
    let mut app = App::default();
    assert_eq!(app.view, AppView::Monitor);

    app.toggle_help();
    assert_eq!(app.view, AppView::Help);

    app.toggle_help();
    assert_eq!(app.view, AppView::Monitor);
}

// ---------------------------------------------------------------------------
// Configuration integration
// ---------------------------------------------------------------------------

#[test]
fn custom_config_applied_to_decoder() {
    let mut config = Config::default();
    config.decoder.timeout_ms = 20;
    config.decoder.min_length = 2;
    let mut app = App::new(config);
    let base = Instant::now();

    // Two characters satisfy the lowered minimum, and the shorter gap flushes
    feed_str(&mut app, "AB", base, ms(5));
    app.tick(base + ms(25));
    assert_eq!(tokens(&app), vec!["AB"]);
}

#[test]
fn history_limit_is_enforced() {
    let mut config = Config::default();
    config.ui.history_limit = 3;
    let mut app = App::new(config);
    let base = Instant::now();

    for i in 0..5u32 {
        let start = base + ms(200) * i;
        feed_str(&mut app, &format!("SCAN{}", i), start, ms(5));
        app.tick(start + ms(100));
    }

    assert_eq!(tokens(&app), vec!["SCAN2", "SCAN3", "SCAN4"]);
}
