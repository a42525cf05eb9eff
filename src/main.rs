//! Scanwedge - keyboard-wedge scan monitor
//!
//! Wires the terminal event source into the scan decoder and renders the
//! live decoder state, scan log, and a focusable notes field.

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode as CtKeyCode,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::{io::stdout, time::Instant};

use scanwedge::{
    config::Config,
    scanner::SourceEvent,
    ui::{
        App, AppState, AppView, DecoderPanel, FocusTarget, HelpPanel, NotesField, ScanLogPanel,
        StatusBar, TabBar, ThemeColors,
    },
};

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::load().unwrap_or_default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let colors = ThemeColors::from_theme(config.ui.theme);
    let tick_rate = config.refresh_interval();
    let mut app = App::new(config);

    loop {
        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Tab bar
                    Constraint::Length(7), // Decoder panel
                    Constraint::Length(3), // Notes field
                    Constraint::Min(8),    // Scan log
                    Constraint::Length(1), // Status bar
                ])
                .split(size);

            let tab_names: Vec<&str> = AppView::all().iter().map(|v| v.name()).collect();
            let tab_bar = TabBar::new(&tab_names, app.view.index());
            frame.render_widget(tab_bar, chunks[0]);

            match app.view {
                AppView::Help => {
                    let help_area = chunks[1].union(chunks[2]).union(chunks[3]);
                    frame.render_widget(HelpPanel, help_area);
                }
                AppView::Monitor => {
                    let panel = DecoderPanel::new(
                        &app.decoder,
                        app.tracker.classification(),
                        &app.echo,
                        colors,
                    );
                    frame.render_widget(panel, chunks[1]);

                    let notes = NotesField::new(
                        &app.notes,
                        app.focus_target == FocusTarget::Notes,
                        colors,
                    );
                    frame.render_widget(notes, chunks[2]);

                    let log = ScanLogPanel::new(&app.history, colors);
                    frame.render_widget(log, chunks[3]);
                }
            }

            let state_str = if !app.decoder.is_enabled() {
                "DISABLED"
            } else {
                match app.state {
                    AppState::Running => "RUNNING",
                    AppState::Quitting => "QUITTING",
                }
            };
            let elapsed = app.elapsed_formatted();
            let status = StatusBar::new(
                state_str,
                app.focus_target.name(),
                &elapsed,
                app.total_keys,
            )
            .message(app.get_status());
            frame.render_widget(status, chunks[4]);
        })?;

        // Handle terminal events: UI controls first, everything else is
        // forwarded across the event source boundary
        if event::poll(tick_rate)? {
            let raw = event::read()?;
            match &raw {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    CtKeyCode::Esc => app.quit(),
                    CtKeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit()
                    }
                    CtKeyCode::Tab => app.cycle_focus(),
                    CtKeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.toggle_enabled()
                    }
                    CtKeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.reset_decoder()
                    }
                    CtKeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.clear_history()
                    }
                    CtKeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.toggle_help()
                    }
                    CtKeyCode::F(1) => app.toggle_help(),
                    CtKeyCode::Backspace if app.focus_target == FocusTarget::Notes => {
                        app.notes_backspace()
                    }
                    _ => {
                        if let Some(source_event) =
                            SourceEvent::from_crossterm(&raw, Instant::now())
                        {
                            app.handle_source_event(source_event);
                        }
                    }
                },
                _ => {
                    if let Some(source_event) = SourceEvent::from_crossterm(&raw, Instant::now())
                    {
                        app.handle_source_event(source_event);
                    }
                }
            }
        }

        // Observe the flush deadline and scanning pulse
        app.tick(Instant::now());

        if app.state == AppState::Quitting {
            break;
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    println!("\nScanwedge session complete.");
    println!("Keystrokes seen: {}", app.total_keys);
    println!("Scans decoded: {}", app.history.len());
    println!("Session duration: {}", app.elapsed_formatted());

    Ok(())
}
