//! Main application state and logic

use crate::config::Config;
use crate::scanner::{
    ControlRole, FocusTracker, ScanDecoder, SourceEvent,
};
use chrono::{DateTime, Local};
use std::time::Instant;

/// Current view/tab in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Monitor,
    Help,
}

impl AppView {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Monitor => "Monitor",
            Self::Help => "Help",
        }
    }

    pub fn all() -> &'static [AppView] {
        &[Self::Monitor, Self::Help]
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Monitor => 0,
            Self::Help => 1,
        }
    }
}

/// Application running state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Running,
    Quitting,
}

/// Which demo control currently holds focus inside the monitor view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The scan pane; keystrokes are candidate scan input
    ScanPane,
    /// The notes field; a real text-entry control that triggers gating
    Notes,
}

impl FocusTarget {
    pub fn role(&self) -> ControlRole {
        match self {
            Self::ScanPane => ControlRole::Pane,
            Self::Notes => ControlRole::TextEntry,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ScanPane => "Scan pane",
            Self::Notes => "Notes",
        }
    }
}

/// One completed scan, as shown in the history panel
#[derive(Debug, Clone)]
pub struct ScanRecord {
    pub token: String,
    pub at: DateTime<Local>,
}

/// Keystrokes echoed on the passthrough line are capped at this many chars
const ECHO_LIMIT: usize = 48;

/// Main application
pub struct App {
    /// Current view
    pub view: AppView,
    /// Application state
    pub state: AppState,
    /// Configuration
    pub config: Config,
    /// The scan decoder
    pub decoder: ScanDecoder,
    /// Focus tracker feeding the decoder's gating input
    pub tracker: FocusTracker,
    /// Which demo control is focused
    pub focus_target: FocusTarget,
    /// Whether the terminal window itself holds focus
    terminal_focused: bool,
    /// Completed scans, oldest first
    pub history: Vec<ScanRecord>,
    /// Contents of the demo notes field
    pub notes: String,
    /// Recent keystrokes whose default effect was not suppressed
    pub echo: String,
    /// Total keystrokes seen
    pub total_keys: u64,
    /// Application start time
    pub start_time: Instant,
    /// Last status message
    pub status_message: Option<String>,
    /// Status message timestamp
    pub status_time: Option<Instant>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut app = Self {
            view: AppView::Monitor,
            state: AppState::Running,
            decoder: ScanDecoder::new(config.decoder.options()),
            config,
            tracker: FocusTracker::new(),
            focus_target: FocusTarget::ScanPane,
            terminal_focused: true,
            history: Vec::new(),
            notes: String::new(),
            echo: String::new(),
            total_keys: 0,
            start_time: Instant::now(),
            status_message: None,
            status_time: None,
        };
        app.sync_focus();
        app
    }

    /// Handle one boundary event from the terminal source
    pub fn handle_source_event(&mut self, event: SourceEvent) {
        match event {
            SourceEvent::Key(input) => {
                self.total_keys += 1;
                let outcome = self.decoder.feed(&input);
                if let Some(c) = input.character {
                    if !outcome.suppresses_default() {
                        self.apply_default_effect(c);
                    }
                }
            }
            SourceEvent::FocusGained => {
                self.terminal_focused = true;
                self.sync_focus();
            }
            SourceEvent::FocusLost => {
                self.terminal_focused = false;
                self.sync_focus();
            }
        }
    }

    /// Advance the decoder's timeline; record any token it completes
    pub fn tick(&mut self, now: Instant) {
        if let Some(token) = self.decoder.tick(now) {
            self.history.push(ScanRecord {
                token,
                at: Local::now(),
            });
            if self.history.len() > self.config.ui.history_limit {
                self.history.remove(0);
            }
        }
    }

    /// What a keystroke does when the decoder lets it through
    fn apply_default_effect(&mut self, c: char) {
        match self.focus_target {
            FocusTarget::Notes => self.notes.push(c),
            FocusTarget::ScanPane => {
                self.echo.push(c);
                while self.echo.chars().count() > ECHO_LIMIT {
                    self.echo.remove(0);
                }
            }
        }
    }

    /// Move focus to the other demo control, firing the release/acquire pair
    pub fn cycle_focus(&mut self) {
        self.focus_target = match self.focus_target {
            FocusTarget::ScanPane => FocusTarget::Notes,
            FocusTarget::Notes => FocusTarget::ScanPane,
        };
        self.tracker.focus_lost();
        self.sync_focus();
        self.set_status(format!("Focus: {}", self.focus_target.name()));
    }

    /// Push the tracker's view of focus into the decoder
    fn sync_focus(&mut self) {
        if self.terminal_focused {
            self.tracker.focus_gained(self.focus_target.role());
        } else {
            self.tracker.focus_lost();
        }
        self.decoder.set_focus(self.tracker.classification());
    }

    /// Delete the last character of the notes field
    pub fn notes_backspace(&mut self) {
        self.notes.pop();
    }

    /// Toggle the decoder's master switch
    pub fn toggle_enabled(&mut self) {
        let enabled = !self.decoder.is_enabled();
        self.decoder.set_enabled(enabled);
        self.set_status(if enabled {
            "Decoder enabled".to_string()
        } else {
            "Decoder disabled".to_string()
        });
    }

    /// Force the decoder back to idle
    pub fn reset_decoder(&mut self) {
        self.decoder.reset();
        self.set_status("Decoder reset".to_string());
    }

    /// Clear the scan history and the passthrough echo
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.echo.clear();
        self.set_status("History cleared".to_string());
    }

    /// Toggle between the monitor and help views
    pub fn toggle_help(&mut self) {
        self.view = match self.view {
            AppView::Monitor => AppView::Help,
            AppView::Help => AppView::Monitor,
        };
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.state = AppState::Quitting;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_time = Some(Instant::now());
    }

    /// Get status message if still valid (within 3 seconds)
    pub fn get_status(&self) -> Option<&str> {
        match (&self.status_message, self.status_time) {
            (Some(msg), Some(time)) if time.elapsed().as_secs() < 3 => Some(msg),
            _ => None,
        }
    }

    /// The most recent scan, if any
    pub fn last_scan(&self) -> Option<&ScanRecord> {
        self.history.last()
    }

    /// Get elapsed time formatted
    pub fn elapsed_formatted(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{:02}:{:02}", mins, secs)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
