//! Input events and the terminal event source boundary

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Instant;

/// A single keystroke as seen by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// The literal character carried by the keystroke, or `None` for control
    /// keys (modifiers, navigation, function keys).
    pub character: Option<char>,
    /// When the keystroke arrived
    pub timestamp: Instant,
}

impl InputEvent {
    /// A keystroke carrying a literal character
    pub fn printable(character: char, timestamp: Instant) -> Self {
        Self {
            character: Some(character),
            timestamp,
        }
    }

    /// A non-printable keystroke
    pub fn control(timestamp: Instant) -> Self {
        Self {
            character: None,
            timestamp,
        }
    }

    pub fn is_control(&self) -> bool {
        self.character.is_none()
    }
}

/// Boundary event produced by the terminal event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEvent {
    /// A key went down
    Key(InputEvent),
    /// The terminal window acquired input focus
    FocusGained,
    /// The terminal window released input focus
    FocusLost,
}

/// Modifiers that turn a character key into a command rather than text input.
/// Shift stays out of this set: scanners emit shifted characters.
const COMMAND_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SUPER);

impl SourceEvent {
    /// Map a raw terminal event onto the boundary.
    ///
    /// Only key-down events are forwarded (no releases, no repeats). Returns
    /// `None` for events the decoder has no use for.
    pub fn from_crossterm(event: &Event, now: Instant) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let input = match key.code {
                    KeyCode::Char(c) if !key.modifiers.intersects(COMMAND_MODIFIERS) => {
                        InputEvent::printable(c, now)
                    }
                    _ => InputEvent::control(now),
                };
                Some(SourceEvent::Key(input))
            }
            Event::FocusGained => Some(SourceEvent::FocusGained),
            Event::FocusLost => Some(SourceEvent::FocusLost),
            _ => None,
        }
    }
}
