//! Focus tracking for input gating
//!
//! Reports the semantic classification of whichever UI control currently
//! holds input focus. The tracker is purely reactive: the event source pushes
//! focus-gained/focus-lost transitions into it and consumers read the latest
//! classification back out. Nothing focused is a valid steady state.

/// Semantic role of a focusable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRole {
    /// Free-text editing control (input field, text area)
    TextEntry,
    /// Activatable control that does not accept text (button, link)
    Button,
    /// Non-editing container or display surface
    Pane,
}

impl ControlRole {
    /// Whether a keystroke landing on this control would insert text
    pub fn accepts_text(&self) -> bool {
        matches!(self, Self::TextEntry)
    }
}

/// Classification of the currently focused control, as seen by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusClassification {
    /// A text-entry-capable control holds focus
    TextEntry,
    /// Something holds focus, but it does not accept text
    Other,
    /// No meaningful control holds focus
    #[default]
    None,
}

impl FocusClassification {
    pub fn is_text_entry(&self) -> bool {
        matches!(self, Self::TextEntry)
    }
}

/// Tracks which control holds input focus.
///
/// Recomputes its classification on every transition; keeps no history.
#[derive(Debug, Clone, Default)]
pub struct FocusTracker {
    current: Option<ControlRole>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A control acquired focus
    pub fn focus_gained(&mut self, role: ControlRole) {
        self.current = Some(role);
    }

    /// Focus returned to the root/background (no meaningful control focused)
    pub fn focus_lost(&mut self) {
        self.current = None;
    }

    /// Role of the focused control, if any
    pub fn focused_role(&self) -> Option<ControlRole> {
        self.current
    }

    /// Latest classification of the focused control
    pub fn classification(&self) -> FocusClassification {
        match self.current {
            Some(role) if role.accepts_text() => FocusClassification::TextEntry,
            Some(_) => FocusClassification::Other,
            None => FocusClassification::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_none() {
        let tracker = FocusTracker::new();
        assert_eq!(tracker.focused_role(), None);
        assert_eq!(tracker.classification(), FocusClassification::None);
    }

    #[test]
    fn text_entry_classifies_as_text_entry() {
        let mut tracker = FocusTracker::new();
        tracker.focus_gained(ControlRole::TextEntry);
        assert_eq!(tracker.classification(), FocusClassification::TextEntry);
        assert!(tracker.classification().is_text_entry());
    }

    #[test]
    fn non_text_roles_classify_as_other() {
        let mut tracker = FocusTracker::new();

        tracker.focus_gained(ControlRole::Button);
        assert_eq!(tracker.classification(), FocusClassification::Other);

        tracker.focus_gained(ControlRole::Pane);
        assert_eq!(tracker.classification(), FocusClassification::Other);
    }

    #[test]
    fn focus_lost_returns_to_none() {
        let mut tracker = FocusTracker::new();
        tracker.focus_gained(ControlRole::TextEntry);
        tracker.focus_lost();
        assert_eq!(tracker.classification(), FocusClassification::None);
        assert_eq!(tracker.focused_role(), None);
    }

    #[test]
    fn transitions_replace_previous_role() {
        let mut tracker = FocusTracker::new();
        tracker.focus_gained(ControlRole::Pane);
        tracker.focus_gained(ControlRole::TextEntry);
        assert_eq!(tracker.focused_role(), Some(ControlRole::TextEntry));
        assert_eq!(tracker.classification(), FocusClassification::TextEntry);
    }

    #[test]
    fn accepts_text_only_for_text_entry() {
        assert!(ControlRole::TextEntry.accepts_text());
        assert!(!ControlRole::Button.accepts_text());
        assert!(!ControlRole::Pane.accepts_text());
    }
}
