//! Scan segmentation state machine
//!
//! Turns a stream of keystrokes into discrete scan tokens. A hardware barcode
//! scanner behaves like a very fast typist: it emits a burst of characters
//! with sub-millisecond gaps and then goes silent. The decoder buffers
//! characters and treats a silence of `timeout` between keystrokes as the end
//! of a token; isolated human keystrokes never accumulate past the length
//! check and are silently dropped.
//!
//! The decoder lives on a single cooperative timeline: the owner calls
//! [`ScanDecoder::feed`] for each keystroke in arrival order and
//! [`ScanDecoder::tick`] from its poll loop to observe the flush deadline.
//! There is exactly one pending deadline at any time; each new character
//! replaces it.

use super::event::InputEvent;
use super::focus::FocusClassification;
use log::{debug, trace};
use std::time::{Duration, Instant};

/// How long `is_scanning` stays set after a completed scan.
pub const SCAN_PULSE: Duration = Duration::from_millis(50);

/// Tunable decoder behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Silence gap that ends a scan
    pub timeout: Duration,
    /// Minimum accepted token length in characters; shorter flushes are dropped
    pub min_length: usize,
    /// Ask the event source to suppress the default effect of buffered keystrokes
    pub prevent_default: bool,
    /// Master on/off switch
    pub enabled: bool,
    /// Suppress decoding while a text-entry control holds focus
    pub pause_on_input_focus: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(50),
            min_length: 4,
            prevent_default: true,
            enabled: true,
            pause_on_input_focus: true,
        }
    }
}

/// What the decoder did with a keystroke handed to [`ScanDecoder::feed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    /// Buffered; the event source must suppress the keystroke's default effect
    Consumed,
    /// Buffered; the keystroke's default effect may proceed
    Accepted,
    /// Not buffered (decoder disabled, focus-gated, or not a literal character)
    Ignored,
}

impl FeedOutcome {
    pub fn is_buffered(&self) -> bool {
        matches!(self, Self::Consumed | Self::Accepted)
    }

    pub fn suppresses_default(&self) -> bool {
        matches!(self, Self::Consumed)
    }
}

/// Observable decoder state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    /// Empty buffer, no pending flush
    Idle,
    /// Buffer non-empty, flush deadline armed
    Accumulating,
    /// Input suppressed by the enable switch or by text-entry focus
    Gated,
}

/// The scan decoder.
///
/// Owns the character buffer and the single flush deadline. All mutation
/// happens through `feed`, `tick`, and the gating setters; there is no
/// background timer, so dropping the decoder can never leave a stale flush.
pub struct ScanDecoder {
    options: DecoderOptions,
    buffer: String,
    flush_deadline: Option<Instant>,
    current_token: Option<String>,
    scanning_until: Option<Instant>,
    focus: FocusClassification,
    on_scan: Option<Box<dyn FnMut(&str)>>,
}

impl ScanDecoder {
    pub fn new(options: DecoderOptions) -> Self {
        Self {
            options,
            buffer: String::new(),
            flush_deadline: None,
            current_token: None,
            scanning_until: None,
            focus: FocusClassification::None,
            on_scan: None,
        }
    }

    /// Register the callback fired once per completed scan
    pub fn set_on_scan<F>(&mut self, callback: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.on_scan = Some(Box::new(callback));
    }

    /// Handle one keystroke.
    ///
    /// Literal characters are appended to the buffer and re-arm the flush
    /// deadline at `event.timestamp + timeout`, replacing any previous
    /// deadline. Control keys and keystrokes arriving while gated are ignored.
    pub fn feed(&mut self, event: &InputEvent) -> FeedOutcome {
        if self.is_gated() {
            return FeedOutcome::Ignored;
        }
        let Some(character) = event.character else {
            return FeedOutcome::Ignored;
        };

        self.buffer.push(character);
        self.flush_deadline = Some(event.timestamp + self.options.timeout);

        if self.options.prevent_default {
            FeedOutcome::Consumed
        } else {
            FeedOutcome::Accepted
        }
    }

    /// Advance the decoder's timeline to `now`.
    ///
    /// Expires the scanning pulse and, once the flush deadline has passed
    /// with no further character, flushes the buffer. Returns the token when
    /// this tick completed a valid scan.
    pub fn tick(&mut self, now: Instant) -> Option<String> {
        if let Some(until) = self.scanning_until {
            if now >= until {
                self.scanning_until = None;
            }
        }

        match self.flush_deadline {
            Some(deadline) if now >= deadline => self.flush(now),
            _ => None,
        }
    }

    /// End-of-scan: validate the buffer and emit it as a token.
    fn flush(&mut self, now: Instant) -> Option<String> {
        self.flush_deadline = None;
        let candidate = std::mem::take(&mut self.buffer);

        if candidate.chars().count() < self.options.min_length {
            if !candidate.is_empty() {
                trace!(
                    "discarding {}-char fragment below minimum length {}",
                    candidate.chars().count(),
                    self.options.min_length
                );
            }
            return None;
        }

        debug!("scan completed: {} characters", candidate.chars().count());
        self.current_token = Some(candidate.clone());
        self.scanning_until = Some(now + SCAN_PULSE);
        if let Some(callback) = self.on_scan.as_mut() {
            callback(&candidate);
        }
        Some(candidate)
    }

    /// Clear the buffer, the current token, the pending flush, and the
    /// scanning pulse. Idempotent.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.flush_deadline = None;
        self.current_token = None;
        self.scanning_until = None;
    }

    /// Master switch. Disabling discards any partial buffer and pending
    /// flush; re-enabling resumes from empty.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
        if !enabled {
            debug!("decoder disabled");
            self.reset();
        }
    }

    /// Record the latest focus classification from the tracker.
    ///
    /// When `pause_on_input_focus` is set and a text-entry control takes
    /// focus, decoding is suppressed exactly as if the decoder were disabled:
    /// state is reset and keystrokes are ignored until focus moves away.
    /// Focus moving to a non-text-entry control does not touch the buffer.
    pub fn set_focus(&mut self, classification: FocusClassification) {
        self.focus = classification;
        if self.options.pause_on_input_focus && classification.is_text_entry() {
            debug!("decoder paused: text-entry control focused");
            self.reset();
        }
    }

    /// Replace the options, atomically tearing down in-flight state so the
    /// new configuration never observes a buffer or deadline armed under the
    /// old one. The stored focus classification is re-evaluated under the new
    /// flags on the next keystroke.
    pub fn set_options(&mut self, options: DecoderOptions) {
        self.reset();
        self.options = options;
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    pub fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    /// The most recently completed scan, until the next reset
    pub fn current_token(&self) -> Option<&str> {
        self.current_token.as_deref()
    }

    /// True for a short window after each completed scan
    pub fn is_scanning(&self) -> bool {
        self.scanning_until.is_some()
    }

    pub fn state(&self) -> DecoderState {
        if self.is_gated() {
            DecoderState::Gated
        } else if self.flush_deadline.is_some() {
            DecoderState::Accumulating
        } else {
            DecoderState::Idle
        }
    }

    fn is_gated(&self) -> bool {
        !self.options.enabled
            || (self.options.pause_on_input_focus && self.focus.is_text_entry())
    }
}
