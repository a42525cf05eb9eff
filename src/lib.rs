//! Scanwedge - keyboard-wedge barcode scan decoder
//!
//! Decodes a live keystroke stream into discrete scan tokens, telling a
//! hardware barcode scanner's rapid character bursts apart from human typing
//! by the silence gap between keystrokes, and gating itself off while a
//! text-entry control holds focus.

pub mod config;
pub mod scanner;
pub mod ui;

pub use config::Config;
pub use scanner::{FeedOutcome, InputEvent, ScanDecoder};
