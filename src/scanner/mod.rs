//! Scan decoding and input gating

mod decoder;
mod event;
mod focus;

pub use decoder::{DecoderOptions, DecoderState, FeedOutcome, ScanDecoder, SCAN_PULSE};
pub use event::{InputEvent, SourceEvent};
pub use focus::{ControlRole, FocusClassification, FocusTracker};
