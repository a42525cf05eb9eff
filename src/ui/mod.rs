//! Terminal User Interface components

mod app;
pub mod theme;
mod widgets;

pub use app::{App, AppState, AppView, FocusTarget, ScanRecord};
pub use theme::ThemeColors;
pub use widgets::*;
