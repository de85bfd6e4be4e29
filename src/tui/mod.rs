//! Terminal UI for interactive selection.
//!
//! Built on ratatui/crossterm. [`select_state`] holds the terminal-free
//! state machine; [`select_app`] draws it and performs its effects.

pub mod app;
pub mod feedback;
pub mod preview;
pub mod select_app;
pub mod select_state;
pub mod theme;
pub mod ui;

pub use app::{App, TuiApp};
pub use select_app::SelectApp;
pub use select_state::{Effect, Mode, SelectState};
pub use theme::current_theme;
