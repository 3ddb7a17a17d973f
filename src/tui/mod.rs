//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` so the header core has no terminal dependency.

pub mod header;
pub mod input;
pub mod terminal_guard;
pub mod theme;

pub use header::HeaderWidget;
pub use input::{map_key_event, InputOutcome};
pub use terminal_guard::{
    exit_status, install_termination_signals, TerminalGuard, TerminalRestorer,
    TerminationSignal,
};
pub use theme::{parse_color, HeaderTheme};
