//! review-header: page header of a code-review UI.
//!
//! - kernel: headless state (search query binding, account status), store and services
//! - app: drives store effects through the service host
//! - tui: ratatui/crossterm frontend

pub mod app;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
