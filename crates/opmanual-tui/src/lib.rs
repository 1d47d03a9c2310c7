//! opmanual-tui - Terminal UI for the operational manual
//!
//! Renders the reveal gate and the tabbed manual with ratatui, polls
//! crossterm for keys and feeds them to opmanual-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
