//! opmanual-app - Application state and view-state transitions
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! manual viewer: the reveal gate, the active tab and the accordion rows of
//! the active section. It also owns configuration loading and OS signal
//! handling. Nothing here depends on the terminal library.

pub mod accordion;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;

// Re-export primary types
pub use accordion::AccordionState;
pub use handler::{process_message, update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, UiMode};
