//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event from the poll timeout
    Tick,

    /// Exit the application (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Gate Messages
    // ─────────────────────────────────────────────────────────
    /// Leave the gate screen and show the manual (one-way)
    Reveal,

    // ─────────────────────────────────────────────────────────
    // Tab Messages
    // ─────────────────────────────────────────────────────────
    /// Activate the section with this id (a click on its tab)
    SelectSection { id: String },
    /// Activate the section at this tab position
    SelectSectionByIndex(usize),
    /// Activate the next tab, wrapping to the first
    NextSection,
    /// Activate the previous tab, wrapping to the last
    PreviousSection,

    // ─────────────────────────────────────────────────────────
    // Accordion Messages
    // ─────────────────────────────────────────────────────────
    /// Move keyboard focus to the next row
    FocusNextItem,
    /// Move keyboard focus to the previous row
    FocusPreviousItem,
    FocusFirstItem,
    FocusLastItem,
    /// Flip the expanded flag of the row at this index
    ToggleItem(usize),
    /// Flip the expanded flag of the focused row
    ToggleFocusedItem,
}
