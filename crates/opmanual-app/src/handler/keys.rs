//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Gate => handle_key_gate(key),
        UiMode::Manual => handle_key_manual(key),
    }
}

/// Handle key events on the gate screen
fn handle_key_gate(key: InputKey) -> Option<Message> {
    match key {
        // The reveal button is the only control
        InputKey::Enter | InputKey::Char(' ') => Some(Message::Reveal),

        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events in the tabbed manual
fn handle_key_manual(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Tabs
        // ─────────────────────────────────────────────────────────
        InputKey::Tab | InputKey::Right | InputKey::Char('l') => Some(Message::NextSection),
        InputKey::BackTab | InputKey::Left | InputKey::Char('h') => Some(Message::PreviousSection),

        // Number keys 1-9 select a tab by position
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(Message::SelectSectionByIndex(index))
        }

        // ─────────────────────────────────────────────────────────
        // Accordion rows
        // ─────────────────────────────────────────────────────────
        InputKey::Down | InputKey::Char('j') => Some(Message::FocusNextItem),
        InputKey::Up | InputKey::Char('k') => Some(Message::FocusPreviousItem),
        InputKey::Home => Some(Message::FocusFirstItem),
        InputKey::End => Some(Message::FocusLastItem),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleFocusedItem),

        _ => None,
    }
}
