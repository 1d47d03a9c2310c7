//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};
use opmanual_core::prelude::*;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Reveal => {
            state.reveal();
            UpdateResult::none()
        }

        // Everything below only exists once the manual is showing
        msg if !state.is_revealed() => {
            trace!("Ignoring {:?} while the manual is hidden", msg);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Tabs
        // ─────────────────────────────────────────────────────────
        Message::SelectSection { id } => {
            state.select_section(&id);
            UpdateResult::none()
        }

        Message::SelectSectionByIndex(index) => {
            state.select_section_by_index(index);
            UpdateResult::none()
        }

        Message::NextSection => {
            state.next_section();
            UpdateResult::none()
        }

        Message::PreviousSection => {
            state.previous_section();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Accordion rows
        // ─────────────────────────────────────────────────────────
        Message::FocusNextItem => {
            state.accordion.focus_next();
            UpdateResult::none()
        }

        Message::FocusPreviousItem => {
            state.accordion.focus_previous();
            UpdateResult::none()
        }

        Message::FocusFirstItem => {
            state.accordion.focus_first();
            UpdateResult::none()
        }

        Message::FocusLastItem => {
            state.accordion.focus_last();
            UpdateResult::none()
        }

        Message::ToggleFocusedItem => match state.accordion.focused() {
            Some(index) => UpdateResult::message(Message::ToggleItem(index)),
            None => UpdateResult::none(),
        },

        Message::ToggleItem(index) => {
            match state.accordion.toggle(index) {
                Some(open) => debug!(
                    "Row {} of '{}' {}",
                    index,
                    state.active_section_id(),
                    if open { "expanded" } else { "collapsed" }
                ),
                None => warn!(
                    "No row {} in section '{}'",
                    index,
                    state.active_section_id()
                ),
            }
            UpdateResult::none()
        }
    }
}
