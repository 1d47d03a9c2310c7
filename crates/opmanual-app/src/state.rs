//! Application state (Model in TEA pattern)

use opmanual_core::prelude::*;
use opmanual_core::{catalog, Section};

use crate::accordion::AccordionState;
use crate::config::Settings;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Landing screen with only the title and the reveal button
    #[default]
    Gate,

    /// Tabbed manual; there is no way back to the gate
    Manual,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub ui_mode: UiMode,
    pub phase: AppPhase,
    pub settings: Settings,

    /// Always a member of the catalog
    active_section: &'static Section,

    /// Rows of the active section
    pub accordion: AccordionState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let active_section = initial_section();
        Self {
            ui_mode: UiMode::Gate,
            phase: AppPhase::Running,
            settings,
            active_section,
            accordion: AccordionState::for_section(active_section),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn is_revealed(&self) -> bool {
        self.ui_mode == UiMode::Manual
    }

    /// Leave the gate. Calling this again has no effect.
    pub fn reveal(&mut self) {
        if self.is_revealed() {
            return;
        }
        info!("Manual revealed, active section '{}'", self.active_section.id);
        self.ui_mode = UiMode::Manual;
    }

    pub fn active_section(&self) -> &'static Section {
        self.active_section
    }

    pub fn active_section_id(&self) -> &'static str {
        self.active_section.id
    }

    pub fn active_index(&self) -> usize {
        catalog::section_index(self.active_section.id).unwrap_or(0)
    }

    /// Make `id` the active section
    ///
    /// Selecting the active section again changes nothing, so its rows keep
    /// their expanded state. Ids outside the catalog are ignored. Returns
    /// `true` if the active section changed.
    pub fn select_section(&mut self, id: &str) -> bool {
        if self.active_section.id == id {
            trace!("Section '{}' already active", id);
            return false;
        }

        match catalog::find_section(id) {
            Some(section) => {
                self.activate(section);
                true
            }
            None => {
                warn!("Ignoring unknown section id '{}'", id);
                false
            }
        }
    }

    /// Make the section at tab position `index` active
    pub fn select_section_by_index(&mut self, index: usize) -> bool {
        match catalog::sections().get(index) {
            Some(section) => self.select_section(section.id),
            None => {
                trace!("No section at index {}", index);
                false
            }
        }
    }

    pub fn next_section(&mut self) -> bool {
        let count = catalog::sections().len();
        self.select_section_by_index((self.active_index() + 1) % count)
    }

    pub fn previous_section(&mut self) -> bool {
        let count = catalog::sections().len();
        self.select_section_by_index((self.active_index() + count - 1) % count)
    }

    fn activate(&mut self, section: &'static Section) {
        debug!(
            "Active section '{}' -> '{}'",
            self.active_section.id, section.id
        );
        self.active_section = section;
        self.accordion = AccordionState::for_section(section);
    }
}

fn initial_section() -> &'static Section {
    catalog::find_section(catalog::DEFAULT_SECTION_ID).unwrap_or(&catalog::sections()[0])
}
