//! Expanded/collapsed state for the rows of the active section
//!
//! One flag per row, all starting collapsed. The whole state is rebuilt
//! whenever a different section becomes active, so rows never remember
//! their state across tab switches.

use opmanual_core::Section;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    expanded: Vec<bool>,
    /// Row that Enter/Space toggles; meaningless when there are no rows
    focused: usize,
}

impl AccordionState {
    /// Fresh state for the rows of `section`, all collapsed
    pub fn for_section(section: &Section) -> Self {
        Self {
            expanded: vec![false; section.item_count()],
            focused: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Whether the row at `index` is open; out-of-range rows are closed
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.iter().filter(|open| **open).count()
    }

    /// Flip one row, leaving its siblings untouched
    ///
    /// Returns the new state of the row, or `None` if `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let open = self.expanded.get_mut(index)?;
        *open = !*open;
        Some(*open)
    }

    pub fn focused(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.focused)
        }
    }

    pub fn focus_next(&mut self) {
        if self.focused + 1 < self.len() {
            self.focused += 1;
        }
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    pub fn focus_first(&mut self) {
        self.focused = 0;
    }

    pub fn focus_last(&mut self) {
        self.focused = self.len().saturating_sub(1);
    }
}
