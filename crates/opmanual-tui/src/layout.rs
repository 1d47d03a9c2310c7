//! Screen layout definitions for the manual view
//!
//! Header, tab rows, section body, important note and the optional key
//! hint bar, top to bottom. The tab area grows when the tab labels wrap.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Note: top border + two wrapped text rows + bottom border
pub const NOTE_HEIGHT: u16 = 4;

/// Screen areas for the manual view
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub tabs: Rect,
    /// Active section body (glass container)
    pub body: Rect,
    pub note: Rect,
    /// Key hint row, if enabled
    pub hints: Option<Rect>,
}

/// Create the manual layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `tab_rows` - Rows needed by the wrapped tab labels
/// * `show_hints` - Reserve the bottom row for key hints
pub fn create(area: Rect, tab_rows: u16, show_hints: bool) -> ScreenAreas {
    let constraints = [
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(tab_rows),
        Constraint::Min(3),
        Constraint::Length(NOTE_HEIGHT),
        Constraint::Length(if show_hints { 1 } else { 0 }),
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        note: chunks[3],
        hints: show_hints.then_some(chunks[4]),
    }
}
