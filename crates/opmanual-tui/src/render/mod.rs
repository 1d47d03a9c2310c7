//! Main render/view function (View in TEA pattern)
//!
//! Also resolves mouse clicks against the same geometry the last frame was
//! drawn with.


use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use opmanual_app::{AppState, Message, UiMode};
use opmanual_core::sections;

use crate::layout::ScreenAreas;
use crate::theme::{icons::IconSet, palette};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: scrolling is derived from the focused row
/// on every frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::CARD_BG));
    frame.render_widget(bg_block, area);

    match state.ui_mode {
        UiMode::Gate => frame.render_widget(gate(state), area),
        UiMode::Manual => render_manual(frame, state, area),
    }
}

/// Message for a left click at `(column, row)` on a frame of size `area`
pub fn click_target(state: &AppState, area: Rect, column: u16, row: u16) -> Option<Message> {
    match state.ui_mode {
        UiMode::Gate => gate(state)
            .hits_button(area, column, row)
            .then_some(Message::Reveal),
        UiMode::Manual => {
            let (tabs, areas) = manual_layout(state, area);
            let position = Position::new(column, row);

            if areas.tabs.contains(position) {
                let index = tabs.tab_at(areas.tabs, column, row)?;
                let section = sections().get(index)?;
                Some(Message::SelectSection {
                    id: section.id.to_string(),
                })
            } else if areas.body.contains(position) {
                section_view(state)
                    .row_at(areas.body, row)
                    .map(Message::ToggleItem)
            } else {
                None
            }
        }
    }
}

fn gate(state: &AppState) -> widgets::ManualGate {
    widgets::ManualGate::new(state.settings.ui.show_key_hints)
}

fn section_view(state: &AppState) -> widgets::SectionView<'_> {
    widgets::SectionView::new(
        state.active_section(),
        &state.accordion,
        IconSet::new(state.settings.ui.icons),
    )
}

fn manual_layout(state: &AppState, area: Rect) -> (widgets::SectionTabs<'static>, ScreenAreas) {
    let tabs = widgets::SectionTabs::new(sections(), state.active_index());
    let areas = layout::create(
        area,
        tabs.rows_needed(area.width),
        state.settings.ui.show_key_hints,
    );
    (tabs, areas)
}

fn render_manual(frame: &mut Frame, state: &AppState, area: Rect) {
    let icons = IconSet::new(state.settings.ui.icons);
    let (tabs, areas) = manual_layout(state, area);

    frame.render_widget(widgets::MainHeader, areas.header);
    frame.render_widget(tabs, areas.tabs);
    frame.render_widget(section_view(state), areas.body);
    frame.render_widget(widgets::ImportantNote::new(icons), areas.note);

    if let Some(hints) = areas.hints {
        frame.render_widget(widgets::KeyHints::new(sections().len()), hints);
    }
}
