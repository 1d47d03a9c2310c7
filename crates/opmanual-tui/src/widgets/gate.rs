//! Landing screen shown before the manual is revealed

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use opmanual_core::{DEVICE_TITLE, MANUAL_SUBTITLE, REVEAL_LABEL};

use crate::text::wrap_text;
use crate::theme::styles;

/// Centered title, subtitle and the reveal button
pub struct ManualGate {
    show_hints: bool,
}

/// Lines of the gate, each placed on its own centered row
struct GateLayout {
    rows: Vec<(Line<'static>, Rect)>,
    button: Option<Rect>,
}

impl ManualGate {
    pub fn new(show_hints: bool) -> Self {
        Self { show_hints }
    }

    fn lines(&self, width: usize) -> (Vec<Line<'static>>, usize) {
        let mut lines: Vec<Line<'static>> = wrap_text(DEVICE_TITLE, width)
            .into_iter()
            .map(|line| Line::styled(line, styles::title()))
            .collect();

        lines.push(Line::default());
        lines.push(Line::styled(MANUAL_SUBTITLE, styles::text_secondary()));
        lines.push(Line::default());

        let button_index = lines.len();
        lines.push(Line::from(Span::styled(
            format!("  {}  ", REVEAL_LABEL),
            styles::focused_selected(),
        )));

        if self.show_hints {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" view  ", styles::text_muted()),
                Span::styled("q", styles::keybinding()),
                Span::styled(" quit", styles::text_muted()),
            ]));
        }
        (lines, button_index)
    }

    fn layout(&self, area: Rect) -> GateLayout {
        if area.width < 4 || area.height == 0 {
            return GateLayout {
                rows: Vec::new(),
                button: None,
            };
        }

        let (lines, button_index) = self.lines(area.width.saturating_sub(4) as usize);
        let total = (lines.len() as u16).min(area.height);
        let top = area.y + (area.height - total) / 2;

        let mut button = None;
        let rows = lines
            .into_iter()
            .take(total as usize)
            .enumerate()
            .map(|(index, line)| {
                let width = (line.width() as u16).min(area.width);
                let rect = Rect {
                    x: area.x + (area.width - width) / 2,
                    y: top + index as u16,
                    width,
                    height: 1,
                };
                if index == button_index {
                    button = Some(rect);
                }
                (line, rect)
            })
            .collect();

        GateLayout { rows, button }
    }

    /// Whether `(column, row)` lands on the reveal button
    pub fn hits_button(&self, area: Rect, column: u16, row: u16) -> bool {
        self.layout(area)
            .button
            .is_some_and(|button| button.contains(Position::new(column, row)))
    }
}

impl Widget for ManualGate {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (line, rect) in self.layout(area).rows {
            line.render(rect, buf);
        }
    }
}
