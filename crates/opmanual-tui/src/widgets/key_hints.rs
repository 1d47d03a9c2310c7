//! Key hint bar under the manual

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct KeyHints {
    section_count: usize,
}

impl KeyHints {
    pub fn new(section_count: usize) -> Self {
        Self { section_count }
    }

    fn bindings(&self) -> Vec<(String, &'static str)> {
        vec![
            ("Tab/←→".to_string(), "section"),
            (format!("1-{}", self.section_count.clamp(1, 9)), "jump"),
            ("↑↓".to_string(), "row"),
            ("Enter".to_string(), "toggle"),
            ("q".to_string(), "quit"),
        ]
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.bindings() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_hints_list_shortcuts() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(KeyHints::new(7), term.area());

        assert!(term.buffer_contains("1-7 jump"));
        assert!(term.buffer_contains("Enter toggle"));
        assert!(term.buffer_contains("q quit"));
    }
}
