//! Important note footer, identical under every section

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use opmanual_core::{NOTE_TEXT, NOTE_TITLE};

use crate::theme::{icons::IconSet, styles};

pub struct ImportantNote {
    icons: IconSet,
}

impl ImportantNote {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }
}

impl Widget for ImportantNote {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::note_block().title(Line::from(Span::styled(
            format!(" {} ", NOTE_TITLE),
            styles::warning_bold(),
        )));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 2 {
            return;
        }

        let content = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };

        Paragraph::new(Line::from(vec![
            Span::styled(self.icons.warning(), styles::warning_bold()),
            Span::raw(" "),
            Span::styled(NOTE_TEXT, styles::warning()),
        ]))
        .wrap(Wrap { trim: true })
        .render(content, buf);
    }
}
