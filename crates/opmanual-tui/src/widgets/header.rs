//! Header bar widget
//!
//! Device name on the left, document name on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use opmanual_core::{DEVICE_TITLE, MANUAL_SUBTITLE};

use crate::text::display_width;
use crate::theme::{palette, styles};

pub struct MainHeader;

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Render glass container with rounded borders
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 2 {
            return;
        }

        let row = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            height: 1,
            ..inner
        };

        Paragraph::new(Line::from(Span::styled(DEVICE_TITLE, styles::title()))).render(row, buf);

        // Subtitle only when it fits beside the title
        let needed = display_width(DEVICE_TITLE) + 2 + display_width(MANUAL_SUBTITLE);
        if needed <= row.width as usize {
            Paragraph::new(Line::from(Span::styled(
                MANUAL_SUBTITLE,
                styles::text_muted(),
            )))
            .alignment(Alignment::Right)
            .render(row, buf);
        }
    }
}
