//! Body of the active section
//!
//! Prose renders as a single wrapped block. List sections render one
//! accordion row per sub-item: a header with an open/closed indicator and,
//! only while the row is expanded, its body.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use opmanual_app::AccordionState;
use opmanual_core::{Section, SectionContent, SubItem};

use crate::text::wrap_text;
use crate::theme::{icons::IconSet, styles};

/// Columns taken by the body rule prefix, `"  │ "`
const BODY_INDENT: usize = 4;

pub struct SectionView<'a> {
    section: &'a Section,
    accordion: &'a AccordionState,
    icons: IconSet,
}

/// Rendered lines of an accordion plus the line span of each row
struct AccordionLines {
    lines: Vec<Line<'static>>,
    /// `(first_line, end_line)` per row, end exclusive
    spans: Vec<(usize, usize)>,
}

impl<'a> SectionView<'a> {
    pub fn new(section: &'a Section, accordion: &'a AccordionState, icons: IconSet) -> Self {
        Self {
            section,
            accordion,
            icons,
        }
    }

    fn prose_lines(text: &str, width: usize) -> Vec<Line<'static>> {
        wrap_text(text, width)
            .into_iter()
            .map(|line| Line::styled(line, styles::text_primary()))
            .collect()
    }

    fn accordion_lines(&self, items: &[SubItem], width: usize) -> AccordionLines {
        let focused = self.accordion.focused();
        let mut lines = Vec::new();
        let mut spans = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let start = lines.len();
            let expanded = self.accordion.is_expanded(index);

            let header_style = if focused == Some(index) {
                styles::row_focused()
            } else {
                styles::row_header()
            };
            lines.push(Line::from(vec![
                Span::styled(self.icons.indicator(expanded), styles::accent_bold()),
                Span::raw(" "),
                Span::styled(item.display_title().into_owned(), header_style),
            ]));

            if expanded {
                let body_width = width.saturating_sub(BODY_INDENT).max(1);
                for body_line in wrap_text(&item.display_body(), body_width) {
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {} ", self.icons.body_rule()), styles::text_muted()),
                        Span::styled(body_line, styles::text_secondary()),
                    ]));
                }
            }

            spans.push((start, lines.len()));
        }

        AccordionLines { lines, spans }
    }
}

/// First visible line so the focused row is on screen, header first
fn scroll_offset(focused_span: Option<(usize, usize)>, height: usize) -> usize {
    match focused_span {
        Some((start, end)) => end.saturating_sub(height).min(start),
        None => 0,
    }
}

/// Inside of the glass block with one column of breathing room on each side
fn content_area(area: Rect) -> Rect {
    let inner = styles::glass_block(true).inner(area);
    Rect {
        x: inner.x.saturating_add(1).min(inner.right()),
        width: inner.width.saturating_sub(2),
        ..inner
    }
}

impl SectionView<'_> {
    fn visible_offset(&self, spans: &[(usize, usize)], height: u16) -> usize {
        let focused_span = self
            .accordion
            .focused()
            .and_then(|index| spans.get(index).copied());
        scroll_offset(focused_span, height as usize)
    }

    /// Accordion row whose header is drawn on screen `row`
    pub fn row_at(&self, area: Rect, row: u16) -> Option<usize> {
        let SectionContent::Items(items) = self.section.content else {
            return None;
        };

        let content = content_area(area);
        if content.width == 0 || row < content.y || row >= content.bottom() {
            return None;
        }

        let AccordionLines { spans, .. } = self.accordion_lines(items, content.width as usize);
        let line = self.visible_offset(&spans, content.height) + (row - content.y) as usize;
        spans.iter().position(|&(start, _)| start == line)
    }
}

impl Widget for SectionView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(Line::from(Span::styled(
            format!(" {} ", self.section.title),
            styles::accent_bold(),
        )));
        block.render(area, buf);

        let content = content_area(area);
        if content.height == 0 || content.width == 0 {
            return;
        }
        let width = content.width as usize;

        match self.section.content {
            SectionContent::Text(text) => {
                Paragraph::new(Self::prose_lines(text, width)).render(content, buf);
            }
            SectionContent::Items(items) => {
                let AccordionLines { lines, spans } = self.accordion_lines(items, width);
                let offset = self.visible_offset(&spans, content.height);

                Paragraph::new(lines)
                    .scroll((offset as u16, 0))
                    .render(content, buf);
            }
        }
    }
}
