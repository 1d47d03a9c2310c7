//! Section tabs widget
//!
//! One label per section, numbered for the 1-9 shortcuts. Labels wrap onto
//! extra rows when the terminal is too narrow for all of them.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use opmanual_core::Section;

use crate::text::display_width;
use crate::theme::styles;

/// Widget displaying one selector per section, the active one highlighted
pub struct SectionTabs<'a> {
    sections: &'a [Section],
    active: usize,
}

impl<'a> SectionTabs<'a> {
    pub fn new(sections: &'a [Section], active: usize) -> Self {
        Self { sections, active }
    }

    /// Rows the labels occupy when rendered into `width` columns
    pub fn rows_needed(&self, width: u16) -> u16 {
        let rows = self.layout_rows(padded_width(width)).len();
        rows.max(1) as u16
    }

    fn labels(&self, max_width: usize) -> Vec<String> {
        self.sections
            .iter()
            .enumerate()
            .map(|(index, section)| {
                truncate_name(&format!(" {} {} ", index + 1, section.title), max_width)
            })
            .collect()
    }

    /// Section index of the label under `(column, row)`
    pub fn tab_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        self.label_rects(area)
            .into_iter()
            .find(|(_, rect)| rect.contains(Position::new(column, row)))
            .map(|(index, _)| index)
    }

    /// Screen rect of every visible label, one column apart
    fn label_rects(&self, area: Rect) -> Vec<(usize, Rect)> {
        if area.width < 3 || area.height == 0 {
            return Vec::new();
        }

        // Left padding of one column
        let padded_area = Rect {
            x: area.x + 1,
            width: area.width - 2,
            ..area
        };
        let width = padded_area.width as usize;
        let labels = self.labels(width);

        let mut rects = Vec::with_capacity(labels.len());
        for (row_index, row) in self.layout_rows(width).iter().enumerate() {
            if row_index as u16 >= padded_area.height {
                break;
            }

            let mut x = padded_area.x;
            for &index in row {
                let label_width = display_width(&labels[index]) as u16;
                rects.push((
                    index,
                    Rect::new(x, padded_area.y + row_index as u16, label_width, 1),
                ));
                x += label_width + 1;
            }
        }
        rects
    }

    /// Greedy assignment of label indices to rows
    fn layout_rows(&self, width: usize) -> Vec<Vec<usize>> {
        let mut rows: Vec<Vec<usize>> = Vec::new();
        let mut row_width = 0;

        for (index, label) in self.labels(width).iter().enumerate() {
            let label_width = display_width(label);
            match rows.last_mut() {
                Some(row) if row_width + 1 + label_width <= width => {
                    row.push(index);
                    row_width += 1 + label_width;
                }
                _ => {
                    rows.push(vec![index]);
                    row_width = label_width;
                }
            }
        }
        rows
    }
}

impl Widget for SectionTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels = self.labels(padded_width(area.width));

        for (index, rect) in self.label_rects(area) {
            let style = if index == self.active {
                styles::focused_selected()
            } else {
                styles::tab_inactive()
            };
            Line::from(Span::styled(labels[index].clone(), style)).render(rect, buf);
        }
    }
}

fn padded_width(width: u16) -> usize {
    width.saturating_sub(2) as usize
}

/// Truncate a name to max display width, adding ellipsis if needed
fn truncate_name(name: &str, max_len: usize) -> String {
    if display_width(name) <= max_len {
        name.to_string()
    } else if max_len <= 1 {
        "…".to_string()
    } else {
        let mut truncated = String::new();
        let mut width = 0;
        for c in name.chars() {
            let w = display_width(c.encode_utf8(&mut [0; 4]));
            if width + w > max_len - 1 {
                break;
            }
            truncated.push(c);
            width += w;
        }
        format!("{}…", truncated)
    }
}
