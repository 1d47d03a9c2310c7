//! Width-aware text helpers
//!
//! The accordion needs to know how many rows each expanded body takes before
//! it renders, so wrapping happens here instead of inside `Paragraph`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `text` in terminal columns
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Greedy word wrap to `width` columns
///
/// Explicit newlines are kept, blank lines included. Words wider than
/// `width` are split at character boundaries. A zero width yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let start = lines.len();
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = display_width(word);

            if word_width > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                // Full chunks become lines, the tail may still take words
                let mut chunks = split_long_word(word, width);
                if let Some(tail) = chunks.pop() {
                    lines.extend(chunks);
                    current_width = display_width(&tail);
                    current = tail;
                }
                continue;
            }

            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed > width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width = needed;
            }
        }

        if !current.is_empty() || lines.len() == start {
            lines.push(current);
        }
    }
    lines
}

fn split_long_word(word: &str, width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0;

    for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if chunk_width + w > width && !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push(c);
        chunk_width += w;
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap_text("Connect a laptop.", 40), vec!["Connect a laptop."]);
    }

    #[test]
    fn test_wraps_at_word_boundaries() {
        let lines = wrap_text("Use only the supplied power adapter.", 16);
        assert_eq!(lines, vec!["Use only the", "supplied power", "adapter."]);
        assert!(lines.iter().all(|l| display_width(l) <= 16));
    }

    #[test]
    fn test_keeps_explicit_newlines_and_blank_lines() {
        let lines = wrap_text("Phone: 1\nEmail: 2\n\nProvide:", 40);
        assert_eq!(lines, vec!["Phone: 1", "Email: 2", "", "Provide:"]);
    }

    #[test]
    fn test_splits_words_wider_than_width() {
        let lines = wrap_text("sales@drmtechnic.com ok", 8);
        assert_eq!(lines, vec!["sales@dr", "mtechnic", ".com ok"]);
    }

    #[test]
    fn test_wide_characters_inside_long_word_keep_order() {
        let lines = wrap_text("日本語x", 3);
        assert_eq!(lines, vec!["日", "本", "語x"]);
        assert_eq!(lines.concat(), "日本語x");
    }

    #[test]
    fn test_tail_of_split_word_joins_next_word() {
        assert_eq!(wrap_text("abcdef g h", 4), vec!["abcd", "ef g", "h"]);
    }

    #[test]
    fn test_word_filling_whole_lines_adds_no_blank_line() {
        assert_eq!(wrap_text("abcdefgh", 4), vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_zero_width_yields_nothing() {
        assert!(wrap_text("anything", 0).is_empty());
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wide_characters_count_double() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(wrap_text("日本 語", 4), vec!["日本", "語"]);
    }
}
