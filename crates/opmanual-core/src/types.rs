//! Domain types for the manual catalog
//!
//! A manual is an ordered list of [`Section`]s. A section either holds one
//! block of prose or an ordered list of [`SubItem`]s, each of which the UI
//! shows as a collapsible row.

use std::borrow::Cow;

use serde::Serialize;

/// A top-level named unit of manual content, selectable via a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Unique key used to select the section
    pub id: &'static str,
    /// Tab label and body heading
    pub title: &'static str,
    pub content: SectionContent,
}

impl Section {
    /// Sub-items of a list section; empty for prose sections
    pub fn items(&self) -> &'static [SubItem] {
        match self.content {
            SectionContent::Text(_) => &[],
            SectionContent::Items(items) => items,
        }
    }

    /// Number of collapsible rows this section renders
    pub fn item_count(&self) -> usize {
        self.items().len()
    }
}

/// Body of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionContent {
    /// Rendered as a single block of text
    Text(&'static str),
    /// Rendered as one collapsible row per item, in order
    Items(&'static [SubItem]),
}

/// One entry of a list section
///
/// Each variant decides its own header and body, see
/// [`SubItem::display_title`] and [`SubItem::display_body`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubItem {
    /// Titled paragraph
    Text {
        title: &'static str,
        text: &'static str,
    },
    /// Hardware specification entry
    Spec {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<&'static str>,
        spec: &'static str,
        value: &'static str,
    },
    /// Numbered procedure step
    Step { step: u32, text: &'static str },
}

impl SubItem {
    /// Header text of the collapsible row
    ///
    /// An explicit title always wins. Steps are labelled `"Step {n}"` and
    /// untitled specs fall back to the spec name.
    pub fn display_title(&self) -> Cow<'static, str> {
        match *self {
            SubItem::Text { title, .. } => Cow::Borrowed(title),
            SubItem::Spec {
                title: Some(title), ..
            } => Cow::Borrowed(title),
            SubItem::Spec {
                title: None, spec, ..
            } => Cow::Borrowed(spec),
            SubItem::Step { step, .. } => Cow::Owned(format!("Step {}", step)),
        }
    }

    /// Body text shown when the row is expanded
    pub fn display_body(&self) -> Cow<'static, str> {
        match *self {
            SubItem::Text { text, .. } | SubItem::Step { text, .. } => Cow::Borrowed(text),
            SubItem::Spec { spec, value, .. } => Cow::Owned(format!("{}: {}", spec, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_item_uses_title_and_text() {
        let item = SubItem::Text {
            title: "General Warning",
            text: "Service by trained personnel only.",
        };
        assert_eq!(item.display_title(), "General Warning");
        assert_eq!(item.display_body(), "Service by trained personnel only.");
    }

    #[test]
    fn test_step_item_synthesizes_title() {
        let item = SubItem::Step {
            step: 3,
            text: "Connect the sensors.",
        };
        assert_eq!(item.display_title(), "Step 3");
        assert_eq!(item.display_body(), "Connect the sensors.");
    }

    #[test]
    fn test_untitled_spec_falls_back_to_spec_name() {
        let item = SubItem::Spec {
            title: None,
            spec: "Resolution",
            value: "1024 x 600 pixels",
        };
        assert_eq!(item.display_title(), "Resolution");
        assert_eq!(item.display_body(), "Resolution: 1024 x 600 pixels");
    }

    #[test]
    fn test_titled_spec_prefers_title_for_header_only() {
        let item = SubItem::Spec {
            title: Some("Screen Resolution"),
            spec: "Resolution",
            value: "1024 x 600 pixels",
        };
        assert_eq!(item.display_title(), "Screen Resolution");
        assert_eq!(item.display_body(), "Resolution: 1024 x 600 pixels");
    }

    #[test]
    fn test_empty_fields_render_empty_label() {
        let item = SubItem::Text { title: "", text: "" };
        assert_eq!(item.display_title(), "");
        assert_eq!(item.display_body(), "");
    }

    #[test]
    fn test_prose_section_has_no_items() {
        let section = Section {
            id: "notes",
            title: "Notes",
            content: SectionContent::Text("Plain text."),
        };
        assert!(section.items().is_empty());
        assert_eq!(section.item_count(), 0);
    }

    #[test]
    fn test_sub_item_serializes_with_kind_tag() {
        let item = SubItem::Step {
            step: 1,
            text: "Connect a laptop.",
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"kind":"step","step":1,"text":"Connect a laptop."}"#);

        let untitled = SubItem::Spec {
            title: None,
            spec: "Display",
            value: "7\" TFT",
        };
        let json = serde_json::to_value(untitled).unwrap();
        assert_eq!(json["kind"], "spec");
        assert!(json.get("title").is_none());
    }
}
