//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: geometric glyphs, the default
//! - `IconMode::Ascii`: plain characters for limited terminals

use opmanual_app::config::IconMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Indicator of a closed accordion row
    pub fn collapsed(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{25b6}", // ▶
            IconMode::Ascii => ">",
        }
    }

    /// Indicator of an open accordion row
    pub fn expanded(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{25bc}", // ▼
            IconMode::Ascii => "v",
        }
    }

    pub fn warning(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{26a0}", // ⚠
            IconMode::Ascii => "!",
        }
    }

    /// Left rule drawn beside an expanded row's body
    pub fn body_rule(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2502}", // │
            IconMode::Ascii => "|",
        }
    }

    pub fn indicator(&self, expanded: bool) -> &'static str {
        if expanded {
            self.expanded()
        } else {
            self.collapsed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_indicators() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.indicator(false), "▶");
        assert_eq!(icons.indicator(true), "▼");
    }

    #[test]
    fn test_ascii_icons_are_ascii() {
        let icons = IconSet::new(IconMode::Ascii);
        for icon in [
            icons.collapsed(),
            icons.expanded(),
            icons.warning(),
            icons.body_rule(),
        ] {
            assert!(icon.is_ascii(), "{icon:?} is not ascii");
        }
    }

    #[test]
    fn test_open_and_closed_differ_in_every_mode() {
        for mode in [IconMode::Unicode, IconMode::Ascii] {
            let icons = IconSet::new(mode);
            assert_ne!(icons.collapsed(), icons.expanded());
        }
    }
}
