//! Color palette for the manual viewer.

use ratatui::style::Color;

// --- Background layers ---
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const NOTE_BG: Color = Color::Rgb(48, 40, 8); // Important note panel

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent, active tab, reveal button

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Status ---
pub const STATUS_YELLOW: Color = Color::Yellow; // Warnings, key hints

// --- Tabs ---
pub const TAB_INACTIVE_BG: Color = Color::Rgb(40, 40, 50);
