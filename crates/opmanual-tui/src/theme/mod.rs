//! Centralized theme for the manual viewer.
//!
//! - `palette`: raw color constants
//! - `styles`: semantic style builder functions
//! - `icons`: glyphs with ASCII fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
