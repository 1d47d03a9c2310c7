//! # opmanual-core - Manual Catalog and Domain Types
//!
//! Foundation crate for opmanual. Provides the static manual content, the
//! section/sub-item domain types, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Section`] - A tab of the manual
//! - [`SectionContent`] - Prose block or ordered list of sub-items
//! - [`SubItem`] - Tagged sub-item (text, spec, step) with display derivation
//!
//! ### Catalog (`catalog`)
//! - [`sections()`] - All sections in tab order
//! - [`find_section()`] / [`section_index()`] - Lookup by id
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum; `is_fatal` marks invocation errors
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use opmanual_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use catalog::{
    find_section, section_index, sections, DEFAULT_SECTION_ID, DEVICE_TITLE, MANUAL_SUBTITLE,
    NOTE_TEXT, NOTE_TITLE, REVEAL_LABEL,
};
pub use error::{Error, Result, ResultExt};
pub use types::{Section, SectionContent, SubItem};
