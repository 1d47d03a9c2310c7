//! Custom widget components

mod gate;
mod header;
mod key_hints;
mod note;
mod section_view;
mod tabs;

pub use gate::ManualGate;
pub use header::MainHeader;
pub use key_hints::KeyHints;
pub use note::ImportantNote;
pub use section_view::SectionView;
pub use tabs::SectionTabs;
