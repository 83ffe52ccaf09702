//! Application systems
//!
//! The animation clock and the two frame outputs.

mod animation;
mod terminal;
mod svg_export;

pub use animation::Animator;
pub use terminal::TerminalSystem;
pub use svg_export::SvgExportSystem;
