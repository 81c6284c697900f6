//! Mermaid configuration types, color parsing and the theme registry.
//!
//! - `types`: the configuration record and the built-in `midnight` palette, no I/O
//! - `color`: hex and CSS named color parsing used by validation
//! - `loader`: `ThemeRegistry` of the built-in plus JSON theme files (runtime only)
//!
//! # Example
//!
//! ```ignore
//! use mermaid_theme::theme::{ThemeLoader, DEFAULT_THEME};
//!
//! // The built-in palette needs no loading
//! assert_eq!(DEFAULT_THEME.flowchart.rank_spacing, 60);
//!
//! // User files sit next to it under their file stem; "midnight" stays built-in
//! let registry = ThemeLoader::new("docs/mermaid-themes".into()).load_all();
//! let paper = registry.get("paper-white");
//! ```

pub mod color;
#[cfg(feature = "runtime")]
mod loader;
mod types;

#[cfg(feature = "runtime")]
pub use loader::*;
pub use types::*;
