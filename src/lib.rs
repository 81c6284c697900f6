//! Mermaid theme and flowchart layout configuration.
//!
//! The crate holds one built-in configuration (dark "midnight" palette on the
//! `base` theme) as a typed record, and renders it into the shapes Mermaid
//! accepts: JSON, a JavaScript object literal, an `%%{init: ...}%%` directive,
//! or an HTML `mermaid.initialize` snippet.
//!
//! ```
//! use mermaid_theme::{export, ThemeConfiguration};
//!
//! let config = ThemeConfiguration::default();
//! assert_eq!(config.theme_variables.primary_color, "#2a2f42");
//!
//! let directive = export::init_directive(&config).unwrap();
//! assert!(directive.starts_with("%%{init: "));
//! ```

pub mod error;
pub mod export;
#[cfg(feature = "runtime")]
pub mod services;
pub mod theme;

pub use error::ThemeError;
pub use theme::{
    BaseTheme, CurveStyle, FlowchartConfig, ThemeConfiguration, ThemeVariables, DEFAULT_THEME,
};
