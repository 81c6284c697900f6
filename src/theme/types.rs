//! Pure configuration types and the built-in midnight palette.
//!
//! Field names serialize exactly as Mermaid's `initialize` config expects them
//! (`themeVariables.primaryColor`, `flowchart.nodeSpacing`, ...). Every section
//! defaults to the built-in values, so a partial JSON file overlays them.

use std::fmt;

use once_cell::sync::Lazy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::color::is_valid_color;
use crate::error::ThemeError;

/// Registry name of the built-in configuration.
pub const DEFAULT_THEME_NAME: &str = "midnight";

/// The built-in configuration, shared by reference.
pub static DEFAULT_THEME: Lazy<ThemeConfiguration> = Lazy::new(ThemeConfiguration::default);

/// Mermaid's named base themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BaseTheme {
    Default,
    /// The only theme that honors `themeVariables`.
    #[default]
    Base,
    Dark,
    Forest,
    Neutral,
    Null,
}

impl BaseTheme {
    pub const ALL: [BaseTheme; 6] = [
        BaseTheme::Default,
        BaseTheme::Base,
        BaseTheme::Dark,
        BaseTheme::Forest,
        BaseTheme::Neutral,
        BaseTheme::Null,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BaseTheme::Default => "default",
            BaseTheme::Base => "base",
            BaseTheme::Dark => "dark",
            BaseTheme::Forest => "forest",
            BaseTheme::Neutral => "neutral",
            BaseTheme::Null => "null",
        }
    }
}

impl fmt::Display for BaseTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// d3 curve used for flowchart edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CurveStyle {
    #[default]
    Basis,
    BasisClosed,
    BasisOpen,
    BumpX,
    BumpY,
    Bundle,
    Cardinal,
    CardinalClosed,
    CardinalOpen,
    CatmullRom,
    CatmullRomClosed,
    CatmullRomOpen,
    Linear,
    LinearClosed,
    MonotoneX,
    MonotoneY,
    Natural,
    Step,
    StepAfter,
    StepBefore,
}

impl CurveStyle {
    pub const ALL: [CurveStyle; 20] = [
        CurveStyle::Basis,
        CurveStyle::BasisClosed,
        CurveStyle::BasisOpen,
        CurveStyle::BumpX,
        CurveStyle::BumpY,
        CurveStyle::Bundle,
        CurveStyle::Cardinal,
        CurveStyle::CardinalClosed,
        CurveStyle::CardinalOpen,
        CurveStyle::CatmullRom,
        CurveStyle::CatmullRomClosed,
        CurveStyle::CatmullRomOpen,
        CurveStyle::Linear,
        CurveStyle::LinearClosed,
        CurveStyle::MonotoneX,
        CurveStyle::MonotoneY,
        CurveStyle::Natural,
        CurveStyle::Step,
        CurveStyle::StepAfter,
        CurveStyle::StepBefore,
    ];

    /// The identifier Mermaid expects in `flowchart.curve`.
    pub fn as_str(self) -> &'static str {
        match self {
            CurveStyle::Basis => "basis",
            CurveStyle::BasisClosed => "basisClosed",
            CurveStyle::BasisOpen => "basisOpen",
            CurveStyle::BumpX => "bumpX",
            CurveStyle::BumpY => "bumpY",
            CurveStyle::Bundle => "bundle",
            CurveStyle::Cardinal => "cardinal",
            CurveStyle::CardinalClosed => "cardinalClosed",
            CurveStyle::CardinalOpen => "cardinalOpen",
            CurveStyle::CatmullRom => "catmullRom",
            CurveStyle::CatmullRomClosed => "catmullRomClosed",
            CurveStyle::CatmullRomOpen => "catmullRomOpen",
            CurveStyle::Linear => "linear",
            CurveStyle::LinearClosed => "linearClosed",
            CurveStyle::MonotoneX => "monotoneX",
            CurveStyle::MonotoneY => "monotoneY",
            CurveStyle::Natural => "natural",
            CurveStyle::Step => "step",
            CurveStyle::StepAfter => "stepAfter",
            CurveStyle::StepBefore => "stepBefore",
        }
    }
}

impl fmt::Display for CurveStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named colors consumed by Mermaid to style nodes, edges and clusters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeVariables {
    /// Node fill
    pub primary_color: String,
    pub primary_text_color: String,
    pub primary_border_color: String,
    /// Edge stroke and arrowheads
    pub line_color: String,
    pub secondary_color: String,
    pub tertiary_color: String,
    pub edge_label_background: String,
    pub cluster_bkg: String,
    pub cluster_border: String,
    pub node_text_color: String,
    pub title_color: String,
}

impl Default for ThemeVariables {
    fn default() -> Self {
        Self {
            primary_color: "#2a2f42".into(),
            primary_text_color: "#e0e0e0".into(),
            primary_border_color: "#7c4dff".into(),
            line_color: "#7c8aff".into(),
            secondary_color: "#1a1e2e".into(),
            tertiary_color: "#252a3a".into(),
            edge_label_background: "#1a1e2e".into(),
            cluster_bkg: "#1a1e2e".into(),
            cluster_border: "#7c4dff".into(),
            node_text_color: "#e0e0e0".into(),
            title_color: "#ffffff".into(),
        }
    }
}

impl ThemeVariables {
    /// `(json name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("primaryColor", self.primary_color.as_str()),
            ("primaryTextColor", self.primary_text_color.as_str()),
            ("primaryBorderColor", self.primary_border_color.as_str()),
            ("lineColor", self.line_color.as_str()),
            ("secondaryColor", self.secondary_color.as_str()),
            ("tertiaryColor", self.tertiary_color.as_str()),
            ("edgeLabelBackground", self.edge_label_background.as_str()),
            ("clusterBkg", self.cluster_bkg.as_str()),
            ("clusterBorder", self.cluster_border.as_str()),
            ("nodeTextColor", self.node_text_color.as_str()),
            ("titleColor", self.title_color.as_str()),
        ]
        .into_iter()
    }

    /// Look up a variable by its Mermaid name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter().find(|(key, _)| *key == name).map(|(_, value)| value)
    }
}

/// Flowchart layout parameters. Spacing values are pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct FlowchartConfig {
    pub curve: CurveStyle,
    pub padding: u32,
    /// Horizontal gap between nodes on the same rank
    pub node_spacing: u32,
    /// Vertical gap between ranks
    pub rank_spacing: u32,
}

impl Default for FlowchartConfig {
    fn default() -> Self {
        Self {
            curve: CurveStyle::Basis,
            padding: 15,
            node_spacing: 50,
            rank_spacing: 60,
        }
    }
}

/// Theme selection, color variables and flowchart layout, in the shape
/// passed to `mermaid.initialize`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfiguration {
    pub theme: BaseTheme,
    pub theme_variables: ThemeVariables,
    pub flowchart: FlowchartConfig,
}

impl ThemeConfiguration {
    /// Check that every theme variable is a usable color.
    ///
    /// Reports the first offending variable by its Mermaid name. Spacing
    /// values are unsigned and the curve is an enum, so neither can be out
    /// of range once parsed.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for (field, value) in self.theme_variables.iter() {
            if !is_valid_color(value) {
                return Err(ThemeError::InvalidColor {
                    field,
                    value: value.to_string(),
                });
            }
        }

        if self.has_overrides_outside_base() {
            tracing::warn!(
                "themeVariables differ from the built-in palette under theme '{}'; \
                 Mermaid only guarantees them under 'base'",
                self.theme
            );
        }

        Ok(())
    }

    /// True when variables were changed from the built-in palette but the
    /// selected theme is not `base`.
    pub fn has_overrides_outside_base(&self) -> bool {
        self.theme != BaseTheme::Base && self.theme_variables != ThemeVariables::default()
    }
}
