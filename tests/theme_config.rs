//! Integration tests for the public configuration API.
//!
//! Covers the properties a consuming renderer depends on: exact field names,
//! valid colors and layout values, lossless (de)serialization, and the
//! directive/script forms carrying the node fill and edge colors.

use mermaid_theme::export;
use mermaid_theme::theme::color::{is_valid_color, parse_color, Rgb};
use mermaid_theme::{
    BaseTheme, CurveStyle, FlowchartConfig, ThemeConfiguration, ThemeVariables, DEFAULT_THEME,
};
use proptest::prelude::*;

const ACCEPTED_CURVES: [&str; 20] = [
    "basis",
    "basisClosed",
    "basisOpen",
    "bumpX",
    "bumpY",
    "bundle",
    "cardinal",
    "cardinalClosed",
    "cardinalOpen",
    "catmullRom",
    "catmullRomClosed",
    "catmullRomOpen",
    "linear",
    "linearClosed",
    "monotoneX",
    "monotoneY",
    "natural",
    "step",
    "stepAfter",
    "stepBefore",
];

#[test]
fn test_builtin_colors_are_six_digit_hex() {
    for (name, value) in DEFAULT_THEME.theme_variables.iter() {
        assert_eq!(value.len(), 7, "{name}");
        assert!(value.starts_with('#'), "{name}");
        assert!(is_valid_color(value), "{name}");
    }
}

#[test]
fn test_builtin_curve_is_accepted_identifier() {
    let json = serde_json::to_value(&DEFAULT_THEME.flowchart).unwrap();
    let curve = json["curve"].as_str().unwrap();
    assert!(ACCEPTED_CURVES.contains(&curve));
}

#[test]
fn test_every_curve_variant_is_accepted_identifier() {
    let names: Vec<_> = CurveStyle::ALL.iter().map(|c| c.as_str()).collect();
    assert_eq!(names, ACCEPTED_CURVES);
}

#[test]
fn test_builtin_layout_values_are_non_negative_integers() {
    let json = serde_json::to_value(&DEFAULT_THEME.flowchart).unwrap();
    for key in ["padding", "nodeSpacing", "rankSpacing"] {
        assert!(json[key].is_u64(), "{key} = {}", json[key]);
    }
}

#[test]
fn test_pretty_json_round_trip() {
    let json = export::to_json_pretty(&DEFAULT_THEME).unwrap();
    let parsed: ThemeConfiguration = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, *DEFAULT_THEME);
}

#[test]
fn test_init_directive_snapshot() {
    let directive = export::init_directive(&DEFAULT_THEME).unwrap();
    insta::assert_snapshot!(directive, @r##"%%{init: {"theme":"base","themeVariables":{"primaryColor":"#2a2f42","primaryTextColor":"#e0e0e0","primaryBorderColor":"#7c4dff","lineColor":"#7c8aff","secondaryColor":"#1a1e2e","tertiaryColor":"#252a3a","edgeLabelBackground":"#1a1e2e","clusterBkg":"#1a1e2e","clusterBorder":"#7c4dff","nodeTextColor":"#e0e0e0","titleColor":"#ffffff"},"flowchart":{"curve":"basis","padding":15,"nodeSpacing":50,"rankSpacing":60}}}%%"##);
}

/// The renderer reads node fill from `primaryColor` and edge stroke from
/// `lineColor`; both must reach it under those names.
#[test]
fn test_diagram_carries_node_fill_and_edge_color() {
    let diagram = export::apply_to_diagram(&DEFAULT_THEME, "flowchart TD\n  A[Start] --> B[End]\n")
        .unwrap();
    let first_line = diagram.lines().next().unwrap();
    let json = first_line
        .strip_prefix("%%{init: ")
        .and_then(|rest| rest.strip_suffix("}%%"))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(json).unwrap();

    assert_eq!(value["theme"], "base");
    assert_eq!(value["themeVariables"]["primaryColor"], "#2a2f42");
    assert_eq!(value["themeVariables"]["lineColor"], "#7c8aff");
    assert_eq!(
        parse_color(value["themeVariables"]["primaryColor"].as_str().unwrap()),
        Some(Rgb(0x2a, 0x2f, 0x42))
    );
}

#[test]
fn test_initialize_script_embeds_js_object() {
    let script = export::initialize_script(&DEFAULT_THEME).unwrap();
    assert!(script.contains("primaryColor: \"#2a2f42\""));
    assert!(script.contains("lineColor: \"#7c8aff\""));
    assert!(script.contains("curve: \"basis\""));
}

fn hex_color() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Rgb(r, g, b).to_hex()),
        "#[0-9a-fA-F]{3}",
        prop::sample::select(vec!["white", "black", "rebeccapurple", "SlateGray"])
            .prop_map(String::from),
    ]
}

fn theme_variables() -> impl Strategy<Value = ThemeVariables> {
    prop::collection::vec(hex_color(), 11).prop_map(|c| ThemeVariables {
        primary_color: c[0].clone(),
        primary_text_color: c[1].clone(),
        primary_border_color: c[2].clone(),
        line_color: c[3].clone(),
        secondary_color: c[4].clone(),
        tertiary_color: c[5].clone(),
        edge_label_background: c[6].clone(),
        cluster_bkg: c[7].clone(),
        cluster_border: c[8].clone(),
        node_text_color: c[9].clone(),
        title_color: c[10].clone(),
    })
}

fn configuration() -> impl Strategy<Value = ThemeConfiguration> {
    (
        prop::sample::select(BaseTheme::ALL.to_vec()),
        theme_variables(),
        prop::sample::select(CurveStyle::ALL.to_vec()),
        any::<(u32, u32, u32)>(),
    )
        .prop_map(|(theme, theme_variables, curve, (padding, node_spacing, rank_spacing))| {
            ThemeConfiguration {
                theme,
                theme_variables,
                flowchart: FlowchartConfig {
                    curve,
                    padding,
                    node_spacing,
                    rank_spacing,
                },
            }
        })
}

proptest! {
    #[test]
    fn prop_json_round_trip(config in configuration()) {
        let json = export::to_json(&config).unwrap();
        let parsed: ThemeConfiguration = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, config);
    }

    #[test]
    fn prop_generated_configs_validate(config in configuration()) {
        prop_assert!(config.validate().is_ok());
    }

    #[test]
    fn prop_js_object_keeps_every_value(config in configuration()) {
        let js = export::to_js_object(&config).unwrap();
        for (name, value) in config.theme_variables.iter() {
            let line = format!("{}: \"{}\"", name, value);
            prop_assert!(js.contains(&line), "missing {}", line);
        }
        let rank_line = format!("rankSpacing: {}", config.flowchart.rank_spacing);
        prop_assert!(js.contains(&rank_line));
    }
}
