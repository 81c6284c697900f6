//! Prints the JSON Schema for theme configuration files.
//!
//! Run with: cargo run --features dev-bins --bin generate_schema > theme.schema.json

use mermaid_theme::{ThemeConfiguration, ThemeError};

fn main() -> Result<(), ThemeError> {
    let schema = schemars::schema_for!(ThemeConfiguration);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
