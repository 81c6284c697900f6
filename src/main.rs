use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};

use mermaid_theme::export;
use mermaid_theme::services::tracing_setup;
use mermaid_theme::theme::{default_themes_dir, ThemeLoader, DEFAULT_THEME_NAME};

/// Output format for the selected configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
    /// JavaScript object literal
    Js,
    /// `%%{init: ...}%%` diagram directive
    Directive,
    /// HTML script block calling mermaid.initialize
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "mermaid-theme", version, about = "Print Mermaid theme configurations")]
struct Args {
    /// Name of the theme configuration to use
    #[arg(long, default_value = DEFAULT_THEME_NAME)]
    theme: String,

    /// Directory of user theme files (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    themes_dir: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Js)]
    format: Format,

    /// Validate a single theme file and exit
    #[arg(long, value_name = "FILE", conflicts_with = "wrap")]
    check: Option<PathBuf>,

    /// Print a Mermaid source file with the init directive applied
    #[arg(long, value_name = "FILE")]
    wrap: Option<PathBuf>,

    /// List available theme names and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_setup::init_global();

    let stdout = std::io::stdout();
    run(args, &mut stdout.lock())
}

fn run(args: Args, out: &mut impl Write) -> Result<()> {
    if let Some(path) = &args.check {
        ThemeLoader::load_file(path)?;
        writeln!(out, "ok")?;
        return Ok(());
    }

    let loader = match args.themes_dir.clone().or_else(default_themes_dir) {
        Some(dir) => ThemeLoader::new(dir),
        None => ThemeLoader::embedded_only(),
    };
    let registry = loader.load_all();

    if args.list {
        for info in registry.list() {
            writeln!(out, "{}\t{}", info.name, info.pack)?;
        }
        return Ok(());
    }

    let config = registry.get(&args.theme).ok_or_else(|| {
        anyhow!(
            "unknown theme '{}' (available: {})",
            args.theme,
            registry.names().join(", ")
        )
    })?;

    if let Some(path) = &args.wrap {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read diagram {}", path.display()))?;
        write!(out, "{}", export::apply_to_diagram(config, &source)?)?;
        return Ok(());
    }

    let rendered = match args.format {
        Format::Json => export::to_json(config)?,
        Format::Pretty => export::to_json_pretty(config)?,
        Format::Js => export::to_js_object(config)?,
        Format::Directive => export::init_directive(config)?,
        Format::Html => export::initialize_script(config)?,
    };
    writeln!(out, "{}", rendered)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["mermaid-theme"]);
        assert_eq!(args.theme, "midnight");
        assert_eq!(args.format, Format::Js);
        assert!(args.check.is_none());
        assert!(!args.list);
    }

    #[test]
    fn test_format_values() {
        let args = Args::parse_from(["mermaid-theme", "--format", "directive"]);
        assert_eq!(args.format, Format::Directive);
    }

    #[test]
    fn test_check_conflicts_with_wrap() {
        let result = Args::try_parse_from(["mermaid-theme", "--check", "a.json", "--wrap", "b.mmd"]);
        assert!(result.is_err());
    }

    /// Run with the given arguments against `themes_dir`, returning stdout.
    fn run_in(themes_dir: &Path, extra: &[&str]) -> Result<String> {
        let dir = themes_dir.to_string_lossy().into_owned();
        let mut argv = vec!["mermaid-theme", "--themes-dir", dir.as_str()];
        argv.extend_from_slice(extra);

        let mut out = Vec::new();
        run(Args::parse_from(argv), &mut out)?;
        Ok(String::from_utf8(out).expect("output is UTF-8"))
    }

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    #[test]
    fn test_check_valid_file_prints_ok() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_file(temp_dir.path(), "ok.json", r#"{ "theme": "forest" }"#);

        let out = run_in(temp_dir.path(), &["--check", path.to_str().unwrap()]).unwrap();
        assert_eq!(out, "ok\n");
    }

    #[test]
    fn test_check_invalid_file_fails() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_file(
            temp_dir.path(),
            "bad.json",
            r#"{ "themeVariables": { "lineColor": "blurple" } }"#,
        );

        let err = run_in(temp_dir.path(), &["--check", path.to_str().unwrap()]).unwrap_err();
        assert!(err.to_string().contains("themeVariables.lineColor"));
    }

    #[test]
    fn test_list_prints_name_and_pack() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        write_file(temp_dir.path(), "paper.json", "{}");

        let out = run_in(temp_dir.path(), &["--list"]).unwrap();
        assert_eq!(out, "midnight\tbuiltin\npaper\tuser\n");
    }

    #[test]
    fn test_unknown_theme_lists_available_names() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let err = run_in(temp_dir.path(), &["--theme", "sunrise"]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown theme 'sunrise'"));
        assert!(message.contains("available: midnight"));
    }

    #[test]
    fn test_wrap_applies_directive() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let diagram = write_file(temp_dir.path(), "flow.mmd", "flowchart LR\n  A --> B\n");

        let out = run_in(temp_dir.path(), &["--wrap", diagram.to_str().unwrap()]).unwrap();
        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("%%{init: {\"theme\":\"base\""));
        assert_eq!(lines.next(), Some("flowchart LR"));
    }

    #[test]
    fn test_wrap_missing_file_reports_path() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("missing.mmd");

        let err = run_in(temp_dir.path(), &["--wrap", missing.to_str().unwrap()]).unwrap_err();
        assert!(err.to_string().contains("missing.mmd"));
    }

    #[test]
    fn test_format_selects_renderer() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let js = run_in(temp_dir.path(), &[]).unwrap();
        assert!(js.starts_with("{\n  theme: \"base\","));

        let directive = run_in(temp_dir.path(), &["--format", "directive"]).unwrap();
        assert!(directive.starts_with("%%{init: "));

        let html = run_in(temp_dir.path(), &["--format", "html"]).unwrap();
        assert!(html.starts_with("<script type=\"module\">"));
    }

    #[test]
    fn test_user_theme_is_selectable() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        write_file(
            temp_dir.path(),
            "sunrise.json",
            r##"{ "themeVariables": { "primaryColor": "#ffcc00" } }"##,
        );

        let out = run_in(temp_dir.path(), &["--theme", "sunrise", "--format", "json"]).unwrap();
        assert!(out.contains("\"primaryColor\":\"#ffcc00\""));
    }
}
