//! Renderings of a [`ThemeConfiguration`] in the forms Mermaid consumes.
//!
//! - JSON, for `mermaid.initialize` callers that load config from a file
//! - a JavaScript object literal, for site templates that include it inline
//! - an `%%{init: ...}%%` directive, prepended to a single diagram's source
//! - an HTML `<script type="module">` block that initializes Mermaid on a page

use serde_json::{Map, Value};

use crate::error::ThemeError;
use crate::theme::ThemeConfiguration;

/// ESM build of Mermaid loaded by [`initialize_script`].
pub const MERMAID_ESM_URL: &str = "https://cdn.jsdelivr.net/npm/mermaid@11/dist/mermaid.esm.min.mjs";

/// Keywords Mermaid recognizes for a configuration directive.
const INIT_KEYWORDS: [&str; 2] = ["initialize", "init"];

const FRONT_MATTER_FENCE: &str = "---";

pub fn to_json(config: &ThemeConfiguration) -> Result<String, ThemeError> {
    Ok(serde_json::to_string(config)?)
}

pub fn to_json_pretty(config: &ThemeConfiguration) -> Result<String, ThemeError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// JavaScript object literal with unquoted keys and two-space indentation.
pub fn to_js_object(config: &ThemeConfiguration) -> Result<String, ThemeError> {
    let value = serde_json::to_value(config)?;
    let mut out = String::new();
    write_js(&value, 0, false, &mut out)?;
    Ok(out)
}

/// Single-line `%%{init: {...}}%%` directive.
pub fn init_directive(config: &ThemeConfiguration) -> Result<String, ThemeError> {
    Ok(format!("%%{{init: {}}}%%", to_json(config)?))
}

/// Add the init directive to Mermaid source.
///
/// The directive goes on the first line, or right after a leading `---`
/// front-matter block. Mermaid merges every init directive it finds, so
/// source that already carries one is returned as is.
pub fn apply_to_diagram(config: &ThemeConfiguration, source: &str) -> Result<String, ThemeError> {
    let (front_matter, body) = split_front_matter(source);

    let first_line = body.lines().find(|line| !line.trim().is_empty());
    if first_line.is_some_and(is_init_directive) {
        tracing::debug!("diagram already has an init directive, leaving it untouched");
        return Ok(source.to_string());
    }

    let separator = if front_matter.is_empty() || front_matter.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    Ok(format!(
        "{}{}{}\n{}",
        front_matter,
        separator,
        init_directive(config)?,
        body
    ))
}

/// Split off a leading front-matter block, closing fence included.
///
/// Front matter only counts when `---` is the very first line and a closing
/// `---` follows; otherwise the whole source is body.
fn split_front_matter(source: &str) -> (&str, &str) {
    let mut lines = source.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return ("", source);
    };
    if first.trim_end() != FRONT_MATTER_FENCE {
        return ("", source);
    }

    let mut end = first.len();
    for line in lines {
        end += line.len();
        if line.trim_end() == FRONT_MATTER_FENCE {
            return source.split_at(end);
        }
    }
    ("", source)
}

/// Matches `%%{init...` and `%%{initialize...`, with optional whitespace after `%%{`.
fn is_init_directive(line: &str) -> bool {
    let Some(rest) = line.trim_start().strip_prefix("%%{") else {
        return false;
    };
    let rest = rest.trim_start();
    INIT_KEYWORDS.iter().any(|keyword| {
        rest.strip_prefix(keyword)
            .is_some_and(|after| !after.starts_with(|c: char| c.is_alphanumeric() || c == '_'))
    })
}

/// HTML snippet that loads Mermaid and calls `initialize` with this configuration.
///
/// String values are escaped for embedding in a `<script>` element, so a
/// value cannot close the tag.
pub fn initialize_script(config: &ThemeConfiguration) -> Result<String, ThemeError> {
    let mut options = Map::new();
    options.insert("startOnLoad".to_string(), Value::Bool(true));
    if let Value::Object(fields) = serde_json::to_value(config)? {
        options.extend(fields);
    }

    let mut body = String::new();
    write_js(&Value::Object(options), 1, true, &mut body)?;

    Ok(format!(
        "<script type=\"module\">\n  import mermaid from \"{}\";\n  mermaid.initialize({});\n</script>",
        MERMAID_ESM_URL, body
    ))
}

fn write_js(
    value: &Value,
    depth: usize,
    html_safe: bool,
    out: &mut String,
) -> Result<(), ThemeError> {
    match value {
        Value::Object(map) if map.is_empty() => out.push_str("{}"),
        Value::Object(map) => {
            out.push_str("{\n");
            let inner = "  ".repeat(depth + 1);
            for (idx, (key, child)) in map.iter().enumerate() {
                out.push_str(&inner);
                out.push_str(key);
                out.push_str(": ");
                write_js(child, depth + 1, html_safe, out)?;
                if idx + 1 < map.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            out.push_str(&"  ".repeat(depth));
            out.push('}');
        }
        // Strings, numbers and booleans share JSON's literal syntax
        other => {
            let literal = serde_json::to_string(other)?;
            if html_safe {
                out.push_str(&escape_for_script(&literal));
            } else {
                out.push_str(&literal);
            }
        }
    }
    Ok(())
}

/// Escape a JSON literal for a `<script>` body.
///
/// `<` covers `</script>` and `<!--`; U+2028/U+2029 are line terminators in
/// older JavaScript engines. The escapes decode to the same string value.
fn escape_for_script(literal: &str) -> String {
    literal
        .replace('<', "\\u003c")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
