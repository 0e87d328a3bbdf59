//! Output formatting: table, JSON, YAML, plain, HTML.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.
//! HTML is handled by [`crate::html`] for the commands that support it.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use hookhub_core::BadgeTone;

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Paint a category label in its badge tone. Unknown labels come out dimmed.
pub fn paint_category(label: &str, color: bool) -> String {
    if !color {
        return label.to_owned();
    }
    match BadgeTone::for_label(label) {
        BadgeTone::Purple => label.magenta().to_string(),
        BadgeTone::Red => label.red().to_string(),
        BadgeTone::Blue => label.bright_blue().to_string(),
        BadgeTone::Yellow => label.yellow().to_string(),
        BadgeTone::Green => label.green().to_string(),
        BadgeTone::Indigo => label.blue().to_string(),
        BadgeTone::Neutral => label.dimmed().to_string(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact`: serializes the data itself via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `id_fn` on each item to emit one identifier per line
///
/// `html` is rejected here; callers that support it render it themselves.
pub fn render_list<T, R>(
    format: &OutputFormat,
    command: &str,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    Ok(match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
        OutputFormat::Html => return Err(unsupported(format, command)),
    })
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses a custom `detail_fn` that returns a pre-formatted string,
/// since single-item detail views don't use `Tabled` derive.
pub fn render_single<T>(
    format: &OutputFormat,
    command: &str,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    Ok(match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => id_fn(data),
        OutputFormat::Html => return Err(unsupported(format, command)),
    })
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

fn unsupported(format: &OutputFormat, command: &str) -> CliError {
    CliError::UnsupportedOutput {
        format: format!("{format:?}").to_lowercase(),
        command: command.into(),
    }
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Pretty-printed JSON.
pub(crate) fn render_json_pretty<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).expect("serialization should not fail")
}

/// Compact single-line JSON.
pub(crate) fn render_json_compact<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string(data).expect("serialization should not fail")
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    if compact {
        render_json_compact(data)
    } else {
        render_json_pretty(data)
    }
}

/// YAML output.
pub(crate) fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(serde::Serialize)]
    struct Item {
        id: &'static str,
    }

    #[derive(Tabled)]
    struct ItemRow {
        #[tabled(rename = "ID")]
        id: &'static str,
    }

    #[test]
    fn plain_emits_one_id_per_line() {
        let items = [Item { id: "a" }, Item { id: "b" }];
        let out = render_list(
            &OutputFormat::Plain,
            "list",
            &items,
            |i| ItemRow { id: i.id },
            |i| i.id.to_string(),
        )
        .unwrap();
        insta::assert_snapshot!(out, @r"
        a
        b
        ");
    }

    #[test]
    fn compact_json_is_single_line() {
        let items = [Item { id: "a" }];
        let out = render_list(
            &OutputFormat::JsonCompact,
            "list",
            &items,
            |i| ItemRow { id: i.id },
            |i| i.id.to_string(),
        )
        .unwrap();
        insta::assert_snapshot!(out, @r#"[{"id":"a"}]"#);
    }

    #[test]
    fn html_is_rejected_by_generic_renderer() {
        let err = render_single(
            &OutputFormat::Html,
            "categories",
            &Item { id: "a" },
            |i| i.id.to_string(),
            |i| i.id.to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::UnsupportedOutput { .. }));
    }

    #[test]
    fn paint_without_color_is_identity() {
        assert_eq!(paint_category("Security", false), "Security");
        assert_eq!(paint_category("Secuirty", false), "Secuirty");
    }

    #[test]
    fn paint_with_color_wraps_in_ansi() {
        let painted = paint_category("Security", true);
        assert!(painted.contains("\u{1b}["));
        assert!(painted.contains("Security"));
    }
}
