//! Hook command handlers: list, show, open.

use std::fmt::Write;
use std::sync::Arc;

use tabled::Tabled;
use tracing::debug;

use hookhub_core::{Catalog, CategoryFilter, EMPTY_STATE_MESSAGE, Hook, link};

use crate::cli::{GlobalOpts, ListArgs, OpenArgs, OutputFormat, ShowArgs};
use crate::error::CliError;
use crate::{html, output};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct HookRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Author")]
    author: String,
}

impl HookRow {
    fn new(hook: &Hook, color: bool) -> Self {
        Self {
            id: hook.id.clone(),
            name: hook.name.clone(),
            category: output::paint_category(&hook.category, color),
            author: hook.attribution().unwrap_or("─").to_owned(),
        }
    }
}

/// Multi-line card text for the table view of `show`.
fn detail(hook: &Hook, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  [{}]",
        hook.name,
        output::paint_category(&hook.category, color)
    );
    let _ = writeln!(out, "id: {}", hook.id);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", hook.description);
    let _ = writeln!(out);
    if let Some(author) = hook.attribution() {
        let _ = writeln!(out, "by {author}");
    }
    out.push_str(&hook.repo_url);
    out
}

// ── Handlers ────────────────────────────────────────────────────────

pub fn list(catalog: &Catalog, args: &ListArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let selected: CategoryFilter = args.category.parse()?;
    let hooks = catalog.derive(selected);
    debug!(category = %selected, shown = hooks.len(), "listing hooks");

    let format = global.output_format();
    let out = match format {
        OutputFormat::Html => html::render_grid(&hooks),
        OutputFormat::Table if hooks.is_empty() => {
            if !global.quiet {
                eprintln!("{EMPTY_STATE_MESSAGE}");
            }
            return Ok(());
        }
        _ => {
            let color = output::should_color(&global.color_mode());
            output::render_list(
                &format,
                "list",
                hooks.as_slice(),
                |h: &Arc<Hook>| HookRow::new(h, color),
                |h| h.id.clone(),
            )?
        }
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

pub fn show(catalog: &Catalog, args: &ShowArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let hook = catalog.find(&args.id)?;
    let format = global.output_format();
    let out = if format == OutputFormat::Html {
        html::render_card(hook)
    } else {
        let color = output::should_color(&global.color_mode());
        output::render_single(
            &format,
            "show",
            hook,
            |h: &Arc<Hook>| detail(h, color),
            |h| h.repo_url.clone(),
        )?
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

pub fn open(catalog: &Catalog, args: &OpenArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let hook = catalog.find(&args.id)?;
    link::open_in_browser(&hook.repo_url)?;
    if !global.quiet {
        eprintln!("Opened {}", hook.repo_url);
    }
    Ok(())
}
