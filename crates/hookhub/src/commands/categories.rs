//! Category listing.

use serde::Serialize;
use tabled::Tabled;

use hookhub_core::Catalog;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct CategoryCount {
    category: &'static str,
    hooks: usize,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Hooks")]
    hooks: usize,
}

pub fn handle(catalog: &Catalog, global: &GlobalOpts) -> Result<(), CliError> {
    let counts: Vec<CategoryCount> = catalog
        .counts_by_filter()
        .into_iter()
        .map(|(filter, hooks)| CategoryCount {
            category: filter.label(),
            hooks,
        })
        .collect();

    let color = output::should_color(&global.color_mode());
    let out = output::render_list(
        &global.output_format(),
        "categories",
        &counts,
        |c| CategoryRow {
            category: output::paint_category(c.category, color),
            hooks: c.hooks,
        },
        |c| c.category.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
