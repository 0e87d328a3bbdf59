//! Command dispatch: bridges CLI args -> catalog queries -> output formatting.

pub mod categories;
pub mod config_cmd;
pub mod hooks;
pub mod util;

use hookhub_core::Catalog;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a catalog-bound command to the appropriate handler.
pub fn dispatch(cmd: Command, catalog: &Catalog, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::List(args) => hooks::list(catalog, &args, global),
        Command::Show(args) => hooks::show(catalog, &args, global),
        Command::Open(args) => hooks::open(catalog, &args, global),
        Command::Categories => categories::handle(catalog, global),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
