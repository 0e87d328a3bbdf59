//! Config subcommand handlers.

use std::path::PathBuf;

use hookhub_config::{self as config, Config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init { with_catalog } => init(with_catalog, global),

        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let out = toml::to_string_pretty(&cfg)?;
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}

fn init(with_catalog: Option<PathBuf>, global: &GlobalOpts) -> Result<(), CliError> {
    let path = config::config_path();
    if path.exists() {
        let prompt = format!("Overwrite existing config at {}?", path.display());
        let approved = util::confirm(&prompt, global.yes).map_err(|_| {
            CliError::NonInteractiveRequiresYes {
                path: path.display().to_string(),
            }
        })?;
        if !approved {
            return Ok(());
        }
    }

    let cfg = Config {
        catalog: with_catalog,
        ..Config::default()
    };
    let written = config::save_config(&cfg)?;
    if !global.quiet {
        eprintln!("Config written to {}", written.display());
    }
    Ok(())
}
