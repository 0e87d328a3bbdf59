mod cli;
mod commands;
mod error;
mod html;
mod output;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use hookhub_core::Catalog;

use crate::cli::{Cli, ColorMode, Command, GlobalOpts, OutputFormat};
use crate::error::CliError;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        mut global,
        command,
    } = cli;

    match command {
        // Config commands don't need a catalog
        Command::Config(args) => commands::config_cmd::handle(args, &global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "hookhub", &mut std::io::stdout());
            Ok(())
        }

        // Everything else reads the catalog
        cmd => {
            let cfg = hookhub_config::load_config()?;
            apply_config_defaults(&mut global, &cfg)?;

            let path = hookhub_config::resolve_catalog_path(global.catalog.as_deref(), &cfg);
            let catalog = Catalog::open(path.as_deref())?;

            tracing::debug!(command = ?cmd, source = %catalog.source(), "dispatching command");
            commands::dispatch(cmd, &catalog, &global)
        }
    }
}

/// Fill output and color from the config file where no flag or env was given.
///
/// A config value that names no known format is an error, not a silent
/// fallback to the built-in default.
fn apply_config_defaults(
    global: &mut GlobalOpts,
    cfg: &hookhub_config::Config,
) -> Result<(), CliError> {
    if global.output.is_none() {
        global.output = Some(parse_default("defaults.output", &cfg.defaults.output)?);
    }
    if global.color.is_none() {
        global.color = Some(parse_default("defaults.color", &cfg.defaults.color)?);
    }
    Ok(())
}

fn parse_default<T: ValueEnum>(field: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|reason| CliError::Validation {
        field: field.into(),
        reason,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn global_opts(args: &[&str]) -> GlobalOpts {
        let argv = ["hookhub"].iter().chain(args).chain(&["list"]);
        Cli::try_parse_from(argv).unwrap().global
    }

    #[test]
    fn config_fills_unset_output_and_color() {
        let mut global = global_opts(&[]);
        let mut cfg = hookhub_config::Config::default();
        cfg.defaults.output = "JSON".into();
        cfg.defaults.color = "never".into();

        apply_config_defaults(&mut global, &cfg).unwrap();
        assert_eq!(global.output, Some(OutputFormat::Json));
        assert_eq!(global.color, Some(ColorMode::Never));
    }

    #[test]
    fn flags_win_over_config() {
        let mut global = global_opts(&["-o", "plain"]);
        let mut cfg = hookhub_config::Config::default();
        cfg.defaults.output = "xml".into();

        apply_config_defaults(&mut global, &cfg).unwrap();
        assert_eq!(global.output, Some(OutputFormat::Plain));
    }

    #[test]
    fn unknown_config_output_is_rejected() {
        let mut global = global_opts(&[]);
        let mut cfg = hookhub_config::Config::default();
        cfg.defaults.output = "xml".into();

        let err = apply_config_defaults(&mut global, &cfg).unwrap_err();
        assert!(matches!(
            &err,
            CliError::Validation { field, .. } if field == "defaults.output"
        ));
        assert_eq!(err.exit_code(), error::exit_code::CATALOG);
    }

    #[test]
    fn unknown_config_color_is_rejected() {
        let mut global = global_opts(&[]);
        let mut cfg = hookhub_config::Config::default();
        cfg.defaults.color = "sometimes".into();

        let err = apply_config_defaults(&mut global, &cfg).unwrap_err();
        assert!(matches!(
            err,
            CliError::Validation { ref field, .. } if field == "defaults.color"
        ));
    }
}
