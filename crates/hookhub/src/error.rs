//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use hookhub_config::ConfigError;
use hookhub_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CATALOG: i32 = 5;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Catalog ──────────────────────────────────────────────────────

    #[error("Could not load the hook catalog")]
    #[diagnostic(
        code(hookhub::catalog),
        help(
            "Point --catalog (or HOOKHUB_CATALOG) at a JSON array of hooks,\n\
             or remove `catalog` from the config file to use the bundled catalog."
        )
    )]
    Catalog {
        #[source]
        source: CoreError,
    },

    // ── Lookups ──────────────────────────────────────────────────────

    #[error("Unknown category '{label}'")]
    #[diagnostic(code(hookhub::unknown_category), help("Valid categories: {valid}"))]
    UnknownCategory { label: String, valid: String },

    #[error("Hook '{id}' not found")]
    #[diagnostic(
        code(hookhub::not_found),
        help("Run: hookhub list -o plain to see available hook ids")
    )]
    NotFound { id: String },

    // ── Links ────────────────────────────────────────────────────────

    #[error("Could not open the repository link")]
    #[diagnostic(
        code(hookhub::link),
        help("Copy the URL from `hookhub show <ID>` and open it manually.")
    )]
    Link {
        #[source]
        source: CoreError,
    },

    // ── Usage ────────────────────────────────────────────────────────

    #[error("Output format '{format}' is not supported by `{command}`")]
    #[diagnostic(
        code(hookhub::unsupported_output),
        help("Use table, json, json-compact, yaml, or plain.")
    )]
    UnsupportedOutput { format: String, command: String },


    #[error("Config file {path} already exists")]
    #[diagnostic(
        code(hookhub::confirmation_required),
        help("Use --yes (-y) to overwrite it in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { path: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(hookhub::config))]
    Config(#[from] ConfigError),

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(
        code(hookhub::validation),
        help("Fix `{field}` in the config file, or override it with a flag.")
    )]
    Validation { field: String, reason: String },

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Could not render config: {0}")]
    #[diagnostic(code(hookhub::toml))]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Catalog { .. } | Self::Config(_) | Self::Validation { .. } => {
                exit_code::CATALOG
            }
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::UnknownCategory { .. }
            | Self::UnsupportedOutput { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CatalogRead { .. } | CoreError::CatalogParse { .. } => {
                CliError::Catalog { source: err }
            }

            CoreError::UnknownCategory { label } => CliError::UnknownCategory {
                label,
                valid: hookhub_core::CategoryFilter::ALL
                    .iter()
                    .map(|f| f.label().to_lowercase())
                    .collect::<Vec<_>>()
                    .join(", "),
            },

            CoreError::HookNotFound { id } => CliError::NotFound { id },

            CoreError::UnsupportedLink { .. } | CoreError::OpenerFailed { .. } => {
                CliError::Link { source: err }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_lists_valid_choices() {
        let err = CliError::from(CoreError::UnknownCategory {
            label: "Secuirty".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
        match err {
            CliError::UnknownCategory { valid, .. } => assert_eq!(
                valid,
                "all, formatting, security, logging, notifications, validation, workflow"
            ),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn missing_hook_maps_to_not_found() {
        let err = CliError::from(CoreError::HookNotFound { id: "x".into() });
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
    }

    #[test]
    fn catalog_errors_use_catalog_exit_code() {
        let err = CliError::from(CoreError::CatalogRead {
            path: "/nope.json".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert_eq!(err.exit_code(), exit_code::CATALOG);
    }
}
