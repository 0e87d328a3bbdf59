// ── Core error types ──
//
// Errors surfaced by catalog loading, category parsing, and the link
// opener. Unknown category labels *inside* the catalog are not errors;
// they only make a hook unreachable by specific selections.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Catalog errors ───────────────────────────────────────────────
    #[error("Cannot read catalog {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog {origin} is not a valid hook list: {source}")]
    CatalogParse {
        /// File path, or `"(bundled)"` for the built-in catalog.
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    // ── Lookup errors ────────────────────────────────────────────────
    #[error("Unknown category: {label}")]
    UnknownCategory { label: String },

    #[error("Hook not found: {id}")]
    HookNotFound { id: String },

    // ── Link errors ──────────────────────────────────────────────────
    #[error("Refusing to open {url}: {reason}")]
    UnsupportedLink { url: String, reason: String },

    #[error("Could not launch the system opener for {url}: {source}")]
    OpenerFailed {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
