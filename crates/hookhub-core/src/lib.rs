//! Catalog model and filtering for HookHub.
//!
//! This crate owns everything the CLI and TUI share:
//!
//! - **[`Catalog`]**: the read-only, ordered collection of [`Hook`]s,
//!   loaded once from a JSON file or from the catalog bundled into the
//!   binary. It is passed to consumers explicitly, never reached through
//!   a global.
//!
//! - **[`derive`]**: the pure category filter. [`CategoryFilter::All`]
//!   returns the catalog snapshot itself; any real [`Category`] returns the
//!   stable subsequence of matching hooks. [`FilteredView`] memoizes the
//!   result against the current selection.
//!
//! - **Domain model** ([`model`]): [`Hook`], the closed [`Category`] set,
//!   the [`CategoryFilter`] selection (a real category or the "no filter"
//!   sentinel), and the total [`BadgeTone`] lookup used for badges.
//!
//! - **[`link`]**: hands a hook's repository URL to the platform opener
//!   as a detached process with no channel back to HookHub.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod link;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::{Catalog, CatalogSource};
pub use error::CoreError;
pub use filter::{FilteredView, derive};
pub use model::{BadgeTone, Category, CategoryFilter, Hook};

/// Shown in place of the card grid when a selection matches nothing.
pub const EMPTY_STATE_MESSAGE: &str = "No hooks found in this category.";
