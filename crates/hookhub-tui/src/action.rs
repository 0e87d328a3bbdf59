//! Actions, the only way state changes in the TUI.
//!
//! Terminal events are mapped to actions by [`crate::app::App`] and the
//! active [`crate::component::Component`]; actions are then applied one at
//! a time by the update loop.

use hookhub_core::CategoryFilter;

/// Outcome shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ── Lifecycle ───────────────────────────────────────────────────
    Quit,
    Resize(u16, u16),

    // ── Overlays ────────────────────────────────────────────────────
    ToggleHelp,

    // ── Category selection ──────────────────────────────────────────
    /// Replace the filter and the derived grid in one step.
    SelectCategory(CategoryFilter),
    NextCategory,
    PrevCategory,

    // ── Card grid navigation ────────────────────────────────────────
    /// Move the card cursor by this many cards (negative moves back).
    MoveSelection(isize),
    SelectFirst,
    SelectLast,

    // ── Links ───────────────────────────────────────────────────────
    /// Hand the selected card's repository URL to the platform opener.
    OpenSelected,
    OpenLink(String),

    // ── Status bar ──────────────────────────────────────────────────
    Notify(Notice),
}
