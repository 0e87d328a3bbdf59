// ── Category types ──
//
// `Category` is the closed set of labels a hook may carry. The "no filter"
// choice lives only in `CategoryFilter`, so it can never compare equal to
// a label read from the catalog.

use std::fmt;
use std::str::FromStr;

use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

use super::hook::Hook;
use crate::error::CoreError;

/// A real hook category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    IntoStaticStr,
)]
pub enum Category {
    Formatting,
    Security,
    Logging,
    Notifications,
    Validation,
    Workflow,
}

impl Category {
    /// Label as it appears in the catalog and on screen.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Exact, case-sensitive lookup of a catalog label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::iter().find(|c| c.label() == label)
    }

    /// Whether a raw catalog label names this category.
    pub fn matches(self, label: &str) -> bool {
        self.label() == label
    }
}

/// The current category selection: no filter, or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// All seven selector options, in display order.
    pub const ALL: [CategoryFilter; 7] = [
        Self::All,
        Self::Only(Category::Formatting),
        Self::Only(Category::Security),
        Self::Only(Category::Logging),
        Self::Only(Category::Notifications),
        Self::Only(Category::Validation),
        Self::Only(Category::Workflow),
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    /// Position in [`CategoryFilter::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&f| f == self).unwrap_or(0)
    }

    /// Option at `index` in selector order (0 = All).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next option in selector order (wraps around).
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous option in selector order (wraps around).
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether `hook` passes this selection.
    pub fn admits(self, hook: &Hook) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => category.matches(&hook.category),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses user input (flags, config), case-insensitively. `all` is the sentinel.
impl FromStr for CategoryFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownCategory {
                label: wanted.to_string(),
            })
    }
}
