// ── Category derivation ──
//
// `derive` is the whole filtering core: a stable, single-field equality
// filter with an identity short-circuit for `All`. `FilteredView` keeps
// the last result so consumers only recompute when the selection moves.

use std::sync::Arc;

use tracing::debug;

use crate::model::{CategoryFilter, Hook};

/// Shared, immutable list of hooks. Cloning is an `Arc` bump.
pub type HookList = Arc<Vec<Arc<Hook>>>;

/// Derive the visible hooks for `selected`.
///
/// `All` returns `entries` itself (same allocation, same order). A real
/// category returns the matching hooks in catalog order.
pub fn derive(entries: &HookList, selected: CategoryFilter) -> HookList {
    match selected {
        CategoryFilter::All => Arc::clone(entries),
        CategoryFilter::Only(category) => {
            let matched: Vec<Arc<Hook>> = entries
                .iter()
                .filter(|hook| category.matches(&hook.category))
                .cloned()
                .collect();
            debug!(
                category = %category,
                total = entries.len(),
                matched = matched.len(),
                "derived filtered hook list"
            );
            Arc::new(matched)
        }
    }
}

/// A selection plus the hooks it currently admits.
///
/// The selection and the derived list are always updated together, so a
/// reader never observes one without the other.
#[derive(Debug, Clone)]
pub struct FilteredView {
    entries: HookList,
    selected: CategoryFilter,
    derived: HookList,
}

impl FilteredView {
    /// Start with no filter applied.
    pub fn new(entries: HookList) -> Self {
        let derived = Arc::clone(&entries);
        Self {
            entries,
            selected: CategoryFilter::All,
            derived,
        }
    }

    /// Change the selection. Returns `true` if it differed from the current one.
    ///
    /// Re-selecting the active option keeps the cached list.
    pub fn select(&mut self, selected: CategoryFilter) -> bool {
        if selected == self.selected {
            return false;
        }
        self.derived = derive(&self.entries, selected);
        self.selected = selected;
        true
    }

    pub fn selected(&self) -> CategoryFilter {
        self.selected
    }

    /// Hooks admitted by the current selection, in catalog order.
    pub fn hooks(&self) -> &[Arc<Hook>] {
        &self.derived
    }

    /// Cheap handle to the current derived list.
    pub fn snapshot(&self) -> HookList {
        Arc::clone(&self.derived)
    }

    /// Total number of hooks in the underlying catalog.
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.derived.len()
    }

    pub fn is_empty(&self) -> bool {
        self.derived.is_empty()
    }
}
