// ── Catalog store ──
//
// The catalog is loaded once, before anything renders, and never changes
// afterwards. Consumers receive it by reference and enumerate it; there
// are no mutation operations.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::info;

use crate::error::CoreError;
use crate::filter::{self, HookList};
use crate::model::{CategoryFilter, Hook};

/// Catalog compiled into the binary, used when no file is configured.
const BUNDLED_CATALOG: &str = include_str!("../data/hooks.json");

/// Where the catalog was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
    /// Built in memory (tests, embedding).
    Inline,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => f.write_str("(bundled)"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Inline => f.write_str("(inline)"),
        }
    }
}

/// The ordered, read-only hook catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    hooks: HookList,
    source: CatalogSource,
}

impl Catalog {
    /// Wrap an in-memory list of hooks, preserving order.
    pub fn from_hooks(hooks: Vec<Hook>) -> Self {
        Self {
            hooks: Arc::new(hooks.into_iter().map(Arc::new).collect()),
            source: CatalogSource::Inline,
        }
    }

    /// Parse the catalog shipped inside the binary.
    pub fn bundled() -> Result<Self, CoreError> {
        Self::parse(BUNDLED_CATALOG, CatalogSource::Bundled)
    }

    /// Read and parse a catalog JSON file.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CoreError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, CatalogSource::File(path.to_path_buf()))
    }

    /// Load from `path` if given, otherwise fall back to the bundled catalog.
    pub fn open(path: Option<&Path>) -> Result<Self, CoreError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    fn parse(json: &str, source: CatalogSource) -> Result<Self, CoreError> {
        let hooks: Vec<Hook> =
            serde_json::from_str(json).map_err(|err| CoreError::CatalogParse {
                origin: source.to_string(),
                source: err,
            })?;
        info!(source = %source, count = hooks.len(), "catalog loaded");
        Ok(Self {
            hooks: Arc::new(hooks.into_iter().map(Arc::new).collect()),
            source,
        })
    }

    /// Every hook, in catalog order.
    pub fn hooks(&self) -> &[Arc<Hook>] {
        &self.hooks
    }

    /// Cheap handle to the full list (an `Arc` clone).
    pub fn snapshot(&self) -> HookList {
        Arc::clone(&self.hooks)
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Hooks visible under `selected`. See [`filter::derive`].
    pub fn derive(&self, selected: CategoryFilter) -> HookList {
        filter::derive(&self.hooks, selected)
    }

    /// First hook with the given id.
    pub fn find(&self, id: &str) -> Result<&Arc<Hook>, CoreError> {
        self.hooks
            .iter()
            .find(|h| h.id == id)
            .ok_or_else(|| CoreError::HookNotFound { id: id.into() })
    }

    /// Number of hooks each selector option admits, in selector order.
    pub fn counts_by_filter(&self) -> IndexMap<CategoryFilter, usize> {
        CategoryFilter::ALL
            .iter()
            .map(|&f| (f, self.hooks.iter().filter(|h| f.admits(h)).count()))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::model::Category;

    const SAMPLE: &str = r#"[
        { "id": "a", "name": "A", "category": "Security",
          "description": "first", "repoUrl": "https://example.com/a", "author": "ada" },
        { "id": "b", "name": "B", "category": "Logging",
          "description": "second", "repoUrl": "https://example.com/b", "tags": ["audit"] },
        { "id": "c", "name": "C", "category": "Security",
          "description": "third", "repoUrl": "https://example.com/c" }
    ]"#;

    fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn bundled_catalog_parses_with_unique_ids() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.source(), &CatalogSource::Bundled);

        let mut ids: Vec<_> = catalog.hooks().iter().map(|h| h.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn bundled_catalog_covers_every_category() {
        let catalog = Catalog::bundled().unwrap();
        for (filter, count) in catalog.counts_by_filter() {
            assert!(count > 0, "no bundled hooks for {filter}");
        }
    }

    #[test]
    fn load_preserves_file_order() {
        let file = write_catalog(SAMPLE);
        let catalog = Catalog::load(file.path()).unwrap();
        let ids: Vec<_> = catalog.hooks().iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(catalog.source(), &CatalogSource::File(file.path().to_path_buf()));
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let err = Catalog::load(Path::new("/nonexistent/hookhub/hooks.json")).unwrap_err();
        assert!(matches!(err, CoreError::CatalogRead { .. }));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let file = write_catalog(r#"[{ "id": "a", "name": "A" }]"#);
        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CoreError::CatalogParse { .. }));
    }

    #[test]
    fn open_without_path_uses_bundled() {
        let catalog = Catalog::open(None).unwrap();
        assert_eq!(catalog.source(), &CatalogSource::Bundled);
    }

    #[test]
    fn find_by_id() {
        let catalog = Catalog::load(write_catalog(SAMPLE).path()).unwrap();
        assert_eq!(catalog.find("b").unwrap().name, "B");
        assert!(matches!(
            catalog.find("zzz").unwrap_err(),
            CoreError::HookNotFound { .. }
        ));
    }

    #[test]
    fn counts_follow_selector_order() {
        let catalog = Catalog::load(write_catalog(SAMPLE).path()).unwrap();
        let counts: Vec<_> = catalog
            .counts_by_filter()
            .into_iter()
            .map(|(f, n)| (f.label(), n))
            .collect();
        assert_eq!(
            counts,
            [
                ("All", 3),
                ("Formatting", 0),
                ("Security", 2),
                ("Logging", 1),
                ("Notifications", 0),
                ("Validation", 0),
                ("Workflow", 0),
            ]
        );
    }

    #[test]
    fn derive_through_catalog() {
        let catalog = Catalog::load(write_catalog(SAMPLE).path()).unwrap();
        let security = catalog.derive(Category::Security.into());
        assert_eq!(security.len(), 2);
        assert!(Arc::ptr_eq(&catalog.snapshot(), &catalog.derive(CategoryFilter::All)));
    }
}
