// ── Hook domain type ──

use serde::{Deserialize, Serialize};

use super::badge::BadgeTone;

/// One catalog entry, deserialized straight from the catalog JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hook {
    /// Stable identifier; the rendering key for cards.
    pub id: String,
    pub name: String,
    /// Category label exactly as written in the catalog. Kept as a string
    /// so a mistyped label still loads and stays visible under `All`.
    pub category: String,
    pub description: String,
    pub repo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Reserved. Nothing filters or renders on tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Hook {
    /// Badge tone for this hook's label, falling back to neutral.
    pub fn badge_tone(&self) -> BadgeTone {
        BadgeTone::for_label(&self.category)
    }

    /// Author to credit on the card. Absent and empty authors both yield `None`.
    pub fn attribution(&self) -> Option<&str> {
        self.author.as_deref().filter(|a| !a.is_empty())
    }
}
