// ── Badge tones ──
//
// Total mapping from a category label to a badge tone. Every label maps
// to something; unrecognized labels get `Neutral`.

use strum::{Display, IntoStaticStr};

use super::category::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum BadgeTone {
    Purple,
    Red,
    Blue,
    Yellow,
    Green,
    Indigo,
    /// Fallback for labels outside the closed category set.
    Neutral,
}

impl BadgeTone {
    /// Tone for a raw catalog label. Matching is exact, like the filter.
    pub fn for_label(label: &str) -> Self {
        Category::from_label(label).map_or(Self::Neutral, Self::from)
    }

    /// CSS class used by the HTML export, e.g. `badge-red`.
    pub fn css_class(self) -> String {
        let name: &'static str = self.into();
        format!("badge-{name}")
    }
}

impl From<Category> for BadgeTone {
    fn from(category: Category) -> Self {
        match category {
            Category::Formatting => Self::Purple,
            Category::Security => Self::Red,
            Category::Logging => Self::Blue,
            Category::Notifications => Self::Yellow,
            Category::Validation => Self::Green,
            Category::Workflow => Self::Indigo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_map_to_their_tone() {
        assert_eq!(BadgeTone::for_label("Formatting"), BadgeTone::Purple);
        assert_eq!(BadgeTone::for_label("Security"), BadgeTone::Red);
        assert_eq!(BadgeTone::for_label("Logging"), BadgeTone::Blue);
        assert_eq!(BadgeTone::for_label("Notifications"), BadgeTone::Yellow);
        assert_eq!(BadgeTone::for_label("Validation"), BadgeTone::Green);
        assert_eq!(BadgeTone::for_label("Workflow"), BadgeTone::Indigo);
    }

    #[test]
    fn unknown_and_sentinel_labels_fall_back() {
        assert_eq!(BadgeTone::for_label("Secuirty"), BadgeTone::Neutral);
        assert_eq!(BadgeTone::for_label("security"), BadgeTone::Neutral);
        assert_eq!(BadgeTone::for_label("All"), BadgeTone::Neutral);
        assert_eq!(BadgeTone::for_label(""), BadgeTone::Neutral);
    }

    #[test]
    fn css_class_names() {
        assert_eq!(BadgeTone::Red.css_class(), "badge-red");
        assert_eq!(BadgeTone::Neutral.css_class(), "badge-neutral");
    }
}
