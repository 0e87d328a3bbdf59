//! Category bar: every selector option on one line, the active one
//! bracketed and highlighted.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use hookhub_core::CategoryFilter;

use crate::theme;

const SEPARATOR: &str = "  ";

/// Build the bar for the given active selection.
///
/// Spans alternate label, separator, label, ...; [`hit_test`] relies on
/// that layout.
pub fn category_bar(active: CategoryFilter) -> Line<'static> {
    let mut spans = Vec::with_capacity(CategoryFilter::ALL.len() * 2);

    for (i, filter) in CategoryFilter::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, theme::key_hint()));
        }

        if *filter == active {
            spans.push(Span::styled(
                format!("[{}]", filter.label()),
                theme::tab_active().add_modifier(Modifier::UNDERLINED),
            ));
        } else {
            spans.push(Span::styled(filter.label(), theme::tab_inactive()));
        }
    }

    Line::from(spans)
}

/// Option under `column`, counted from the left edge of the bar.
pub fn hit_test(active: CategoryFilter, column: u16) -> Option<CategoryFilter> {
    let column = usize::from(column);
    let mut x = 0;
    for (i, span) in category_bar(active).spans.iter().enumerate() {
        let width = span.width();
        if column < x + width {
            return if i % 2 == 0 {
                CategoryFilter::from_index(i / 2)
            } else {
                None
            };
        }
        x += width;
    }
    None
}

#[cfg(test)]
mod tests {
    use hookhub_core::Category;

    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn brackets_only_the_active_option() {
        let line = category_bar(CategoryFilter::Only(Category::Logging));
        assert_eq!(
            text(&line),
            "All  Formatting  Security  [Logging]  Notifications  Validation  Workflow"
        );
    }

    #[test]
    fn hit_test_maps_columns_to_options() {
        let active = CategoryFilter::All;
        // "[All]  Formatting  Security ..."
        assert_eq!(hit_test(active, 0), Some(CategoryFilter::All));
        assert_eq!(hit_test(active, 4), Some(CategoryFilter::All));
        assert_eq!(hit_test(active, 5), None);
        assert_eq!(hit_test(active, 7), Some(Category::Formatting.into()));
        assert_eq!(hit_test(active, 19), Some(Category::Security.into()));
        assert_eq!(hit_test(active, 500), None);
    }
}
