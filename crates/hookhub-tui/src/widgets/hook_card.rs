//! A single hook rendered as a bordered card.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use hookhub_core::Hook;

use crate::theme;

/// Rows a card occupies, borders included.
pub const CARD_HEIGHT: u16 = 8;

/// Lines of description shown before the text is cut off.
const DESCRIPTION_LINES: u16 = 3;

pub struct HookCard<'a> {
    hook: &'a Hook,
    selected: bool,
}

impl<'a> HookCard<'a> {
    pub fn new(hook: &'a Hook, selected: bool) -> Self {
        Self { hook, selected }
    }
}

impl Widget for HookCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hook = self.hook;
        let block = Block::default()
            .title(Span::styled(format!(" {} ", hook.name), theme::title_style()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.selected {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        block.render(area, buf);

        let [badge_row, description, author_row, link_row] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(DESCRIPTION_LINES),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Line::from(Span::styled(
            format!(" {} ", hook.category),
            theme::badge(hook.badge_tone()),
        ))
        .render(badge_row, buf);

        Paragraph::new(hook.description.as_str())
            .style(theme::body())
            .wrap(Wrap { trim: true })
            .render(description, buf);

        if let Some(author) = hook.attribution() {
            Line::from(Span::styled(format!("by {author}"), theme::key_hint()))
                .render(author_row, buf);
        }

        Line::from(Span::styled(format!("↗ {}", hook.repo_url), theme::link()))
            .render(link_row, buf);
    }
}
