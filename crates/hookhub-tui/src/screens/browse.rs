//! Browse screen: category bar over a responsive grid of hook cards.

use std::cell::Cell;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use tracing::debug;

use hookhub_core::filter::HookList;
use hookhub_core::{CategoryFilter, EMPTY_STATE_MESSAGE, FilteredView, Hook};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::category_bar::{category_bar, hit_test};
use crate::widgets::hook_card::{CARD_HEIGHT, HookCard};

/// Grid columns for a given width: one below 100, two below 150, else three.
pub fn columns_for_width(width: u16) -> usize {
    match width {
        0..100 => 1,
        100..150 => 2,
        _ => 3,
    }
}

/// Card positions visible in `area`, scrolled so the cursor's row is shown.
///
/// Returns `(index into the derived list, card rect)` in reading order.
fn card_slots(area: Rect, len: usize, cursor: usize) -> Vec<(usize, Rect)> {
    if len == 0 || area.is_empty() {
        return Vec::new();
    }

    let columns = columns_for_width(area.width);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let first_row = (cursor / columns).saturating_sub(visible_rows - 1);

    let cols = Layout::horizontal(vec![Constraint::Fill(1); columns]).split(area);

    let mut slots = Vec::with_capacity(visible_rows * columns);
    let mut y = area.y;
    for row in first_row..first_row + visible_rows {
        if y >= area.bottom() {
            break;
        }
        let height = CARD_HEIGHT.min(area.bottom() - y);
        for (col, column_area) in cols.iter().enumerate() {
            let index = row * columns + col;
            if index >= len {
                return slots;
            }
            slots.push((index, Rect::new(column_area.x, y, column_area.width, height)));
        }
        y = y.saturating_add(CARD_HEIGHT);
    }
    slots
}

pub struct BrowseScreen {
    view: FilteredView,
    cursor: usize,
    /// Where the category bar and the grid were last drawn, for mouse hits.
    bar_area: Cell<Rect>,
    grid_area: Cell<Rect>,
}

impl BrowseScreen {
    pub fn new(hooks: HookList) -> Self {
        Self {
            view: FilteredView::new(hooks),
            cursor: 0,
            bar_area: Cell::new(Rect::default()),
            grid_area: Cell::new(Rect::default()),
        }
    }

    fn selected_hook(&self) -> Option<&Hook> {
        self.view.hooks().get(self.cursor).map(AsRef::as_ref)
    }

    /// Switch category. Filter and grid change together; the cursor returns
    /// to the first card only when the selection actually changed.
    fn select_category(&mut self, filter: CategoryFilter) {
        if self.view.select(filter) {
            self.cursor = 0;
            debug!(category = %filter, shown = self.view.len(), "category selected");
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.view.len();
        if len == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    fn handle_click(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);

        let bar = self.bar_area.get();
        if bar.contains(position) {
            return hit_test(self.view.selected(), column - bar.x).map(Action::SelectCategory);
        }

        card_slots(self.grid_area.get(), self.view.len(), self.cursor)
            .into_iter()
            .find(|(_, rect)| rect.contains(position))
            .and_then(|(index, _)| {
                isize::try_from(index)
                    .ok()
                    .zip(isize::try_from(self.cursor).ok())
                    .map(|(to, from)| Action::MoveSelection(to - from))
            })
    }

    fn render_grid(&self, frame: &mut Frame, area: Rect) {
        let title = format!(
            " {} · {} of {} hooks ",
            self.view.selected(),
            self.view.len(),
            self.view.total()
        );
        let block = Block::default()
            .title(Span::styled(title, theme::title_style()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_default());

        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.grid_area.set(inner);

        if self.view.is_empty() {
            let [_, middle, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(inner);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    EMPTY_STATE_MESSAGE,
                    theme::key_hint(),
                )))
                .alignment(Alignment::Center),
                middle,
            );
            return;
        }

        let hooks = self.view.hooks();
        for (index, rect) in card_slots(inner, hooks.len(), self.cursor) {
            frame.render_widget(HookCard::new(&hooks[index], index == self.cursor), rect);
        }
    }
}

impl Component for BrowseScreen {
    fn id(&self) -> &'static str {
        "browse"
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('h') | KeyCode::Left => Action::PrevCategory,
            KeyCode::Char('l') | KeyCode::Right => Action::NextCategory,
            KeyCode::Char(c @ '0'..='6') => {
                let index = c.to_digit(10).and_then(|d| usize::try_from(d).ok());
                match index.and_then(CategoryFilter::from_index) {
                    Some(filter) => Action::SelectCategory(filter),
                    None => return Ok(None),
                }
            }
            KeyCode::Char('j') | KeyCode::Down => Action::MoveSelection(1),
            KeyCode::Char('k') | KeyCode::Up => Action::MoveSelection(-1),
            KeyCode::Char('g') | KeyCode::Home => Action::SelectFirst,
            KeyCode::Char('G') | KeyCode::End => Action::SelectLast,
            KeyCode::Enter | KeyCode::Char('o') => Action::OpenSelected,
            _ => return Ok(None),
        };
        Ok(Some(action))
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        Ok(match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            MouseEventKind::ScrollDown => Some(Action::MoveSelection(1)),
            MouseEventKind::ScrollUp => Some(Action::MoveSelection(-1)),
            _ => None,
        })
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::SelectCategory(filter) => self.select_category(*filter),
            Action::NextCategory => self.select_category(self.view.selected().next()),
            Action::PrevCategory => self.select_category(self.view.selected().prev()),
            Action::MoveSelection(delta) => self.move_cursor(*delta),
            Action::SelectFirst => self.cursor = 0,
            Action::SelectLast => self.cursor = self.view.len().saturating_sub(1),
            Action::OpenSelected => {
                return Ok(self
                    .selected_hook()
                    .map(|hook| Action::OpenLink(hook.repo_url.clone())));
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let [bar, grid] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        // One-column inset lines the bar up with the grid border
        let bar_line = Rect::new(bar.x + 1, bar.y, bar.width.saturating_sub(1), 1);
        frame.render_widget(Paragraph::new(category_bar(self.view.selected())), bar_line);
        self.bar_area.set(bar_line);

        self.render_grid(frame, grid);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    use hookhub_core::Category;

    use super::*;

    fn hook(id: &str, category: &str) -> Arc<Hook> {
        Arc::new(Hook {
            id: id.into(),
            name: id.to_uppercase(),
            category: category.into(),
            description: format!("{id} description"),
            repo_url: format!("https://github.com/example/{id}"),
            author: None,
            tags: None,
        })
    }

    fn screen() -> BrowseScreen {
        BrowseScreen::new(Arc::new(vec![
            hook("a", "Security"),
            hook("b", "Logging"),
            hook("c", "Security"),
            hook("d", "Secuirty"),
        ]))
    }

    fn ids(screen: &BrowseScreen) -> Vec<&str> {
        screen.view.hooks().iter().map(|h| h.id.as_str()).collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Feed a key through the component the way the app loop does.
    fn press(screen: &mut BrowseScreen, code: KeyCode) -> Option<Action> {
        let action = screen.handle_key_event(key(code)).unwrap()?;
        screen.update(&action).unwrap()
    }

    #[test]
    fn column_breakpoints() {
        assert_eq!(columns_for_width(60), 1);
        assert_eq!(columns_for_width(99), 1);
        assert_eq!(columns_for_width(100), 2);
        assert_eq!(columns_for_width(149), 2);
        assert_eq!(columns_for_width(150), 3);
    }

    #[test]
    fn digit_keys_jump_to_categories() {
        let mut s = screen();
        assert_eq!(ids(&s), ["a", "b", "c", "d"]);

        press(&mut s, KeyCode::Char('2'));
        assert_eq!(s.view.selected(), Category::Security.into());
        assert_eq!(ids(&s), ["a", "c"]);

        press(&mut s, KeyCode::Char('4'));
        assert!(s.view.hooks().is_empty());

        press(&mut s, KeyCode::Char('0'));
        assert_eq!(ids(&s), ["a", "b", "c", "d"]);
    }

    #[test]
    fn arrow_keys_cycle_and_wrap() {
        let mut s = screen();
        press(&mut s, KeyCode::Left);
        assert_eq!(s.view.selected(), Category::Workflow.into());
        press(&mut s, KeyCode::Char('l'));
        assert_eq!(s.view.selected(), CategoryFilter::All);
    }

    #[test]
    fn cursor_clamps_and_resets_on_category_change() {
        let mut s = screen();
        press(&mut s, KeyCode::Char('G'));
        assert_eq!(s.cursor, 3);
        press(&mut s, KeyCode::Down);
        assert_eq!(s.cursor, 3);

        // Re-selecting the active category keeps the cursor
        s.update(&Action::SelectCategory(CategoryFilter::All)).unwrap();
        assert_eq!(s.cursor, 3);

        press(&mut s, KeyCode::Char('2'));
        assert_eq!(s.cursor, 0);
        press(&mut s, KeyCode::Up);
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn open_selected_yields_repo_url() {
        let mut s = screen();
        press(&mut s, KeyCode::Char('j'));
        assert_eq!(
            press(&mut s, KeyCode::Enter),
            Some(Action::OpenLink("https://github.com/example/b".into()))
        );

        press(&mut s, KeyCode::Char('4'));
        assert_eq!(press(&mut s, KeyCode::Char('o')), None);
    }

    #[test]
    fn slots_follow_the_cursor() {
        // Two rows of cards fit; three columns at this width.
        let area = Rect::new(0, 0, 150, CARD_HEIGHT * 2);

        let first: Vec<usize> = card_slots(area, 10, 0).iter().map(|(i, _)| *i).collect();
        assert_eq!(first, [0, 1, 2, 3, 4, 5]);

        let scrolled: Vec<usize> = card_slots(area, 10, 9).iter().map(|(i, _)| *i).collect();
        assert_eq!(scrolled, [6, 7, 8, 9]);

        assert!(card_slots(area, 0, 0).is_empty());
    }

    #[test]
    fn narrow_grid_stacks_cards() {
        let area = Rect::new(0, 0, 80, CARD_HEIGHT * 3);
        let slots = card_slots(area, 2, 0);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].1, Rect::new(0, 0, 80, CARD_HEIGHT));
        assert_eq!(slots[1].1, Rect::new(0, CARD_HEIGHT, 80, CARD_HEIGHT));
    }
}
