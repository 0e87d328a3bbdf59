//! Component trait shared by the screens the app loop drives.

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};

use crate::action::Action;

/// A piece of UI that turns input into [`Action`]s and draws itself.
///
/// Input handlers only translate events; state changes happen in
/// [`Component::update`], so every mutation goes through the action queue.
pub trait Component: Send {
    /// Short name used in logs.
    fn id(&self) -> &'static str;

    /// Map a key press to an action, or `None` to ignore it.
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Map a mouse event to an action, or `None` to ignore it.
    fn handle_mouse_event(&mut self, _mouse: MouseEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Apply an action. May return a follow-up action.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect);
}
