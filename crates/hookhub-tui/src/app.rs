//! Application core: event loop, action dispatch, and frame layout.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use hookhub_core::{Catalog, link};

use crate::action::{Action, Notice};
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screens::browse::BrowseScreen;
use crate::theme;
use crate::tui::Tui;

const TITLE: &str = "HookHub";
const SUBTITLE: &str = "Discover and browse open-source Claude Code hooks";

/// Top-level application state and event loop.
pub struct App {
    screen: Box<dyn Component>,
    running: bool,
    help_visible: bool,
    /// Last link-open outcome, shown in the status bar.
    notice: Option<Notice>,
    /// Components and follow-ups enqueue here; the loop drains it.
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(catalog: &Catalog) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            screen: Box::new(BrowseScreen::new(catalog.snapshot())),
            running: true,
            help_visible: false,
            notice: None,
            action_tx,
            action_rx,
        }
    }

    /// Run the main event loop until the user quits or input closes.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::enter()?;
        let mut events = EventReader::spawn();

        tui.draw(|frame| self.render(frame))?;
        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            let action = match event {
                Event::Key(key) => self.handle_key_event(key)?,
                Event::Mouse(mouse) => self.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
            };
            if let Some(action) = action {
                self.action_tx.send(action)?;
            }

            // Apply everything queued, follow-ups included, before drawing
            self.drain()?;
            if self.running {
                tui.draw(|frame| self.render(frame))?;
            }
        }

        info!("TUI event loop ended");
        Ok(())
    }

    fn drain(&mut self) -> Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            self.process_action(&action)?;
        }
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// everything else goes to the screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::Quit)
                }
                _ => None,
            });
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
            (_, KeyCode::Char('?')) => return Ok(Some(Action::ToggleHelp)),
            _ => {}
        }

        self.screen.handle_key_event(key)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.help_visible {
            return Ok(None);
        }
        self.screen.handle_mouse_event(mouse)
    }

    /// Apply one action to app state, or hand it to the screen.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            // The next draw picks up the new size
            Action::Resize(w, h) => {
                debug!(width = w, height = h, "terminal resized");
            }

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            Action::OpenLink(url) => {
                let notice = match link::open_in_browser(url) {
                    Ok(()) => Notice::Info(format!("Opened {url}")),
                    Err(err) => {
                        warn!(error = %err, "could not open link");
                        Notice::Error(err.to_string())
                    }
                };
                self.action_tx.send(Action::Notify(notice))?;
            }

            Action::Notify(notice) => {
                self.notice = Some(notice.clone());
            }

            other => {
                debug!(screen = self.screen.id(), action = ?other, "dispatching to screen");
                if let Some(follow_up) = self.screen.update(other)? {
                    self.action_tx.send(follow_up)?;
                }
            }
        }

        Ok(())
    }

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let [header, content, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Self::render_header(frame, header);
        self.screen.render(frame, content);
        self.render_status_bar(frame, status);

        if self.help_visible {
            Self::render_help_overlay(frame, area);
        }
    }

    fn render_header(frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(TITLE, theme::brand())),
            Line::from(Span::styled(SUBTITLE, theme::body())),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    /// Bottom line: the latest notice, or key hints when there is none.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.notice {
            Some(Notice::Info(text)) => {
                Line::from(vec![Span::raw(" "), Span::styled(text.as_str(), theme::notice_info())])
            }
            Some(Notice::Error(text)) => Line::from(vec![
                Span::raw(" "),
                Span::styled(text.as_str(), theme::notice_error()),
            ]),
            None => {
                let mut spans = vec![Span::raw(" ")];
                for (key, what) in [
                    ("←/→", "category"),
                    ("j/k", "move"),
                    ("enter", "open"),
                    ("?", "help"),
                    ("q", "quit"),
                ] {
                    spans.push(Span::styled(key, theme::key_hint_key()));
                    spans.push(Span::styled(format!(" {what}  "), theme::key_hint()));
                }
                Line::from(spans)
            }
        };

        frame.render_widget(Paragraph::new(line), area);
    }

    /// Render the help overlay centered on screen.
    fn render_help_overlay(frame: &mut Frame, area: Rect) {
        let help_width = 52u16.min(area.width.saturating_sub(4));
        let help_height = 16u16.min(area.height.saturating_sub(4));

        let help_area = Rect::new(
            area.x + (area.width.saturating_sub(help_width)) / 2,
            area.y + (area.height.saturating_sub(help_height)) / 2,
            help_width,
            help_height,
        );

        frame.render_widget(Clear, help_area);

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_DARK));

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let entry = |key: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {key:<10}"), theme::key_hint_key()),
                Span::styled(what, theme::key_hint()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled("  Categories", Style::default().fg(theme::NEON_CYAN))),
            entry("h/l ←/→", "Previous / next category"),
            entry("0-6", "Jump to category (0 = All)"),
            entry("click", "Select category"),
            Line::from(""),
            Line::from(Span::styled("  Hooks", Style::default().fg(theme::NEON_CYAN))),
            entry("j/k ↑/↓", "Previous / next card"),
            entry("g/G", "First / last card"),
            entry("Enter/o", "Open repository in browser"),
            Line::from(""),
            entry("q", "Quit"),
            Line::from(""),
            Line::from(Span::styled("Esc or ? to close", theme::key_hint()))
                .alignment(Alignment::Center),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}
