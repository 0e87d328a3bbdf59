//! SilkCircuit Neon palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

use hookhub_core::BadgeTone;

// ── Core Palette ──────────────────────────────────────────────────────

pub const ELECTRIC_PURPLE: Color = Color::Rgb(225, 53, 255); // #e135ff
pub const NEON_CYAN: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const CORAL: Color = Color::Rgb(255, 106, 193); // #ff6ac1
pub const ELECTRIC_YELLOW: Color = Color::Rgb(241, 250, 140); // #f1fa8c
pub const SUCCESS_GREEN: Color = Color::Rgb(80, 250, 123); // #50fa7b
pub const ERROR_RED: Color = Color::Rgb(255, 99, 99); // #ff6363

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const BG_HIGHLIGHT: Color = Color::Rgb(40, 42, 54); // #282a36
pub const BG_DARK: Color = Color::Rgb(30, 31, 41); // #1e1f29
pub const LIGHT_BLUE: Color = Color::Rgb(139, 233, 253); // #8be9fd
pub const INDIGO: Color = Color::Rgb(150, 130, 255); // #9682ff

// ── Badges ────────────────────────────────────────────────────────────

/// Foreground for a category badge. Neutral is the fallback for unknown labels.
pub fn badge_color(tone: BadgeTone) -> Color {
    match tone {
        BadgeTone::Purple => ELECTRIC_PURPLE,
        BadgeTone::Red => ERROR_RED,
        BadgeTone::Blue => LIGHT_BLUE,
        BadgeTone::Yellow => ELECTRIC_YELLOW,
        BadgeTone::Green => SUCCESS_GREEN,
        BadgeTone::Indigo => INDIGO,
        BadgeTone::Neutral => DIM_WHITE,
    }
}

/// Badge chip: tone on the highlight background.
pub fn badge(tone: BadgeTone) -> Style {
    Style::default()
        .fg(badge_color(tone))
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

/// App name in the header.
pub fn brand() -> Style {
    Style::default()
        .fg(ELECTRIC_PURPLE)
        .add_modifier(Modifier::BOLD)
}

/// Border of the card under the cursor.
pub fn border_focused() -> Style {
    Style::default().fg(ELECTRIC_PURPLE)
}

pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Card body text.
pub fn body() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Outbound link line on a card.
pub fn link() -> Style {
    Style::default()
        .fg(CORAL)
        .add_modifier(Modifier::UNDERLINED)
}

/// Active category in the category bar.
pub fn tab_active() -> Style {
    Style::default()
        .fg(ELECTRIC_PURPLE)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_inactive() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

pub fn notice_info() -> Style {
    Style::default().fg(SUCCESS_GREEN)
}

pub fn notice_error() -> Style {
    Style::default().fg(ERROR_RED)
}
