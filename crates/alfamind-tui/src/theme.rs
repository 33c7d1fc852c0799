//! Alfamind brand palette and semantic styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

// ── Brand palette ─────────────────────────────────────────────────────

pub const BLOOD_RED: Color = Color::Rgb(183, 28, 28); // #b71c1c
pub const BRIGHT_RED: Color = Color::Rgb(239, 83, 80); // #ef5350
pub const DARK_GRAY: Color = Color::Rgb(33, 33, 33); // #212121
pub const LIGHT_GRAY: Color = Color::Rgb(158, 158, 158); // #9e9e9e
pub const OFF_WHITE: Color = Color::Rgb(250, 250, 250); // #fafafa

// ── Extended palette ──────────────────────────────────────────────────

pub const BORDER_GRAY: Color = Color::Rgb(97, 97, 97); // #616161
pub const BG_HIGHLIGHT: Color = Color::Rgb(48, 48, 48); // #303030

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(OFF_WHITE).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel or input.
pub fn border_focused() -> Style {
    Style::default().fg(BRIGHT_RED)
}

/// Border for an unfocused panel or input.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Form button with input focus.
pub fn button_focused() -> Style {
    Style::default()
        .fg(OFF_WHITE)
        .bg(BRIGHT_RED)
        .add_modifier(Modifier::BOLD)
}

/// Form button without focus.
pub fn button_default() -> Style {
    Style::default().fg(LIGHT_GRAY).bg(BG_HIGHLIGHT)
}

/// Inline link with input focus.
pub fn link_focused() -> Style {
    Style::default()
        .fg(BRIGHT_RED)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Inline link without focus.
pub fn link_default() -> Style {
    Style::default().fg(BRIGHT_RED)
}

/// Product price line on the home grid.
pub fn price_style() -> Style {
    Style::default().fg(OFF_WHITE).add_modifier(Modifier::BOLD)
}

/// Key hint text (e.g., "q keluar").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(OFF_WHITE).add_modifier(Modifier::BOLD)
}
