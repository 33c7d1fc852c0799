//! Brand wordmark art for the splash screen and the home top bar.

/// Block-letter wordmark rendered on the splash screen.
pub const WORDMARK_LINES: &[&str] = &[
    "▄▀█ █░░ █▀▀ ▄▀█ █▀▄▀█ █ █▄░█ █▀▄",
    "█▀█ █▄▄ █▀░ █▀█ █░▀░█ █ █░▀█ █▄▀",
];

/// Single-line wordmark for the home top bar.
pub const WORDMARK_COMPACT: &str = " ALFAMIND ";
