//! Embedded product art.
//!
//! Each catalog [`ImageRef`] key resolves to a small piece of line art;
//! unknown keys fall back to a placeholder frame so a missing asset never
//! breaks the grid layout. Heights vary on purpose — the staggered grid
//! gets its texture from them.

use alfamind_core::ImageRef;

/// Frame shown for image keys without art.
pub const PLACEHOLDER: &[&str] = &[
    "┌───────┐",
    "│ ░░░░░ │",
    "│ ░ ? ░ │",
    "│ ░░░░░ │",
    "└───────┘",
];

const KOPI: &[&str] = &[
    "  ) )  ",
    " (   ( ",
    "┌─────┐",
    "│▒▒▒▒▒│",
    "└─────┘",
];

const MIE: &[&str] = &[
    " ~~~ ~~~ ",
    "┌───────┐",
    "╲ ≈≈≈≈≈ ╱",
    " ╲─────╱ ",
];

const TEH: &[&str] = &[
    "┌─────┐",
    "│░░░░░│",
    "│▒▒▒▒▒│",
    "└─────┘",
];

const BERAS: &[&str] = &[
    "   ╱─╲   ",
    "  ╱───╲  ",
    " │ ▒▒▒ │ ",
    " │ ▒▒▒ │ ",
    " │ ▒▒▒ │ ",
    " ╰─────╯ ",
];

const MINYAK: &[&str] = &[
    "  ┌─┐  ",
    "  │▒│  ",
    " ┌┴─┴┐ ",
    " │▒▒▒│ ",
    " │▒▒▒│ ",
    " └───┘ ",
];

const SABUN: &[&str] = &[
    "╭───────╮",
    "│ ▒▒▒▒▒ │",
    "╰───────╯",
];

const SUSU: &[&str] = &[
    "  ╱─╲  ",
    " ╱───╲ ",
    " │▒▒▒│ ",
    " │▒▒▒│ ",
    " └───┘ ",
];

const ROTI: &[&str] = &[
    " ╭─────╮ ",
    "╭┴─────┴╮",
    "│ ▒▒▒▒▒ │",
    "╰───────╯",
];

const KERIPIK: &[&str] = &[
    "╱▔▔▔▔▔╲",
    "│ ▒▒▒ │",
    "│ ▒▒▒ │",
    "│ ▒▒▒ │",
    "╲▁▁▁▁▁╱",
];

const AIR: &[&str] = &[
    " ┌─┐ ",
    " │░│ ",
    "┌┴─┴┐",
    "│░░░│",
    "│░░░│",
    "└───┘",
];

/// Resolve an image reference to its art lines.
pub fn resolve(image: ImageRef) -> &'static [&'static str] {
    match image.0 {
        "kopi" => KOPI,
        "mie" => MIE,
        "teh" => TEH,
        "beras" => BERAS,
        "minyak" => MINYAK,
        "sabun" => SABUN,
        "susu" => SUSU,
        "roti" => ROTI,
        "keripik" => KERIPIK,
        "air" => AIR,
        _ => PLACEHOLDER,
    }
}
