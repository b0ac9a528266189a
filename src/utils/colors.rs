/// Terminal colour palettes, one per theme.
use crate::models::Theme;
use crate::settings::current_theme;
use ansi_term::{Colour, Style};

pub struct Palette {
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    /// Titles, timestamps and the running clock
    pub accent: Style,
    /// Secondary text such as empty notes
    pub muted: Style,
}

pub fn palette_for(theme: Theme) -> Palette {
    match theme {
        Theme::System => Palette {
            info: Colour::Blue.bold(),
            success: Colour::Green.bold(),
            warning: Colour::Yellow.bold(),
            error: Colour::Red.bold(),
            accent: Colour::Blue.bold(),
            muted: Style::new().dimmed(),
        },
        // darker tones, readable on white backgrounds
        Theme::Light => Palette {
            info: Colour::Fixed(25).bold(),
            success: Colour::Fixed(28).bold(),
            warning: Colour::Fixed(130).bold(),
            error: Colour::Fixed(124).bold(),
            accent: Colour::Fixed(25).bold(),
            muted: Colour::Fixed(244).normal(),
        },
        Theme::Dark => Palette {
            info: Colour::Fixed(117).bold(),
            success: Colour::Fixed(120).bold(),
            warning: Colour::Fixed(221).bold(),
            error: Colour::Fixed(203).bold(),
            accent: Colour::Fixed(117).bold(),
            muted: Colour::Fixed(245).normal(),
        },
    }
}

/// Palette of the theme currently applied.
pub fn palette() -> Palette {
    palette_for(current_theme())
}

/// Returns the muted style when the field is empty, plain otherwise.
pub fn colorize_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => palette().muted.paint("--").to_string(),
    }
}
