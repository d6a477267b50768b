//! Palette presets.
//!
//! `default` and `terminal` differ only in the character color: the stock
//! palette paints digits blue, the terminal palette leaves them to the
//! terminal's foreground.

use crate::types::{Attr, Rgba};

use super::PinPalette;

/// Terminal palette - character color follows the terminal.
pub fn terminal() -> PinPalette {
    PinPalette {
        font: Rgba::TERMINAL_DEFAULT,
        ..PinPalette::default()
    }
}

/// Dracula dark palette.
pub fn dracula() -> PinPalette {
    PinPalette {
        font: Rgba::from_rgb_int(0xf8f8f2),
        font_attrs: Attr::BOLD,
        border: Rgba::from_rgb_int(0x6272a4),
        focused_border: Rgba::from_rgb_int(0xbd93f9),
        error_border: Rgba::from_rgb_int(0xff5555),
        cell_background: Rgba::TRANSPARENT,
        cell_on_select: Rgba::from_rgb_int(0x44475a),
    }
}

/// Nord arctic palette.
pub fn nord() -> PinPalette {
    PinPalette {
        font: Rgba::from_rgb_int(0xeceff4),
        font_attrs: Attr::BOLD,
        border: Rgba::from_rgb_int(0x4c566a),
        focused_border: Rgba::from_rgb_int(0x88c0d0),
        error_border: Rgba::from_rgb_int(0xbf616a),
        cell_background: Rgba::TRANSPARENT,
        cell_on_select: Rgba::from_rgb_int(0x3b4252),
    }
}

/// Get a preset palette by name.
///
/// Names are case-insensitive; underscores are ignored.
pub fn get_preset(name: &str) -> Option<PinPalette> {
    match name.to_lowercase().replace('_', "").as_str() {
        "default" => Some(PinPalette::default()),
        "terminal" => Some(terminal()),
        "dracula" => Some(dracula()),
        "nord" => Some(nord()),
        _ => None,
    }
}

/// List all available preset names.
pub fn preset_names() -> &'static [&'static str] {
    &["default", "terminal", "dracula", "nord"]
}
