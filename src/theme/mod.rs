//! Cell palette.
//!
//! Maps the resolver's decisions to colors. The resolver says *which* token
//! a cell uses (`BorderEmphasis`, `CellFill`); the palette says what that
//! token looks like. Nothing here feeds back into state logic.
//!
//! # Example
//!
//! ```rust
//! use spark_pin::pin::BorderEmphasis;
//! use spark_pin::theme::{get_preset, PinPalette};
//! use spark_pin::types::Rgba;
//!
//! let palette = PinPalette::default();
//! assert_eq!(palette.border_color(BorderEmphasis::Error), Rgba::RED);
//!
//! let nord = get_preset("nord").unwrap();
//! assert_ne!(nord.focused_border, palette.focused_border);
//! ```

pub mod presets;

pub use presets::*;

use crate::pin::{BorderEmphasis, CellFill};
use crate::types::{Attr, Rgba};

/// Colors and text attributes for a PIN row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinPalette {
    /// Color of the characters (or mask) drawn in filled cells.
    pub font: Rgba,
    pub font_attrs: Attr,
    pub border: Rgba,
    pub focused_border: Rgba,
    pub error_border: Rgba,
    /// Background of cells without a character.
    pub cell_background: Rgba,
    /// Background of cells holding a character.
    pub cell_on_select: Rgba,
}

impl Default for PinPalette {
    /// Blue characters, gray frames, dark-gray focus, red errors and
    /// transparent backgrounds.
    fn default() -> Self {
        Self {
            font: Rgba::BLUE,
            font_attrs: Attr::NONE,
            border: Rgba::GRAY,
            focused_border: Rgba::DARK_GRAY,
            error_border: Rgba::RED,
            cell_background: Rgba::TRANSPARENT,
            cell_on_select: Rgba::TRANSPARENT,
        }
    }
}

impl PinPalette {
    /// Border (or underline) color for an emphasis level.
    pub fn border_color(&self, emphasis: BorderEmphasis) -> Rgba {
        match emphasis {
            BorderEmphasis::Normal => self.border,
            BorderEmphasis::Focused => self.focused_border,
            BorderEmphasis::Error => self.error_border,
        }
    }

    /// Background color for a fill token.
    pub fn fill_color(&self, fill: CellFill) -> Rgba {
        match fill {
            CellFill::Empty => self.cell_background,
            CellFill::Filled => self.cell_on_select,
        }
    }

    pub fn with_font(mut self, font: Rgba) -> Self {
        self.font = font;
        self
    }

    pub fn with_font_attrs(mut self, attrs: Attr) -> Self {
        self.font_attrs = attrs;
        self
    }
}
