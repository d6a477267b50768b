//! PIN configuration - immutable per-render parameters.
//!
//! Only `max_size`, `mask`, `is_error` and `char_policy` feed the state logic.
//! `style`, `border`, `metrics` and `palette` are consumed by layout and by
//! whatever renderer the host uses.

use unicode_width::UnicodeWidthChar;

use crate::error::{ConfigError, Result};
use crate::theme::PinPalette;
use crate::types::BorderStyle;

use super::normalizer::CharPolicy;

/// Default number of cells.
pub const DEFAULT_MAX_SIZE: usize = 4;

/// How cells are framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinStyle {
    /// Each cell is a framed box.
    #[default]
    Boxed,
    /// Each cell sits on an underline.
    Underlined,
}

/// Cell geometry in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMetrics {
    pub cell_width: u16,
    pub cell_height: u16,
    /// Horizontal space between neighbouring cells.
    pub cell_gap: u16,
    /// Padding around the whole row.
    pub row_padding: u16,
    /// Extra rows below each underlined cell.
    pub underline_thickness: u16,
}

impl Default for PinMetrics {
    fn default() -> Self {
        Self {
            cell_width: 5,
            cell_height: 3,
            cell_gap: 2,
            row_padding: 1,
            underline_thickness: 1,
        }
    }
}

/// Configuration of a PIN field.
#[derive(Debug, Clone, PartialEq)]
pub struct PinConfig {
    pub max_size: usize,
    pub mask: Option<char>,
    pub is_error: bool,
    pub style: PinStyle,
    pub char_policy: CharPolicy,
    /// Frame shape for [`PinStyle::Boxed`].
    pub border: BorderStyle,
    pub metrics: PinMetrics,
    pub palette: PinPalette,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            mask: None,
            is_error: false,
            style: PinStyle::default(),
            char_policy: CharPolicy::default(),
            border: BorderStyle::default(),
            metrics: PinMetrics::default(),
            palette: PinPalette::default(),
        }
    }
}

impl PinConfig {
    /// Config with `max_size` cells and defaults for everything else.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn with_error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    pub fn with_style(mut self, style: PinStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_char_policy(mut self, policy: CharPolicy) -> Self {
        self.char_policy = policy;
        self
    }

    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    pub fn with_metrics(mut self, metrics: PinMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_palette(mut self, palette: PinPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Check the config for values no cell row can be built from.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(ConfigError::ZeroMaxSize);
        }
        if let Some(mask) = self.mask {
            if mask.width() != Some(1) {
                return Err(ConfigError::WideMask(mask));
            }
        }
        let PinMetrics { cell_width, cell_height, .. } = self.metrics;
        if cell_width == 0 || cell_height == 0 {
            return Err(ConfigError::ZeroCellSize {
                width: cell_width,
                height: cell_height,
            });
        }
        Ok(())
    }

    /// Validate and return the config.
    pub fn build(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}
