//! Error types

use thiserror::Error;

/// Errors raised while building a [`PinConfig`](crate::pin::PinConfig).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A PIN needs at least one cell
    #[error("max_size must be at least 1")]
    ZeroMaxSize,

    /// The mask has to fit in a single terminal column
    #[error("mask character {0:?} is not one column wide")]
    WideMask(char),

    /// Cells with no area cannot be laid out or tapped
    #[error("cell size must be non-zero (got {width}x{height})")]
    ZeroCellSize { width: u16, height: u16 },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while computing the cell layout
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The layout engine rejected the cell tree
    #[error("layout computation failed: {0}")]
    Taffy(#[from] taffy::TaffyError),
}
