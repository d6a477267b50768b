//! Layout Module
//!
//! Positions the cells of a PIN row using [Taffy](https://github.com/DioxusLabs/taffy).
//!
//! The row is a flex container (`gap = cell_gap`, `padding = row_padding`)
//! with one fixed-size leaf per cell. The resulting rectangles drive both the
//! host renderer and tap hit-testing.
//!
//! # Example
//!
//! ```ignore
//! use spark_pin::layout::compute_pin_layout;
//! use spark_pin::pin::PinConfig;
//!
//! let layout = compute_pin_layout(&PinConfig::default())?;
//! assert_eq!(layout.hit_test(2, 2), Some(0));
//! ```

mod taffy_bridge;
mod types;

pub use taffy_bridge::compute_pin_layout;
pub use types::*;
