//! Taffy Bridge - cell row layout through Taffy.
//!
//! Builds a one-level flex tree (row container + one leaf per cell), runs
//! layout, and extracts integer terminal rectangles.

use taffy::{
    AvailableSpace, Dimension, Display, FlexDirection, LengthPercentage, Rect, Size, Style,
    TaffyTree,
};
use tracing::debug_span;

use crate::error::LayoutError;
use crate::pin::{PinConfig, PinStyle};

use super::types::{CellRect, PinLayout};

// =============================================================================
// STYLE BUILDING
// =============================================================================

fn cell_style(config: &PinConfig) -> Style {
    let metrics = &config.metrics;
    let height = match config.style {
        PinStyle::Boxed => metrics.cell_height,
        PinStyle::Underlined => metrics.cell_height.saturating_add(metrics.underline_thickness),
    };

    Style {
        size: Size {
            width: Dimension::Length(metrics.cell_width as f32),
            height: Dimension::Length(height as f32),
        },
        // Cells keep their size; the row grows instead
        flex_shrink: 0.0,
        ..Default::default()
    }
}

fn row_style(config: &PinConfig) -> Style {
    let padding = LengthPercentage::Length(config.metrics.row_padding as f32);

    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        gap: Size {
            width: LengthPercentage::Length(config.metrics.cell_gap as f32),
            height: LengthPercentage::Length(0.0),
        },
        padding: Rect {
            top: padding,
            right: padding,
            bottom: padding,
            left: padding,
        },
        ..Default::default()
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Compute the rectangles of all cells, relative to the row's top-left.
pub fn compute_pin_layout(config: &PinConfig) -> Result<PinLayout, LayoutError> {
    let _span = debug_span!("pin_layout", max_size = config.max_size, style = ?config.style).entered();

    let mut tree: TaffyTree<()> = TaffyTree::new();

    let leaf_style = cell_style(config);
    let mut leaves = Vec::with_capacity(config.max_size);
    for _ in 0..config.max_size {
        leaves.push(tree.new_leaf(leaf_style.clone())?);
    }

    let root = tree.new_with_children(row_style(config), &leaves)?;

    let available = Size {
        width: AvailableSpace::MaxContent,
        height: AvailableSpace::MaxContent,
    };
    tree.compute_layout(root, available)?;

    let mut cells = Vec::with_capacity(leaves.len());
    for leaf in leaves {
        let layout = tree.layout(leaf)?;
        cells.push(CellRect {
            x: layout.location.x.round() as u16,
            y: layout.location.y.round() as u16,
            width: layout.size.width.round() as u16,
            height: layout.size.height.round() as u16,
        });
    }

    let root_layout = tree.layout(root)?;

    Ok(PinLayout {
        cells,
        width: root_layout.size.width.round() as u16,
        height: root_layout.size.height.round() as u16,
    })
}
