//! Layout output types.

/// A cell's rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    /// Check if a point is inside this rect.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }

    /// Same rect shifted by an origin.
    pub fn offset(&self, dx: u16, dy: u16) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }
}

/// Computed layout of a PIN row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PinLayout {
    /// One rect per cell, in index order.
    pub cells: Vec<CellRect>,
    /// Size of the whole row including padding.
    pub width: u16,
    pub height: u16,
}

impl PinLayout {
    /// Index of the cell under a point, relative to the row's top-left.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        self.cells.iter().position(|cell| cell.contains(x, y))
    }

    /// Same layout placed at `(x, y)` on screen.
    pub fn at(&self, x: u16, y: u16) -> Self {
        Self {
            cells: self.cells.iter().map(|c| c.offset(x, y)).collect(),
            ..self.clone()
        }
    }
}
