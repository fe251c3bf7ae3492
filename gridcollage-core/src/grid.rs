//! Grid sizing.
//!
//! Derives the column/row count from the number of images and a uniform cell
//! size that fits the whole grid into the viewport budget without enlarging
//! any image beyond its natural size.

use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// Column and row count of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub columns: usize,
    pub rows: usize,
}

/// Compute the grid shape for `image_count` images.
///
/// `columns = min(count, max_columns)`, `rows = ceil(count / max_columns)`.
/// Returns `None` when there is nothing to lay out.
pub fn compute_grid(image_count: usize, max_columns: usize) -> Option<GridShape> {
    if image_count == 0 || max_columns == 0 {
        return None;
    }

    Some(GridShape {
        columns: image_count.min(max_columns),
        rows: image_count.div_ceil(max_columns),
    })
}

/// Largest natural width and height over all images.
pub fn max_natural_size<I>(naturals: I) -> Size
where
    I: IntoIterator<Item = Size>,
{
    naturals.into_iter().fold(Size::default(), |acc, s| {
        Size::new(acc.width.max(s.width), acc.height.max(s.height))
    })
}

/// Compute the uniform cell size.
///
/// Every cell uses the largest natural width and height, scaled by
/// `min(budget.w / (maxW * columns), budget.h / (maxH * rows), 1)`.
pub fn compute_cell_size(max_natural: Size, shape: GridShape, budget: Size) -> Size {
    let scale = (budget.width / (max_natural.width * shape.columns as f64))
        .min(budget.height / (max_natural.height * shape.rows as f64))
        .min(1.0);

    Size::new(max_natural.width * scale, max_natural.height * scale)
}

/// Derived grid geometry: shape plus cell size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub columns: usize,
    pub rows: usize,
    pub cell: Size,
    /// Largest natural image size, used to map back to export resolution
    pub max_natural: Size,
}

impl GridGeometry {
    /// Compute geometry for a set of natural image sizes.
    ///
    /// Returns `None` for an empty set.
    pub fn compute<I>(naturals: I, max_columns: usize, budget: Size) -> Option<Self>
    where
        I: IntoIterator<Item = Size>,
    {
        let naturals: Vec<Size> = naturals.into_iter().collect();
        let shape = compute_grid(naturals.len(), max_columns)?;
        let max_natural = max_natural_size(naturals);
        if max_natural.is_degenerate() {
            return None;
        }

        Some(Self {
            columns: shape.columns,
            rows: shape.rows,
            cell: compute_cell_size(max_natural, shape, budget),
            max_natural,
        })
    }

    pub fn shape(&self) -> GridShape {
        GridShape {
            columns: self.columns,
            rows: self.rows,
        }
    }

    /// Display canvas size: `cell * (columns, rows)`.
    pub fn canvas_size(&self) -> Size {
        Size::new(
            self.cell.width * self.columns as f64,
            self.cell.height * self.rows as f64,
        )
    }

    /// Canonical top-left of the cell at `index` in row-major order.
    pub fn slot_origin(&self, index: usize) -> Point {
        Point::new(
            (index % self.columns) as f64 * self.cell.width,
            (index / self.columns) as f64 * self.cell.height,
        )
    }

    /// Output surface size at natural resolution.
    pub fn export_size(&self) -> Size {
        Size::new(
            self.max_natural.width * self.columns as f64,
            self.max_natural.height * self.rows as f64,
        )
    }
}
