//! Snap resolution for a released drag.

use crate::geometry::Point;
use crate::grid::GridGeometry;
use crate::layout::{ImageAsset, Layout};
use serde::{Deserialize, Serialize};

/// What happened to the dragged pair.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SnapOutcome {
    /// Target cell had no other pair; the dragged pair moved there before reflow.
    Moved { to: Point },
    /// Dragged pair exchanged places with the occupant of the target cell.
    Swapped { with: usize },
}

/// Nearest cell origin to `position`, clamped so the cell stays on the canvas.
pub fn snap_target(position: Point, geometry: &GridGeometry) -> Point {
    let cell = geometry.cell;
    let canvas = geometry.canvas_size();

    let x = (position.x / cell.width).round() * cell.width;
    let y = (position.y / cell.height).round() * cell.height;

    Point::new(
        x.clamp(0.0, (canvas.width - cell.width).max(0.0)),
        y.clamp(0.0, (canvas.height - cell.height).max(0.0)),
    )
}

/// Resolve the drag-end position of `index` and reflow the grid.
///
/// A collision reorders the sequence; positions are then always re-derived
/// from order, so the dragged image lands in the target cell and the occupant
/// takes the dragged image's former cell.
///
/// Panics if `index` is out of range.
pub fn snap<I: ImageAsset>(
    layout: &mut Layout<I>,
    index: usize,
    geometry: &GridGeometry,
) -> SnapOutcome {
    let current = layout.placement(index).position;
    let target = snap_target(current, geometry);

    let outcome = match layout.occupant_near(target, geometry.cell, index) {
        Some(occupant) => {
            layout.swap_pairs(index, occupant);
            SnapOutcome::Swapped { with: occupant }
        }
        None => {
            layout.place(index, target);
            SnapOutcome::Moved { to: target }
        }
    };

    log::debug!(
        "snap index={} from=({:.1}, {:.1}) -> {:?}",
        index,
        current.x,
        current.y,
        outcome
    );

    layout.reflow(geometry);
    outcome
}
