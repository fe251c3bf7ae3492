//! Drag gesture state machine.
//!
//! `Idle --down on image--> Dragging --move--> Dragging --up--> Idle`.
//! Only one gesture is tracked; input is assumed to come from a single pointer.

use crate::geometry::Point;
use crate::grid::GridGeometry;
use crate::layout::{ImageAsset, Layout};
use crate::snap::{snap, SnapOutcome};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        index: usize,
        /// Pointer position minus the pair's slot position at drag start
        offset: Point,
    },
}

#[derive(Clone, Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn dragged_index(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { index, .. } => Some(index),
            DragState::Idle => None,
        }
    }

    /// Start dragging the topmost image under `pointer`.
    ///
    /// Returns true when a drag started.
    pub fn pointer_down<I: ImageAsset>(
        &mut self,
        pointer: Point,
        layout: &Layout<I>,
        geometry: &GridGeometry,
    ) -> bool {
        if self.is_dragging() {
            return false;
        }

        let Some(index) = layout.top_hit(pointer, geometry.cell) else {
            return false;
        };

        let offset = pointer.offset_from(layout.placement(index).position);
        self.state = DragState::Dragging { index, offset };
        true
    }

    /// Move the dragged pair so it keeps its grab offset under `pointer`.
    ///
    /// Returns true when a redraw is needed.
    pub fn pointer_move<I: ImageAsset>(&mut self, pointer: Point, layout: &mut Layout<I>) -> bool {
        let DragState::Dragging { index, offset } = self.state else {
            return false;
        };

        layout.set_position(index, pointer.offset_from(offset)).is_ok()
    }

    /// Finish the gesture: snap the dragged pair and reflow.
    pub fn pointer_up<I: ImageAsset>(
        &mut self,
        layout: &mut Layout<I>,
        geometry: &GridGeometry,
    ) -> Option<SnapOutcome> {
        let DragState::Dragging { index, .. } = std::mem::take(&mut self.state) else {
            return None;
        };

        if index >= layout.len() {
            return None;
        }
        Some(snap(layout, index, geometry))
    }

    /// Drop the gesture without snapping.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
