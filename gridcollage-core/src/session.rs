//! Collage session: the single owner of layout, grid geometry and drag state.
//!
//! Every user-facing operation goes through a `Session`. Methods that change
//! what is on screen report it so the caller knows when to redraw.

use crate::config::GridConfig;
use crate::drag::DragController;
use crate::error::LayoutError;
use crate::export::{plan_export, ExportPlan};
use crate::geometry::{Point, Size};
use crate::grid::GridGeometry;
use crate::layout::{ImageAsset, Layout};
use crate::loader::ensure_capacity;
use crate::render::{render, RenderSurface};
use crate::snap::SnapOutcome;

/// Smallest viewport budget side, keeps cell sizes non-zero.
const MIN_BUDGET_SIDE: f64 = 1.0;

/// Sink for user-visible messages.
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<F: Fn(&str)> Notifier for F {
    fn notify(&self, message: &str) {
        self(message)
    }
}

#[derive(Clone, Debug)]
pub struct Session<I> {
    config: GridConfig,
    budget: Size,
    layout: Layout<I>,
    geometry: Option<GridGeometry>,
    drag: DragController,
}

impl<I: ImageAsset> Session<I> {
    pub fn new(config: GridConfig, budget: Size) -> Self {
        Self {
            config,
            budget: clamp_budget(budget),
            layout: Layout::new(config.max_images),
            geometry: None,
            drag: DragController::new(),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn budget(&self) -> Size {
        self.budget
    }

    pub fn layout(&self) -> &Layout<I> {
        &self.layout
    }

    pub fn geometry(&self) -> Option<&GridGeometry> {
        self.geometry.as_ref()
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.drag.dragged_index()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Display canvas size, zero when there is nothing to show.
    pub fn canvas_size(&self) -> Size {
        self.geometry
            .map(|g| g.canvas_size())
            .unwrap_or_default()
    }

    /// Would a selection of `count` files fit?
    pub fn check_replace(&self, count: usize) -> Result<(), LayoutError> {
        ensure_capacity(0, count, self.config.max_images)
    }

    /// Would dropping `count` more files fit?
    pub fn check_add(&self, count: usize) -> Result<(), LayoutError> {
        ensure_capacity(self.layout.len(), count, self.config.max_images)
    }

    /// Gate a file selection before decoding.
    ///
    /// Returns false for an empty selection, or after notifying once when the
    /// selection would exceed capacity.
    pub fn admit_selection(&self, count: usize, notifier: &impl Notifier) -> bool {
        admit(count, self.check_replace(count), notifier)
    }

    /// Gate a drop before decoding; same rules as `admit_selection`.
    pub fn admit_drop(&self, count: usize, notifier: &impl Notifier) -> bool {
        admit(count, self.check_add(count), notifier)
    }

    /// Replace all images (new file selection).
    ///
    /// The layout is rebuilt from `images` alone; when every selected file
    /// failed to decode the session ends up empty. Empty selections are
    /// filtered earlier by `admit_selection`.
    pub fn replace_images(&mut self, images: Vec<I>) -> Result<(), LayoutError> {
        self.check_replace(images.len())?;
        if images.is_empty() {
            self.reset();
            log::debug!("New selection produced no images, layout cleared");
            return Ok(());
        }

        self.drag.cancel();
        self.geometry = GridGeometry::compute(
            images.iter().map(|i| i.natural_size()),
            self.config.max_columns,
            self.budget,
        );
        self.layout.set_all(images, self.geometry.as_ref())?;
        log::debug!("Replaced layout with {} images", self.layout.len());
        Ok(())
    }

    /// Append dropped images, centered under `drop_point`, then reflow.
    pub fn add_images(&mut self, images: Vec<I>, drop_point: Point) -> Result<(), LayoutError> {
        if images.is_empty() {
            return Ok(());
        }
        self.check_add(images.len())?;

        self.drag.cancel();
        for image in images {
            let footprint = self
                .geometry
                .map(|g| g.cell)
                .unwrap_or_else(|| image.natural_size());
            let start = Point::new(
                drop_point.x - footprint.width / 2.0,
                drop_point.y - footprint.height / 2.0,
            );
            self.layout.append(image, start)?;
        }
        self.regrid();
        Ok(())
    }

    /// Drop every image.
    pub fn reset(&mut self) {
        self.drag.cancel();
        self.layout.clear();
        self.geometry = None;
    }

    /// Update the viewport budget. Returns true when the grid was rebuilt.
    pub fn resize_viewport(&mut self, budget: Size) -> bool {
        let budget = clamp_budget(budget);
        if budget == self.budget {
            return false;
        }
        self.budget = budget;
        self.drag.cancel();
        self.regrid();
        !self.layout.is_empty()
    }

    /// Recompute grid geometry from the current images and reflow.
    pub fn regrid(&mut self) {
        self.geometry = GridGeometry::compute(
            self.layout.natural_sizes(),
            self.config.max_columns,
            self.budget,
        );
        if let Some(geometry) = &self.geometry {
            self.layout.reflow(geometry);
            log::debug!(
                "Grid {}x{} cell {:.1}x{:.1}",
                geometry.columns,
                geometry.rows,
                geometry.cell.width,
                geometry.cell.height
            );
        }
    }

    /// Returns true when a drag started.
    pub fn pointer_down(&mut self, pointer: Point) -> bool {
        let Some(geometry) = &self.geometry else {
            return false;
        };
        self.drag.pointer_down(pointer, &self.layout, geometry)
    }

    /// Returns true when the dragged image moved.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        self.drag.pointer_move(pointer, &mut self.layout)
    }

    /// Release the active drag, snapping it into the grid.
    pub fn pointer_up(&mut self) -> Option<SnapOutcome> {
        let Some(geometry) = &self.geometry else {
            self.drag.cancel();
            return None;
        };
        self.drag.pointer_up(&mut self.layout, geometry)
    }

    /// Abort the active drag and put everything back in its cell.
    ///
    /// Returns true when a drag was active.
    pub fn cancel_drag(&mut self) -> bool {
        if !self.drag.is_dragging() {
            return false;
        }
        self.drag.cancel();
        if let Some(geometry) = &self.geometry {
            self.layout.reflow(geometry);
        }
        true
    }

    /// Redraw the whole grid, dragged image on top.
    pub fn render<S: RenderSurface<I>>(&self, surface: &mut S) -> Result<(), S::Error> {
        match &self.geometry {
            Some(geometry) => render(&self.layout, geometry, self.dragged_index(), surface),
            None => surface.clear(0.0, 0.0),
        }
    }

    pub fn export_plan(&self) -> Option<ExportPlan> {
        plan_export(&self.layout, self.geometry.as_ref()?)
    }
}

fn admit(count: usize, check: Result<(), LayoutError>, notifier: &impl Notifier) -> bool {
    if count == 0 {
        return false;
    }
    match check {
        Ok(()) => true,
        Err(e) => {
            notifier.notify(&e.to_string());
            false
        }
    }
}

fn clamp_budget(budget: Size) -> Size {
    Size::new(
        budget.width.max(MIN_BUDGET_SIDE),
        budget.height.max(MIN_BUDGET_SIDE),
    )
}
