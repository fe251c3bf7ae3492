pub mod config;
pub mod drag;
pub mod error;
pub mod export;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod loader;
pub mod render;
pub mod session;
pub mod snap;

pub use config::{GridConfig, DEFAULT_GRID_CONFIG};
pub use drag::{DragController, DragState};
pub use error::{DecodeError, LayoutError};
pub use export::{plan_export, ExportFormat, ExportPlacement, ExportPlan};
pub use geometry::{fit_within, hit_test, FittedRect, Point, Size};
pub use grid::{compute_cell_size, compute_grid, max_natural_size, GridGeometry, GridShape};
pub use layout::{ImageAsset, Layout, Placement};
pub use loader::{ensure_capacity, load_all};
pub use render::{render, RenderSurface};
pub use session::{Notifier, Session};
pub use snap::{snap, snap_target, SnapOutcome};
