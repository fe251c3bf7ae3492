//! Browser shell settings.
//!
//! Grid limits live in `gridcollage_core::DEFAULT_GRID_CONFIG`; this module
//! only holds what depends on the page around the canvas.

use gridcollage_core::Size;

/// Vertical space reserved for the toolbar, hint line and page margins.
pub const CHROME_HEIGHT_PX: f64 = 160.0;

/// Share of the window width the canvas may use.
pub const CANVAS_WIDTH_FRACTION: f64 = 0.95;

/// How long the toast stays visible.
pub const TOAST_DURATION_MS: u64 = 2500;

/// Encoder quality passed to `toBlob` for JPEG exports.
pub const JPEG_QUALITY: f64 = 0.92;

/// Maximum canvas footprint for a window of the given size.
pub fn viewport_budget(window_width: f64, window_height: f64) -> Size {
    Size::new(
        (window_width * CANVAS_WIDTH_FRACTION).max(0.0),
        (window_height - CHROME_HEIGHT_PX).max(0.0),
    )
}
