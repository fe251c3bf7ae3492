//! Grid configuration.
//!
//! Limits and naming used by both the layout engine and the browser shell.

/// Configuration for the collage grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Maximum number of images in one collage
    pub max_images: usize,
    /// Maximum number of columns before wrapping to a new row
    pub max_columns: usize,
    /// File name (without extension) used for downloads
    pub export_basename: &'static str,
}

/// Default grid configuration: eight images, four per row.
pub static DEFAULT_GRID_CONFIG: GridConfig = GridConfig {
    max_images: 8,
    max_columns: 4,
    export_basename: "combined-image",
};

impl Default for GridConfig {
    fn default() -> Self {
        DEFAULT_GRID_CONFIG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        assert_eq!(DEFAULT_GRID_CONFIG.max_images, 8);
        assert_eq!(DEFAULT_GRID_CONFIG.max_columns, 4);
        assert_eq!(DEFAULT_GRID_CONFIG.export_basename, "combined-image");
        assert_eq!(GridConfig::default(), DEFAULT_GRID_CONFIG);
    }
}
