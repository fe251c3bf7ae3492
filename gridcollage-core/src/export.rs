//! Export planning at natural resolution.
//!
//! The display grid is a scaled-down view. For export every cell is blown back
//! up to the largest natural image size and each image is drawn at its own
//! natural size from its cell's top-left.

use crate::geometry::Size;
use crate::grid::GridGeometry;
use crate::layout::{ImageAsset, Layout};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
}

impl ExportFormat {
    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    /// JPEG has no alpha, so the surface is filled before drawing.
    pub fn needs_background(self) -> bool {
        matches!(self, ExportFormat::Jpeg)
    }

    /// Parse the value of a format `<select>` option.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            _ => None,
        }
    }

    pub fn file_name(self, basename: &str) -> String {
        format!("{}.{}", basename, self.extension())
    }
}

/// Where one image goes on the output surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportPlacement {
    /// Index into the layout
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Fully specified output bitmap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportPlan {
    pub size: Size,
    pub placements: Vec<ExportPlacement>,
}

/// Map each pair from display space to natural resolution.
///
/// `(x, y) = (slot / cell) * max_natural`; output is
/// `max_natural.width * columns` by `max_natural.height * rows`.
/// Returns `None` for an empty layout.
pub fn plan_export<I: ImageAsset>(layout: &Layout<I>, geometry: &GridGeometry) -> Option<ExportPlan> {
    if layout.is_empty() {
        return None;
    }

    let cell = geometry.cell;
    let natural = geometry.max_natural;

    let placements = layout
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let size = p.image.natural_size();
            ExportPlacement {
                index,
                x: p.position.x / cell.width * natural.width,
                y: p.position.y / cell.height * natural.height,
                width: size.width,
                height: size.height,
            }
        })
        .collect();

    Some(ExportPlan {
        size: geometry.export_size(),
        placements,
    })
}
