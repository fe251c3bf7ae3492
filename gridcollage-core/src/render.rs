//! Full-canvas redraw against an abstract 2D surface.

use crate::geometry::fit_within;
use crate::grid::GridGeometry;
use crate::layout::{ImageAsset, Layout};

/// Minimal 2D drawing capability needed by the grid.
pub trait RenderSurface<I> {
    type Error;

    /// Clear the rectangle `(0, 0, width, height)`.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    /// Draw `image` scaled into the given rectangle.
    fn draw_image(
        &mut self,
        image: &I,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), Self::Error>;
}

/// Clear the canvas and draw every pair letterboxed in its cell.
///
/// Pairs are drawn in sequence order except `dragged`, which is drawn last so
/// it stays on top while moving.
pub fn render<I, S>(
    layout: &Layout<I>,
    geometry: &GridGeometry,
    dragged: Option<usize>,
    surface: &mut S,
) -> Result<(), S::Error>
where
    I: ImageAsset,
    S: RenderSurface<I>,
{
    let canvas = geometry.canvas_size();
    surface.clear(canvas.width, canvas.height)?;

    let order = (0..layout.len())
        .filter(|i| Some(*i) != dragged)
        .chain(dragged.filter(|i| *i < layout.len()));

    for index in order {
        let placement = layout.placement(index);
        let fitted = fit_within(placement.image.natural_size(), geometry.cell);
        let origin = fitted.origin_at(placement.position);
        surface.draw_image(
            &placement.image,
            origin.x,
            origin.y,
            fitted.width,
            fitted.height,
        )?;
    }

    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::RenderSurface;
    use crate::layout::test_support::TestImage;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCall {
        Clear(f64, f64),
        Image {
            tag: u32,
            x: f64,
            y: f64,
            width: f64,
            height: f64,
        },
    }

    /// Surface that records every call.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        pub fn drawn_tags(&self) -> Vec<u32> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DrawCall::Image { tag, .. } => Some(*tag),
                    DrawCall::Clear(..) => None,
                })
                .collect()
        }
    }

    impl RenderSurface<TestImage> for RecordingSurface {
        type Error = ();

        fn clear(&mut self, width: f64, height: f64) -> Result<(), ()> {
            self.calls.push(DrawCall::Clear(width, height));
            Ok(())
        }

        fn draw_image(
            &mut self,
            image: &TestImage,
            x: f64,
            y: f64,
            width: f64,
            height: f64,
        ) -> Result<(), ()> {
            self.calls.push(DrawCall::Image {
                tag: image.tag,
                x,
                y,
                width,
                height,
            });
            Ok(())
        }
    }
}
