use gridcollage_core::{Point, RenderSurface, Session, Size};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::images::BitmapImage;

/// Get 2D rendering context from canvas.
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    Ok(canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("No 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?)
}

/// `RenderSurface` backed by a 2D canvas context.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl RenderSurface<BitmapImage> for CanvasSurface<'_> {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn draw_image(
        &mut self,
        image: &BitmapImage,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), JsValue> {
        self.ctx
            .draw_image_with_image_bitmap_and_dw_and_dh(image.bitmap(), x, y, width, height)
    }
}

/// Set the canvas backing store to `size`, rounded up to whole pixels.
///
/// Returns true if the size changed (which also clears the canvas).
pub fn resize_canvas(canvas: &HtmlCanvasElement, size: Size) -> bool {
    let width = size.width.ceil() as u32;
    let height = size.height.ceil() as u32;
    if canvas.width() == width && canvas.height() == height {
        return false;
    }
    canvas.set_width(width);
    canvas.set_height(height);
    true
}

/// Resize the canvas to the grid and redraw the whole session.
pub fn draw_session(
    session: &Session<BitmapImage>,
    canvas: &HtmlCanvasElement,
) -> Result<(), JsValue> {
    resize_canvas(canvas, session.canvas_size());
    let ctx = get_2d_context(canvas)?;
    session.render(&mut CanvasSurface::new(&ctx))
}

/// Map a client-space point into canvas pixel space.
///
/// `css` is the element's on-screen size, `backing` its pixel buffer size;
/// they differ when the page zooms or CSS scales the canvas.
pub fn client_to_canvas(client: Point, origin: Point, css: Size, backing: Size) -> Point {
    let scale_x = if css.width > 0.0 { backing.width / css.width } else { 1.0 };
    let scale_y = if css.height > 0.0 { backing.height / css.height } else { 1.0 };

    Point::new(
        (client.x - origin.x) * scale_x,
        (client.y - origin.y) * scale_y,
    )
}

/// Canvas-relative pixel coordinates for a pointer or touch at `(client_x, client_y)`.
pub fn canvas_point(canvas: &HtmlCanvasElement, client_x: f64, client_y: f64) -> Point {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas(
        Point::new(client_x, client_y),
        Point::new(rect.left(), rect.top()),
        Size::new(rect.width(), rect.height()),
        Size::new(canvas.width() as f64, canvas.height() as f64),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_point_is_offset_by_canvas_origin() {
        let p = client_to_canvas(
            Point::new(150.0, 80.0),
            Point::new(100.0, 50.0),
            Size::new(400.0, 200.0),
            Size::new(400.0, 200.0),
        );
        assert_eq!(p, Point::new(50.0, 30.0));
    }

    #[test]
    fn client_point_is_scaled_to_backing_store() {
        let p = client_to_canvas(
            Point::new(110.0, 60.0),
            Point::new(10.0, 10.0),
            Size::new(200.0, 100.0),
            Size::new(400.0, 200.0),
        );
        assert_eq!(p, Point::new(200.0, 100.0));
    }

    #[test]
    fn zero_sized_element_does_not_divide_by_zero() {
        let p = client_to_canvas(
            Point::new(5.0, 5.0),
            Point::ORIGIN,
            Size::new(0.0, 0.0),
            Size::new(0.0, 0.0),
        );
        assert_eq!(p, Point::new(5.0, 5.0));
    }
}
