use serde::{Deserialize, Serialize};

/// Point in canvas pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn offset_from(&self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// Image rectangle after fitting into a cell, relative to the cell's top-left.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FittedRect {
    pub width: f64,
    pub height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl FittedRect {
    /// Absolute top-left corner when the cell sits at `slot`.
    pub fn origin_at(&self, slot: Point) -> Point {
        Point::new(slot.x + self.offset_x, slot.y + self.offset_y)
    }
}

/// Scale `natural` to fit inside `cell` preserving aspect ratio, centered.
///
/// The ratio is `min(cell.w / natural.w, cell.h / natural.h)` and may exceed 1
/// when the cell is larger than the image. Callers guarantee a non-degenerate
/// natural size.
pub fn fit_within(natural: Size, cell: Size) -> FittedRect {
    let ratio = (cell.width / natural.width).min(cell.height / natural.height);
    let width = natural.width * ratio;
    let height = natural.height * ratio;

    FittedRect {
        width,
        height,
        offset_x: (cell.width - width) / 2.0,
        offset_y: (cell.height - height) / 2.0,
    }
}

/// Check if `pointer` lies on the fitted image of a cell placed at `slot`.
///
/// Bounds are inclusive on all four edges.
pub fn hit_test(pointer: Point, slot: Point, fitted: &FittedRect) -> bool {
    let left = slot.x + fitted.offset_x;
    let top = slot.y + fitted.offset_y;

    pointer.x >= left
        && pointer.x <= left + fitted.width
        && pointer.y >= top
        && pointer.y <= top + fitted.height
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn fit_wide_image_letterboxes_vertically() {
        let fitted = fit_within(Size::new(400.0, 200.0), Size::new(200.0, 200.0));

        assert!(approx(fitted.width, 200.0));
        assert!(approx(fitted.height, 100.0));
        assert!(approx(fitted.offset_x, 0.0));
        assert!(approx(fitted.offset_y, 50.0));
    }

    #[test]
    fn fit_tall_image_letterboxes_horizontally() {
        let fitted = fit_within(Size::new(100.0, 300.0), Size::new(200.0, 150.0));

        assert!(approx(fitted.width, 50.0));
        assert!(approx(fitted.height, 150.0));
        assert!(approx(fitted.offset_x, 75.0));
        assert!(approx(fitted.offset_y, 0.0));
    }

    #[test]
    fn fit_small_image_scales_up_to_cell() {
        // Ratio above 1 is allowed per cell; grid sizing prevents net upscaling.
        let fitted = fit_within(Size::new(50.0, 25.0), Size::new(200.0, 200.0));

        assert!(approx(fitted.width, 200.0));
        assert!(approx(fitted.height, 100.0));
        assert!(approx(fitted.offset_y, 50.0));
    }

    #[test]
    fn fit_exact_size_is_identity() {
        let cell = Size::new(187.5, 250.0);
        let fitted = fit_within(cell, cell);

        assert!(approx(fitted.width, cell.width));
        assert!(approx(fitted.height, cell.height));
        assert!(approx(fitted.offset_x, 0.0));
        assert!(approx(fitted.offset_y, 0.0));
    }

    #[test]
    fn hit_test_edges_are_inclusive() {
        let fitted = fit_within(Size::new(400.0, 200.0), Size::new(200.0, 200.0));
        let slot = Point::new(200.0, 0.0);

        // Image spans x 200..400, y 50..150
        assert!(hit_test(Point::new(200.0, 50.0), slot, &fitted));
        assert!(hit_test(Point::new(400.0, 150.0), slot, &fitted));
        assert!(hit_test(Point::new(300.0, 100.0), slot, &fitted));
    }

    #[test]
    fn hit_test_misses_letterbox_area() {
        let fitted = fit_within(Size::new(400.0, 200.0), Size::new(200.0, 200.0));
        let slot = Point::new(0.0, 0.0);

        assert!(!hit_test(Point::new(100.0, 20.0), slot, &fitted)); // Above image, inside cell
        assert!(!hit_test(Point::new(100.0, 151.0), slot, &fitted)); // Below image
        assert!(!hit_test(Point::new(-0.5, 100.0), slot, &fitted)); // Just left
        assert!(!hit_test(Point::new(200.5, 100.0), slot, &fitted)); // Just right
    }

    #[test]
    fn degenerate_sizes() {
        assert!(Size::new(0.0, 10.0).is_degenerate());
        assert!(Size::new(10.0, -1.0).is_degenerate());
        assert!(Size::new(f64::NAN, 10.0).is_degenerate());
        assert!(!Size::new(1.0, 1.0).is_degenerate());
    }

    #[test]
    fn point_offset_from() {
        let p = Point::new(130.0, 40.0).offset_from(Point::new(100.0, 0.0));
        assert_eq!(p, Point::new(30.0, 40.0));
    }

    #[test]
    fn fitted_rect_serialization_roundtrip() {
        let original = fit_within(Size::new(640.0, 480.0), Size::new(320.0, 320.0));

        let json = serde_json::to_string(&original).unwrap();
        let restored: FittedRect = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
    }
}
