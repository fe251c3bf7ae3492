use std::cell::Cell;

use gridcollage_core::{
    compute_cell_size, compute_grid, fit_within, max_natural_size, GridGeometry, ImageAsset,
    Point, Session, Size, SnapOutcome, DEFAULT_GRID_CONFIG,
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Photo {
    id: u32,
    size: Size,
}

impl Photo {
    fn new(id: u32, width: f64, height: f64) -> Self {
        Self {
            id,
            size: Size::new(width, height),
        }
    }
}

impl ImageAsset for Photo {
    fn natural_size(&self) -> Size {
        self.size
    }
}

fn mixed_photos(count: u32) -> Vec<Photo> {
    let sizes = [
        (1920.0, 1080.0),
        (1080.0, 1920.0),
        (800.0, 600.0),
        (640.0, 640.0),
        (1200.0, 800.0),
        (300.0, 900.0),
        (1024.0, 768.0),
        (500.0, 250.0),
    ];
    (0..count)
        .map(|i| {
            let (w, h) = sizes[i as usize % sizes.len()];
            Photo::new(i, w, h)
        })
        .collect()
}

fn ids(session: &Session<Photo>) -> Vec<u32> {
    session.layout().iter().map(|p| p.image.id).collect()
}

fn assert_canonical(session: &Session<Photo>) {
    let geometry = session.geometry().expect("grid should exist");
    for (i, p) in session.layout().iter().enumerate() {
        let expected = Point::new(
            (i % geometry.columns) as f64 * geometry.cell.width,
            (i / geometry.columns) as f64 * geometry.cell.height,
        );
        assert_eq!(p.position, expected, "pair {} not in its canonical cell", i);
    }
}

#[test]
fn grid_for_five_images_is_four_by_two() {
    let shape = compute_grid(5, 4).unwrap();
    assert_eq!((shape.columns, shape.rows), (4, 2));
}

#[test]
fn grid_for_three_images_is_three_by_one() {
    let shape = compute_grid(3, 4).unwrap();
    assert_eq!((shape.columns, shape.rows), (3, 1));
}

#[test]
fn two_landscape_images_in_a_square_budget() {
    let max = max_natural_size([Size::new(400.0, 300.0), Size::new(800.0, 600.0)]);
    let shape = compute_grid(2, 4).unwrap();

    let cell = compute_cell_size(max, shape, Size::new(500.0, 500.0));

    assert_eq!(max, Size::new(800.0, 600.0));
    assert_eq!(cell, Size::new(250.0, 187.5));
}

#[test]
fn fit_of_presized_image_is_identity() {
    let geometry =
        GridGeometry::compute(mixed_photos(6).iter().map(|p| p.size), 4, Size::new(900.0, 700.0))
            .unwrap();
    let fitted = fit_within(geometry.cell, geometry.cell);

    assert!((fitted.width - geometry.cell.width).abs() < 1e-9);
    assert!((fitted.height - geometry.cell.height).abs() < 1e-9);
    assert!(fitted.offset_x.abs() < 1e-9);
    assert!(fitted.offset_y.abs() < 1e-9);
}

#[test]
fn dragging_third_image_onto_first_swaps_them() {
    let mut session = Session::new(DEFAULT_GRID_CONFIG, Size::new(1200.0, 800.0));
    session.replace_images(mixed_photos(4)).unwrap();
    let geometry = *session.geometry().unwrap();

    // Grab the center of cell 2 and release just inside half a cell of cell 0.
    let grab = Point::new(
        2.0 * geometry.cell.width + geometry.cell.width / 2.0,
        geometry.cell.height / 2.0,
    );
    assert!(session.pointer_down(grab));
    let release = Point::new(
        geometry.cell.width / 2.0 + geometry.cell.width * 0.4,
        geometry.cell.height / 2.0 + geometry.cell.height * 0.3,
    );
    assert!(session.pointer_move(release));
    let outcome = session.pointer_up();

    assert_eq!(outcome, Some(SnapOutcome::Swapped { with: 0 }));
    assert_eq!(ids(&session), vec![2, 1, 0, 3]);
    assert_eq!(session.layout().placement(0).position, geometry.slot_origin(0));
    assert_eq!(session.layout().placement(2).position, geometry.slot_origin(2));
}

#[test]
fn ninth_image_drop_is_rejected_with_one_notification() {
    let mut session = Session::new(DEFAULT_GRID_CONFIG, Size::new(1200.0, 800.0));
    session.replace_images(mixed_photos(8)).unwrap();
    let before = ids(&session);
    let notified = Cell::new(0);
    let notifier = |_: &str| notified.set(notified.get() + 1);

    let admitted = session.admit_drop(1, &notifier);
    if admitted {
        session
            .add_images(vec![Photo::new(99, 10.0, 10.0)], Point::ORIGIN)
            .unwrap();
    }

    assert!(!admitted);
    assert_eq!(notified.get(), 1);
    assert_eq!(ids(&session), before);
    assert_canonical(&session);
}

#[test]
fn layout_stays_canonical_through_a_session() {
    let mut session = Session::new(DEFAULT_GRID_CONFIG, Size::new(1000.0, 600.0));
    session.replace_images(mixed_photos(3)).unwrap();
    assert_canonical(&session);

    session
        .add_images(mixed_photos(2), Point::new(500.0, 100.0))
        .unwrap();
    assert_eq!(session.layout().len(), 5);
    assert_canonical(&session);

    session.resize_viewport(Size::new(640.0, 480.0));
    assert_canonical(&session);

    let geometry = *session.geometry().unwrap();
    let canvas = geometry.canvas_size();
    assert!(canvas.width <= 640.0 + 1e-9);
    assert!(canvas.height <= 480.0 + 1e-9);

    // Drag the last image far off-canvas; it is clamped back into the grid.
    let grab = Point::new(geometry.cell.width / 2.0, geometry.cell.height * 1.5);
    assert!(session.pointer_down(grab));
    session.pointer_move(Point::new(-5000.0, 5000.0));
    session.pointer_up();
    assert_canonical(&session);
    assert!(session.layout().len() <= DEFAULT_GRID_CONFIG.max_images);
}

#[test]
fn snapping_twice_changes_nothing() {
    let mut session = Session::new(DEFAULT_GRID_CONFIG, Size::new(1000.0, 600.0));
    session.replace_images(mixed_photos(6)).unwrap();
    let geometry = *session.geometry().unwrap();
    let before: Vec<Point> = session.layout().iter().map(|p| p.position).collect();

    for _ in 0..2 {
        let center = Point::new(
            geometry.slot_origin(1).x + geometry.cell.width / 2.0,
            geometry.cell.height / 2.0,
        );
        if session.pointer_down(center) {
            session.pointer_up();
        }
    }

    let after: Vec<Point> = session.layout().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
    assert_eq!(ids(&session), vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn export_plan_covers_every_image_at_natural_scale() {
    let mut session = Session::new(DEFAULT_GRID_CONFIG, Size::new(800.0, 600.0));
    session.replace_images(mixed_photos(5)).unwrap();

    let plan = session.export_plan().unwrap();

    // max natural 1920x1920, 4 columns, 2 rows
    assert_eq!(plan.size, Size::new(7680.0, 3840.0));
    assert_eq!(plan.placements.len(), 5);
    for (i, placement) in plan.placements.iter().enumerate() {
        let column = (i % 4) as f64;
        let row = (i / 4) as f64;
        assert!((placement.x - column * 1920.0).abs() < 1e-6);
        assert!((placement.y - row * 1920.0).abs() < 1e-6);
    }
}
