pub mod canvas_utils;
pub mod export;
pub mod images;

pub use canvas_utils::{canvas_point, draw_session, get_2d_context, CanvasSurface};
pub use export::{download_collage, export_dimensions};
pub use images::{image_files, load_files, BitmapImage};
