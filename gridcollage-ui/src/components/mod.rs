pub mod grid_canvas;
pub mod toast;
pub mod toolbar;

pub use grid_canvas::GridCanvas;
pub use toast::Toast;
pub use toolbar::Toolbar;
