mod use_drag_interaction;
mod use_viewport_budget;

pub use use_drag_interaction::{use_drag_interaction, DragHandle};
pub use use_viewport_budget::use_viewport_budget;
