use gridcollage_core::Size;
use leptos::*;
use leptos_use::use_window_size;

use crate::config::viewport_budget;

/// Reactive maximum canvas footprint, following window resizes.
pub fn use_viewport_budget() -> Signal<Size> {
    let window_size = use_window_size();

    let budget = create_memo(move |_| {
        viewport_budget(window_size.width.get(), window_size.height.get())
    });

    budget.into()
}
