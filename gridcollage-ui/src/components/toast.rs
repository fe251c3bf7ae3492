//! Transient notice for capacity warnings and export failures.

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use std::time::Duration;

use crate::config::TOAST_DURATION_MS;

/// Bottom-centered notice. Each new message restarts the hide timer.
#[component]
pub fn Toast(
    /// Latest message; `None` until the first notice
    message: Signal<Option<String>>,
) -> impl IntoView {
    let shown = create_rw_signal::<Option<String>>(None);
    let pending_hide = store_value::<Option<TimeoutHandle>>(None);

    create_effect(move |_| {
        let Some(text) = message.get() else {
            return;
        };

        if let Some(handle) = pending_hide.get_value() {
            handle.clear();
        }
        shown.set(Some(text));

        let handle = set_timeout_with_handle(
            move || shown.set(None),
            Duration::from_millis(TOAST_DURATION_MS),
        );
        match handle {
            Ok(handle) => pending_hide.set_value(Some(handle)),
            Err(e) => log::warn!("Toast timer unavailable: {:?}", e),
        }
    });

    // Keep the last text while fading out
    let last_text = create_memo(move |previous: Option<&String>| {
        shown
            .get()
            .or_else(|| previous.cloned())
            .unwrap_or_default()
    });

    view! {
        <div
            role="status"
            aria-live="polite"
            class="fixed inset-x-0 bottom-8 z-50 flex justify-center pointer-events-none"
        >
            <span class=move || {
                let visibility = if shown.with(Option::is_some) { "opacity-100" } else { "opacity-0" };
                format!(
                    "rounded-md bg-red-900/90 px-4 py-2 text-sm text-white shadow-lg \
                     transition-opacity duration-300 {visibility}"
                )
            }>
                {move || last_text.get()}
            </span>
        </div>
    }
}
