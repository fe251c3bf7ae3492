use gridcollage_core::{Point, Session};
use leptos::*;
use web_sys::{DragEvent, File};

use crate::hooks::use_drag_interaction;
use crate::rendering::{canvas_point, draw_session, image_files, BitmapImage};

/// The collage canvas plus the drop zone around it.
#[component]
pub fn GridCanvas(
    /// Shared collage state
    session: StoredValue<Session<BitmapImage>>,
    /// Notified whenever the session changed and the canvas must be redrawn
    redraw: Trigger,
    /// Whether any image is loaded
    has_images: Signal<bool>,
    /// Files dropped onto the stage, with the drop point in canvas pixels
    on_drop: Callback<(Vec<File>, Point)>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<leptos::html::Canvas>();
    let (is_drop_target, set_is_drop_target) = create_signal(false);

    let drag = use_drag_interaction(canvas_ref, session, redraw);

    // Render effect - redraws on every session change
    create_effect(move |_| {
        redraw.track();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let result = session.with_value(|s| draw_session(s, &canvas));
        if let Err(e) = result {
            log::error!("Failed to draw collage: {:?}", e);
        }
    });

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_drop_target.set(true);
    };

    let on_dragleave = move |_: DragEvent| set_is_drop_target.set(false);

    let on_stage_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_drop_target.set(false);

        let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        let files = image_files(&files);
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let point = canvas_point(&canvas, ev.client_x() as f64, ev.client_y() as f64);
        on_drop.call((files, point));
    };

    view! {
        <div
            class=move || format!(
                "relative flex items-center justify-center min-h-[200px] w-full \
                 rounded-lg border-2 border-dashed {}",
                if is_drop_target.get() { "border-sky-400 bg-sky-50/10" } else { "border-white/20" }
            )
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_stage_drop
        >
            <Show when=move || !has_images.get()>
                <p class="absolute text-white/60 text-sm pointer-events-none">
                    "Drop images here or choose files above"
                </p>
            </Show>
            <canvas
                node_ref=canvas_ref
                class="block"
                style=move || format!(
                    "touch-action: none; cursor: {};",
                    if drag.is_dragging.get() { "grabbing" } else { "grab" }
                )
            />
        </div>
    }
}
