use gridcollage_core::{ExportFormat, Point, Session, DEFAULT_GRID_CONFIG};
use leptos::*;
use web_sys::File;

use crate::components::{GridCanvas, Toast, Toolbar};
use crate::hooks::use_viewport_budget;
use crate::rendering::{download_collage, export_dimensions, load_files, BitmapImage};

#[component]
pub fn App() -> impl IntoView {
    let budget = use_viewport_budget();

    // ========== Collage state ==========
    // The session is mutated from event handlers; `redraw` tells the canvas
    // and every derived view to re-read it. Never notify inside
    // `update_value`, the render effect borrows the session synchronously.
    let session = store_value(Session::<BitmapImage>::new(
        DEFAULT_GRID_CONFIG,
        budget.get_untracked(),
    ));
    let redraw = create_trigger();

    let (toast_message, set_toast_message) = create_signal::<Option<String>>(None);
    let format = create_rw_signal(ExportFormat::default());

    let notify = move |message: &str| {
        log::warn!("{}", message);
        set_toast_message.set(Some(message.to_string()));
    };

    let image_count = create_memo(move |_| {
        redraw.track();
        session.with_value(|s| s.layout().len())
    });
    let has_images = Signal::derive(move || image_count.get() > 0);
    let export_size = create_memo(move |_| {
        redraw.track();
        session.with_value(export_dimensions)
    });

    // ========== Viewport ==========
    create_effect(move |_| {
        let budget = budget.get();
        let changed = session
            .try_update_value(|s| s.resize_viewport(budget))
            .unwrap_or(false);
        if changed {
            redraw.notify();
        }
    });

    // ========== Handlers ==========
    let on_files = Callback::new(move |files: Vec<File>| {
        let admitted = session.with_value(|s| s.admit_selection(files.len(), &notify));
        if !admitted {
            return;
        }
        spawn_local(async move {
            let images = load_files(files).await;
            if images.is_empty() {
                notify("None of the selected files could be read.");
            }
            let result = session.try_update_value(|s| s.replace_images(images));
            if let Some(Err(e)) = result {
                notify(&e.to_string());
            }
            redraw.notify();
        });
    });

    let on_drop = Callback::new(move |(files, point): (Vec<File>, Point)| {
        let admitted = session.with_value(|s| s.admit_drop(files.len(), &notify));
        if !admitted {
            return;
        }
        spawn_local(async move {
            let images = load_files(files).await;
            // Capacity is checked again, other loads may have landed meanwhile
            let result = session.try_update_value(|s| s.add_images(images, point));
            if let Some(Err(e)) = result {
                notify(&e.to_string());
            }
            redraw.notify();
        });
    });

    let on_download = Callback::new(move |_: ()| {
        let snapshot = session.get_value();
        let format = format.get_untracked();
        spawn_local(async move {
            match download_collage(&snapshot, format).await {
                Ok(true) => {}
                Ok(false) => notify("Nothing to export yet."),
                Err(e) => {
                    log::error!("Export failed: {:?}", e);
                    notify("Export failed.");
                }
            }
        });
    });

    let on_clear = Callback::new(move |_: ()| {
        session.update_value(|s| s.reset());
        redraw.notify();
    });

    view! {
        <main class="min-h-screen flex flex-col items-center gap-4 p-4 bg-neutral-900">
            <Toolbar
                image_count=image_count.into()
                max_images=DEFAULT_GRID_CONFIG.max_images
                export_size=export_size.into()
                format=format
                on_files=on_files
                on_download=on_download
                on_clear=on_clear
            />
            <p class="text-white/50 text-xs">
                "Drag an image onto another to swap them."
            </p>
            <GridCanvas
                session=session
                redraw=redraw
                has_images=has_images
                on_drop=on_drop
            />
            <Toast message=toast_message.into() />
        </main>
    }
}
