use gridcollage_core::ExportFormat;
use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::rendering::image_files;

#[component]
pub fn Toolbar(
    /// Number of images currently in the collage
    image_count: Signal<usize>,
    /// Collage capacity
    max_images: usize,
    /// Output bitmap size, None when empty
    export_size: Signal<Option<(u32, u32)>>,
    /// Selected download format
    format: RwSignal<ExportFormat>,
    /// Fired with the image files of a new selection
    on_files: Callback<Vec<File>>,
    on_download: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let on_input_change = move |ev: Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(files) = input.files() {
            on_files.call(image_files(&files));
        }
        // Allow picking the same files again
        input.set_value("");
    };

    let on_format_change = move |ev: Event| {
        if let Some(selected) = ExportFormat::from_id(&event_target_value(&ev)) {
            format.set(selected);
        }
    };

    let is_empty = move || image_count.get() == 0;

    view! {
        <div class="flex flex-wrap items-center gap-3 text-white text-sm">
            <label class="px-3 py-1.5 rounded bg-white/10 hover:bg-white/20 cursor-pointer">
                "Choose images"
                <input
                    type="file"
                    accept="image/*"
                    multiple=true
                    class="hidden"
                    on:change=on_input_change
                />
            </label>

            <span class="text-white/70">
                {move || format!("{} / {} images", image_count.get(), max_images)}
            </span>

            <select
                class="px-2 py-1.5 rounded bg-white/10"
                on:change=on_format_change
                prop:value=move || format.get().extension().to_string()
            >
                <option value="png">"PNG"</option>
                <option value="jpg">"JPEG"</option>
            </select>

            <button
                class="px-3 py-1.5 rounded bg-sky-600 hover:bg-sky-500 disabled:opacity-40"
                disabled=is_empty
                on:click=move |_| on_download.call(())
            >
                "Download"
            </button>

            <button
                class="px-3 py-1.5 rounded bg-white/10 hover:bg-white/20 disabled:opacity-40"
                disabled=is_empty
                on:click=move |_| on_clear.call(())
            >
                "Clear"
            </button>

            <span class="text-white/50">
                {move || export_size.get().map(|(w, h)| format!("Export {}x{}", w, h))}
            </span>
        </div>
    }
}
