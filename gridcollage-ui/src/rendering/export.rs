//! Full-resolution export: draw the plan onto an offscreen canvas and hand the
//! encoded blob to the browser as a download.

use gridcollage_core::{ExportFormat, ExportPlan, Layout, Session};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Document, HtmlAnchorElement, HtmlCanvasElement, Url};

use super::canvas_utils::{get_2d_context, resize_canvas};
use super::images::BitmapImage;
use crate::config::JPEG_QUALITY;

const JPEG_BACKGROUND: &str = "#ffffff";

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))
}

/// Draw `plan` onto a fresh detached canvas.
pub fn render_export_canvas(
    layout: &Layout<BitmapImage>,
    plan: &ExportPlan,
    format: ExportFormat,
) -> Result<HtmlCanvasElement, JsValue> {
    let canvas = document()?
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    resize_canvas(&canvas, plan.size);
    let ctx = get_2d_context(&canvas)?;

    if format.needs_background() {
        ctx.set_fill_style_str(JPEG_BACKGROUND);
        ctx.fill_rect(0.0, 0.0, plan.size.width, plan.size.height);
    }

    for placement in &plan.placements {
        let Some(entry) = layout.get(placement.index) else {
            continue;
        };
        ctx.draw_image_with_image_bitmap_and_dw_and_dh(
            entry.image.bitmap(),
            placement.x,
            placement.y,
            placement.width,
            placement.height,
        )?;
    }

    Ok(canvas)
}

/// Encode the canvas with `toBlob`.
async fn canvas_to_blob(canvas: &HtmlCanvasElement, format: ExportFormat) -> Result<Blob, JsValue> {
    let mut requested = Ok(());
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        requested = match format {
            ExportFormat::Jpeg => canvas.to_blob_with_type_and_encoder_options(
                &resolve,
                format.mime(),
                &JsValue::from_f64(JPEG_QUALITY),
            ),
            ExportFormat::Png => canvas.to_blob_with_type(&resolve, format.mime()),
        };
    });
    requested?;

    let blob = JsFuture::from(promise).await?;
    if blob.is_null() {
        return Err(JsValue::from_str("Canvas could not be encoded"));
    }
    blob.dyn_into::<Blob>()
}

/// Click a hidden anchor pointing at `blob`.
fn trigger_download(blob: &Blob, file_name: &str) -> Result<(), JsValue> {
    let document = document()?;
    let url = Url::create_object_url_with_blob(blob)?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.set_attribute("style", "display:none;")?;

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    Url::revoke_object_url(&url)
}

/// Export the session at natural resolution and download it.
///
/// Resolves to `Ok(false)` when there is nothing to export.
pub async fn download_collage(
    session: &Session<BitmapImage>,
    format: ExportFormat,
) -> Result<bool, JsValue> {
    let Some(plan) = session.export_plan() else {
        return Ok(false);
    };
    log::info!(
        "Exporting {} images at {}x{} as {}",
        plan.placements.len(),
        plan.size.width,
        plan.size.height,
        format.mime()
    );
    if let Ok(json) = serde_json::to_string(&plan) {
        log::debug!("Export plan: {}", json);
    }

    let canvas = render_export_canvas(session.layout(), &plan, format)?;
    let blob = canvas_to_blob(&canvas, format).await?;
    trigger_download(&blob, &format.file_name(session.config().export_basename))?;
    Ok(true)
}

/// Output bitmap size in whole pixels, for status text.
pub fn export_dimensions(session: &Session<BitmapImage>) -> Option<(u32, u32)> {
    session
        .geometry()
        .filter(|_| !session.is_empty())
        .map(|g| {
            let size = g.export_size();
            (size.width.round() as u32, size.height.round() as u32)
        })
}

#[cfg(test)]
mod browser_tests {
    use super::*;
    use gridcollage_core::Size;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn empty_plan_renders_blank_canvas() {
        let layout: Layout<BitmapImage> = Layout::new(8);
        let plan = ExportPlan {
            size: Size::new(40.0, 20.0),
            placements: Vec::new(),
        };

        let canvas = render_export_canvas(&layout, &plan, ExportFormat::Jpeg).unwrap();

        assert_eq!((canvas.width(), canvas.height()), (40, 20));
    }

    #[wasm_bindgen_test]
    async fn empty_session_has_nothing_to_download() {
        let session: Session<BitmapImage> =
            Session::new(gridcollage_core::DEFAULT_GRID_CONFIG, Size::new(100.0, 100.0));

        let exported = download_collage(&session, ExportFormat::Png).await.unwrap();

        assert!(!exported);
    }
}
