//! Decoding selected or dropped files into bitmaps.

use gridcollage_core::{load_all, DecodeError, ImageAsset, Size};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList, ImageBitmap};

/// Decoded image handle drawn onto the canvas.
#[derive(Clone, Debug)]
pub struct BitmapImage {
    bitmap: ImageBitmap,
    name: String,
}

impl BitmapImage {
    pub fn bitmap(&self) -> &ImageBitmap {
        &self.bitmap
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ImageAsset for BitmapImage {
    fn natural_size(&self) -> Size {
        Size::new(self.bitmap.width() as f64, self.bitmap.height() as f64)
    }
}

/// Files from a `FileList` whose MIME type is an image type.
pub fn image_files(files: &FileList) -> Vec<File> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .filter(|f| f.type_().starts_with("image/"))
        .collect()
}

/// Decode one file with `createImageBitmap`.
pub async fn decode_file(file: File) -> Result<BitmapImage, DecodeError> {
    let window = web_sys::window().ok_or_else(|| DecodeError::Failed("No window".to_string()))?;
    let promise = window.create_image_bitmap_with_blob(&file).map_err(js_error)?;
    let bitmap = JsFuture::from(promise)
        .await
        .map_err(js_error)?
        .dyn_into::<ImageBitmap>()
        .map_err(js_error)?;

    Ok(BitmapImage {
        bitmap,
        name: file.name(),
    })
}

/// Decode every file concurrently, keeping selection order.
pub async fn load_files(files: Vec<File>) -> Vec<BitmapImage> {
    let images = load_all(files, decode_file).await;
    for image in &images {
        let size = image.natural_size();
        log::debug!("Loaded {} ({}x{})", image.name(), size.width, size.height);
    }
    images
}

fn js_error(value: JsValue) -> DecodeError {
    DecodeError::Failed(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
