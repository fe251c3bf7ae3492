//! Ordered gather-all over independent image decodes.

use crate::error::{DecodeError, LayoutError};
use crate::layout::ImageAsset;
use futures::future::join_all;
use std::future::Future;

/// Fail if `existing + incoming` would exceed `capacity`.
///
/// Checked before any decode starts so rejected requests cost nothing.
pub fn ensure_capacity(existing: usize, incoming: usize, capacity: usize) -> Result<(), LayoutError> {
    let requested = existing + incoming;
    if requested > capacity {
        log::warn!("Rejecting {} images (capacity {})", requested, capacity);
        return Err(LayoutError::CapacityExceeded {
            requested,
            capacity,
        });
    }
    Ok(())
}

/// Decode every source concurrently and wait for all of them.
///
/// Results keep the order of `sources` regardless of completion order.
/// Failed decodes and zero-sized images are logged and skipped.
pub async fn load_all<S, T, F, Fut>(sources: Vec<S>, decode: F) -> Vec<T>
where
    F: Fn(S) -> Fut,
    Fut: Future<Output = Result<T, DecodeError>>,
    T: ImageAsset,
{
    let total = sources.len();
    let results = join_all(sources.into_iter().map(decode)).await;

    let images: Vec<T> = results
        .into_iter()
        .enumerate()
        .filter_map(|(i, result)| match result {
            Ok(image) if image.natural_size().is_degenerate() => {
                log::warn!("Skipping file {}: {}", i, DecodeError::EmptyImage);
                None
            }
            Ok(image) => Some(image),
            Err(e) => {
                log::warn!("Skipping file {}: {}", i, e);
                None
            }
        })
        .collect();

    log::debug!("Decoded {}/{} images", images.len(), total);
    images
}
