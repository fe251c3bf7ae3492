//! Layout and loading error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Please upload at most {capacity} images (got {requested}).")]
    CapacityExceeded { requested: usize, capacity: usize },

    #[error("Image index {index} out of range (layout has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Failed to decode image: {0}")]
    Failed(String),

    #[error("Decoded image has zero size")]
    EmptyImage,
}
