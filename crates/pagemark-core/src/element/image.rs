//! Image element payload.

use serde::{Deserialize, Serialize};

/// Payload of an image element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageProps {
    /// Source reference (URL or asset key); resolved by the embedding
    /// application's image loader.
    pub src: String,
    /// Unscaled pixel width of the source image.
    pub natural_width: u32,
    /// Unscaled pixel height of the source image.
    pub natural_height: u32,
}

impl ImageProps {
    /// Create an image payload.
    pub fn new(src: impl Into<String>, natural_width: u32, natural_height: u32) -> Self {
        Self {
            src: src.into(),
            natural_width,
            natural_height,
        }
    }

    /// Aspect ratio of the source image (width / height).
    /// Falls back to 1.0 for degenerate zero-height sources.
    pub fn natural_aspect_ratio(&self) -> f64 {
        if self.natural_height == 0 {
            return 1.0;
        }
        self.natural_width as f64 / self.natural_height as f64
    }
}
