//! Asset loading boundary.
//!
//! Image bytes live outside the core; the embedding application resolves
//! an element's `src` through whatever transport it has (HTTP, bundle,
//! object store). The core only defines the seam: a single-shot future
//! that resolves with the decoded image or rejects with an error. No
//! timeout or retry is imposed here; cancellation and retry policy
//! belong to the collaborator.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::RwLock;
use thiserror::Error;

/// Asset loading errors.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Image not found: {0}")]
    NotFound(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Asset error: {0}")]
    Other(String),
}

/// Result type for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A decoded image with its natural dimensions.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Unscaled pixel width.
    pub natural_width: u32,
    /// Unscaled pixel height.
    pub natural_height: u32,
    /// Decoded image bytes (format is the loader's concern).
    pub data: Vec<u8>,
}

/// Trait for image source backends.
pub trait ImageSource {
    /// Resolve a source reference to a decoded image.
    fn load(&self, src: &str) -> BoxFuture<'_, AssetResult<LoadedImage>>;
}

/// In-memory image source for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryImageSource {
    images: RwLock<HashMap<String, LoadedImage>>,
}

impl MemoryImageSource {
    /// Create a new empty image source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image under a source reference.
    pub fn insert(&self, src: impl Into<String>, image: LoadedImage) -> AssetResult<()> {
        let mut images = self
            .images
            .write()
            .map_err(|e| AssetError::Other(format!("Lock error: {e}")))?;
        images.insert(src.into(), image);
        Ok(())
    }
}

impl ImageSource for MemoryImageSource {
    fn load(&self, src: &str) -> BoxFuture<'_, AssetResult<LoadedImage>> {
        let src = src.to_string();
        Box::pin(async move {
            let images = self
                .images
                .read()
                .map_err(|e| AssetError::Other(format!("Lock error: {e}")))?;
            images
                .get(&src)
                .cloned()
                .ok_or_else(|| AssetError::NotFound(src))
        })
    }
}
