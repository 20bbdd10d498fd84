// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Image resolution: turns an asset id into an image-backed Node.
//!
//! Decoding and uploading textures is the rendering adapter's job; here an
//! image is known only by its id and pixel size.

use crate::render::node::Node;
use crate::ui::{UIError, UIResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Anything able to build a fresh image node from an asset id.
pub trait ImageSource {
    fn resolve(&self, id: &str) -> UIResult<Node>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub width: f32,
    pub height: f32,
}

/// Table of known images and their sizes.
#[derive(Debug, Clone, Default)]
pub struct ImageRegistry {
    images: HashMap<String, ImageInfo>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &str, width: f32, height: f32) {
        debug!("image registered: {} ({}x{})", id, width, height);
        self.images.insert(id.to_string(), ImageInfo { width, height });
    }

    pub fn with_image(mut self, id: &str, width: f32, height: f32) -> Self {
        self.register(id, width, height);
        self
    }

    pub fn get(&self, id: &str) -> Option<&ImageInfo> {
        self.images.get(id)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl From<HashMap<String, ImageInfo>> for ImageRegistry {
    fn from(images: HashMap<String, ImageInfo>) -> Self {
        Self { images }
    }
}

impl ImageSource for ImageRegistry {
    fn resolve(&self, id: &str) -> UIResult<Node> {
        self.get(id)
            .map(|info| Node::image(id, info.width, info.height))
            .ok_or_else(|| UIError::ImageNotFound(id.to_string()))
    }
}
