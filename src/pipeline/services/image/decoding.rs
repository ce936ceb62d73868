//! Turns request payloads into decoded pixel grids.
use base64::{engine::general_purpose::STANDARD, Engine};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::DecodeError;
use crate::pipeline::types::PixelGrid;

/// Where a panel image comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    Path(PathBuf),
    /// Encoded image bytes (PNG, JPEG, ...).
    Encoded(Vec<u8>),
}

impl ImageSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn from_base64(data: &str) -> Result<Self, DecodeError> {
        let bytes = STANDARD.decode(data.trim())?;
        Ok(Self::Encoded(bytes))
    }

    /// Request-layer form: `data` is a file path when `is_path`, base64 text otherwise.
    pub fn from_request(data: &str, is_path: bool) -> Result<Self, DecodeError> {
        if is_path {
            Ok(Self::path(data))
        } else {
            Self::from_base64(data)
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ImageSource::Path(path) => path.display().to_string(),
            ImageSource::Encoded(bytes) => format!("<{} encoded bytes>", bytes.len()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImageDecoder;

impl ImageDecoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, source: &ImageSource) -> Result<PixelGrid, DecodeError> {
        match source {
            ImageSource::Path(path) => self.decode_file(path),
            ImageSource::Encoded(bytes) => self.decode_bytes(bytes),
        }
    }

    fn decode_file(&self, path: &Path) -> Result<PixelGrid, DecodeError> {
        if !path.exists() {
            return Err(DecodeError::NotFound(path.to_path_buf()));
        }
        let bytes =
            std::fs::read(path).map_err(|e| DecodeError::ReadError(e, path.to_path_buf()))?;
        self.decode_bytes(&bytes)
    }

    fn decode_bytes(&self, bytes: &[u8]) -> Result<PixelGrid, DecodeError> {
        let image = image::load_from_memory(bytes)?;
        debug!(
            "Decoded {}x{} image ({:?})",
            image.width(),
            image.height(),
            image.color()
        );
        PixelGrid::new(image)
    }
}
