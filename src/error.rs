use std::path::PathBuf;
use thiserror::Error;

// Main Library Error Type

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("Decode Error: {0}")]
    DecodeError(#[from] DecodeError),
    #[error("Config Error: {0}")]
    ConfigError(#[from] ConfigError),
}

// Image Decoding Error Type
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Image path does not exist: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read image file {1}: {0}")]
    ReadError(std::io::Error, PathBuf),
    #[error("Invalid or unsupported image encoding: {0}")]
    InvalidEncoding(#[from] image::ImageError),
    #[error("Invalid base64 image payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("Decoded image has zero area ({0}x{1})")]
    EmptyImage(u32, u32),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load settings: {0}")]
    LoadError(#[from] ::config::ConfigError),
    #[error("Invalid analysis config: {0}")]
    InvalidValue(String),
    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}
