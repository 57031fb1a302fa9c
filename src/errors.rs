// ABOUTME: Error types for the carousel-slides application
// ABOUTME: Provides structured error handling for each stage of the export pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to fetch remote resource: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Failed to decode image: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid slide deck: {0}")]
    DeckError(#[from] serde_json::Error),

    #[error("Invalid color value: {0}")]
    ColorError(String),

    #[error("Font error: {0}")]
    FontError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Archive assembly error: {0}")]
    ArchiveError(String),

    #[error("Document assembly error: {0}")]
    DocumentError(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Generation error: {0}")]
    GenerationError(String),

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

// Implement conversion from anyhow::Error to our CarouselError
impl From<anyhow::Error> for CarouselError {
    fn from(err: anyhow::Error) -> Self {
        CarouselError::UnknownError(err.to_string())
    }
}

// Implement conversion from zip errors
impl From<zip::result::ZipError> for CarouselError {
    fn from(err: zip::result::ZipError) -> Self {
        CarouselError::ArchiveError(format!("ZIP operation failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, CarouselError>;
