// ABOUTME: Logo handling for the carousel-slides application
// ABOUTME: Loads the overlay logo from a local path or remote URL, degrading silently on failure

use crate::errors::{CarouselError, Result};
use image::RgbaImage;
use log::{info, warn};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Which canvas corner the logo is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl std::str::FromStr for LogoPosition {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top-left" => Ok(LogoPosition::TopLeft),
            "top-right" => Ok(LogoPosition::TopRight),
            "bottom-left" => Ok(LogoPosition::BottomLeft),
            "bottom-right" => Ok(LogoPosition::BottomRight),
            other => Err(CarouselError::ValidationError(format!(
                "Unknown logo position: {}",
                other
            ))),
        }
    }
}

/// User-facing logo settings: where the image comes from, which corner it
/// sits in, and its opacity in percent (0-100).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoConfig {
    pub url: String,
    pub position: LogoPosition,
    pub opacity: u8,
}

impl LogoConfig {
    pub fn new(url: &str, position: LogoPosition, opacity: u8) -> Self {
        Self {
            url: url.to_string(),
            position,
            opacity: opacity.min(100),
        }
    }
}

/// A decoded logo ready for compositing.
#[derive(Debug, Clone)]
pub struct LogoOverlay {
    pub image: RgbaImage,
    pub position: LogoPosition,
    pub opacity: u8,
}

/// Load and decode the configured logo. Load failure is non-fatal: the
/// slide renders without the logo, and only a warning is logged.
pub fn load_logo(config: &LogoConfig, timeout_ms: u64) -> Option<LogoOverlay> {
    match fetch_logo_bytes(&config.url, timeout_ms) {
        Ok(bytes) => match image::load_from_memory(&bytes) {
            Ok(decoded) => Some(LogoOverlay {
                image: decoded.to_rgba8(),
                position: config.position,
                opacity: config.opacity.min(100),
            }),
            Err(e) => {
                warn!("Failed to decode logo {}: {}", config.url, e);
                None
            }
        },
        Err(e) => {
            warn!("Failed to load logo {}: {}", config.url, e);
            None
        }
    }
}

fn fetch_logo_bytes(url: &str, timeout_ms: u64) -> Result<Vec<u8>> {
    let is_remote = url.starts_with("http://") || url.starts_with("https://");
    if is_remote {
        info!("Fetching remote logo: {}", url);
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(CarouselError::FetchError)?;
        let response = client.get(url).send().map_err(CarouselError::FetchError)?;
        if !response.status().is_success() {
            return Err(CarouselError::ValidationError(format!(
                "HTTP error: {}",
                response.status()
            )));
        }
        Ok(response.bytes().map_err(CarouselError::FetchError)?.to_vec())
    } else {
        info!("Reading local logo: {}", url);
        let path = Path::new(url);
        if !path.exists() {
            return Err(CarouselError::PathNotFoundError(path.to_path_buf()));
        }
        std::fs::read(path).map_err(CarouselError::FileReadError)
    }
}
