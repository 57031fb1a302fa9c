// ABOUTME: Configuration module for the carousel-slides application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::export::ExportOptions;
use crate::logo::{LogoConfig, LogoPosition};
use crate::platform::Platform;
use crate::style::{BackgroundStyle, StylePalette};
use crate::templates::Template;
use std::env;
use std::path::PathBuf;

/// Global configuration for the application
pub struct Config {
    pub font_path: Option<PathBuf>,
    pub default_font_family: String,
    pub logo_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_path: env::var("FONT_PATH").ok().map(PathBuf::from),
            default_font_family: "sans-serif".to_string(),
            logo_timeout_ms: 10_000, // 10 seconds
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let font_path = env::var("FONT_PATH").ok().map(PathBuf::from);
        let default_font_family =
            env::var("FONT_FAMILY").unwrap_or_else(|_| "sans-serif".to_string());
        let logo_timeout_ms = env::var("LOGO_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(10_000);

        Self {
            font_path,
            default_font_family,
            logo_timeout_ms,
        }
    }

    /// Get export options with defaults from this config
    #[allow(clippy::too_many_arguments)]
    pub fn get_export_options(
        &self,
        platform: Platform,
        template: Option<Template>,
        custom_colors: Option<StylePalette>,
        background_style: Option<BackgroundStyle>,
        font_family: Option<String>,
        logo_url: Option<String>,
        logo_position: Option<LogoPosition>,
        logo_opacity: Option<u8>,
    ) -> ExportOptions {
        let logo = logo_url.map(|url| {
            LogoConfig::new(
                &url,
                logo_position.unwrap_or(LogoPosition::BottomRight),
                logo_opacity.unwrap_or(100),
            )
        });

        ExportOptions {
            platform,
            template,
            custom_colors,
            background_style: background_style.unwrap_or(BackgroundStyle::Gradient),
            font_family: font_family.unwrap_or_else(|| self.default_font_family.clone()),
            logo,
            logo_timeout_ms: self.logo_timeout_ms,
        }
    }
}
