// ABOUTME: Platform dimension table for the carousel-slides application
// ABOUTME: Fixed mapping from social platform to target canvas size in pixels

use crate::errors::CarouselError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A social platform with a fixed export canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Linkedin,
    Twitter,
    Facebook,
}

/// One row of the dimension table: a platform and its pixel canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportTarget {
    pub platform: Platform,
    pub width: u32,
    pub height: u32,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Instagram,
        Platform::Linkedin,
        Platform::Twitter,
        Platform::Facebook,
    ];

    /// The target canvas for this platform. Dimensions are always positive.
    pub fn target(&self) -> ExportTarget {
        let (width, height) = match self {
            Platform::Instagram => (1080, 1080),
            Platform::Linkedin => (1080, 1080),
            Platform::Twitter => (1200, 675),
            Platform::Facebook => (1200, 630),
        };
        ExportTarget {
            platform: *self,
            width,
            height,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
        }
    }

    /// Human-readable label, e.g. "Twitter/X (1200×675)".
    pub fn label(&self) -> String {
        let name = match self {
            Platform::Instagram => "Instagram",
            Platform::Linkedin => "LinkedIn",
            Platform::Twitter => "Twitter/X",
            Platform::Facebook => "Facebook",
        };
        let target = self.target();
        format!("{} ({}×{})", name, target.width, target.height)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::Linkedin),
            "twitter" | "x" => Ok(Platform::Twitter),
            "facebook" => Ok(Platform::Facebook),
            other => Err(CarouselError::UnknownPlatform(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_table_is_exact() {
        let expect = [
            (Platform::Instagram, 1080, 1080),
            (Platform::Linkedin, 1080, 1080),
            (Platform::Twitter, 1200, 675),
            (Platform::Facebook, 1200, 630),
        ];
        for (platform, w, h) in expect {
            let target = platform.target();
            assert_eq!((target.width, target.height), (w, h), "{}", platform);
        }
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!("twitter".parse::<Platform>().unwrap(), Platform::Twitter);
        assert_eq!("Instagram".parse::<Platform>().unwrap(), Platform::Instagram);
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn test_labels_include_dimensions() {
        assert_eq!(Platform::Twitter.label(), "Twitter/X (1200×675)");
        assert_eq!(Platform::Instagram.label(), "Instagram (1080×1080)");
    }
}
