// ABOUTME: Style resolution module for the carousel-slides application
// ABOUTME: Resolves the effective palette for a slide from custom colors, template, or defaults

use crate::errors::{CarouselError, Result};
use crate::slides::SlideKind;
use crate::templates::Template;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An opaque sRGB color. Serialized as a "#rrggbb" hex string, the format
/// used by palette JSON and the template catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CarouselError::ColorError(format!(
                "Expected #rrggbb, got {:?}",
                s
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| CarouselError::ColorError(e.to_string()))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| CarouselError::ColorError(e.to_string()))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| CarouselError::ColorError(e.to_string()))?;
        Ok(Self { r, g, b })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(D::Error::custom)
    }
}

/// Two colors forming a gradient endpoint pair. Solid backgrounds use only
/// `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub from: Color,
    pub to: Color,
}

impl ColorPair {
    pub const fn new(from: Color, to: Color) -> Self {
        Self { from, to }
    }
}

/// A full palette: one color pair per slide kind plus a shared text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePalette {
    pub title: ColorPair,
    pub content: ColorPair,
    pub cta: ColorPair,
    pub text: Color,
}

impl StylePalette {
    pub fn pair_for(&self, kind: SlideKind) -> ColorPair {
        match kind {
            SlideKind::Title => self.title,
            SlideKind::Content => self.content,
            SlideKind::Cta => self.cta,
        }
    }
}

/// How the slide background is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    /// Linear blend from `from` to `to`, top-left toward bottom-right.
    Gradient,
    /// Flat fill with `from` only.
    Solid,
}

impl FromStr for BackgroundStyle {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gradient" => Ok(BackgroundStyle::Gradient),
            "solid" => Ok(BackgroundStyle::Solid),
            other => Err(CarouselError::ValidationError(format!(
                "Unknown background style: {}",
                other
            ))),
        }
    }
}

/// The built-in palette used when neither custom colors nor a template are
/// selected: purple/blue title, slate content, orange/pink call-to-action,
/// white text.
pub const DEFAULT_PALETTE: StylePalette = StylePalette {
    title: ColorPair::new(Color::rgb(0x93, 0x33, 0xea), Color::rgb(0x25, 0x63, 0xeb)),
    content: ColorPair::new(Color::rgb(0x33, 0x41, 0x55), Color::rgb(0x0f, 0x17, 0x2a)),
    cta: ColorPair::new(Color::rgb(0xf9, 0x73, 0x16), Color::rgb(0xdb, 0x27, 0x77)),
    text: Color::rgb(0xff, 0xff, 0xff),
};

/// The fully resolved style for one slide kind, recomputed at render time
/// and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveStyle {
    pub background: ColorPair,
    pub text: Color,
    pub mode: BackgroundStyle,
}

/// Resolve the effective style for a slide kind.
///
/// Precedence is strict and wholesale, first present source wins:
/// user custom colors, then the selected template's palette, then
/// [`DEFAULT_PALETTE`]. Palettes are never merged field-by-field. Pure and
/// total; resolution never fails.
pub fn resolve_style(
    kind: SlideKind,
    custom_colors: Option<&StylePalette>,
    template: Option<&Template>,
    mode: BackgroundStyle,
) -> EffectiveStyle {
    let palette = custom_colors
        .copied()
        .or_else(|| template.map(|t| t.colors))
        .unwrap_or(DEFAULT_PALETTE);

    EffectiveStyle {
        background: palette.pair_for(kind),
        text: palette.text,
        mode,
    }
}
