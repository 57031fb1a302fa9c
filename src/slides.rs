// ABOUTME: Slide data model for the carousel-slides application
// ABOUTME: Defines slides, slide kinds, and JSON deck loading with validation

use crate::errors::{CarouselError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Maximum headline length in characters.
pub const MAX_HEADLINE_CHARS: usize = 60;
/// Maximum body length in characters.
pub const MAX_BODY_CHARS: usize = 200;

/// The category of a slide, which determines its color pair and role
/// within the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Title,
    Content,
    Cta,
}

impl SlideKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideKind::Title => "title",
            SlideKind::Content => "content",
            SlideKind::Cta => "cta",
        }
    }
}

/// A single carousel slide. Slides are immutable once handed to the
/// export pipeline; their position in the deck is their export order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SlideKind,
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl Slide {
    /// Check the field length limits for a slide.
    pub fn validate(&self) -> Result<()> {
        if self.headline.chars().count() > MAX_HEADLINE_CHARS {
            return Err(CarouselError::ValidationError(format!(
                "Headline exceeds {} characters: {:?}",
                MAX_HEADLINE_CHARS, self.headline
            )));
        }
        if let Some(body) = &self.body {
            if body.chars().count() > MAX_BODY_CHARS {
                return Err(CarouselError::ValidationError(format!(
                    "Body exceeds {} characters on slide {}",
                    MAX_BODY_CHARS, self.id
                )));
            }
        }
        Ok(())
    }
}

/// Load a slide deck from a JSON file. The file holds either a bare array
/// of slides or an object with a top-level "slides" array, matching the
/// shape returned by the generation collaborator.
pub fn load_deck(path: &Path) -> Result<Vec<Slide>> {
    info!("Loading slide deck from {:?}", path);

    if !path.exists() {
        return Err(CarouselError::PathNotFoundError(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path).map_err(CarouselError::FileReadError)?;
    let slides = parse_deck(&raw)?;

    for slide in &slides {
        slide.validate()?;
    }

    info!("Loaded {} slides", slides.len());
    Ok(slides)
}

/// Parse deck JSON from a string.
pub fn parse_deck(raw: &str) -> Result<Vec<Slide>> {
    #[derive(Deserialize)]
    struct Wrapper {
        slides: Vec<Slide>,
    }

    if raw.trim_start().starts_with('{') {
        let wrapper: Wrapper = serde_json::from_str(raw)?;
        Ok(wrapper.slides)
    } else {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Serialize a deck into the wrapped JSON shape used on disk.
pub fn deck_to_json(slides: &[Slide]) -> Result<String> {
    #[derive(Serialize)]
    struct Wrapper<'a> {
        slides: &'a [Slide],
    }
    Ok(serde_json::to_string_pretty(&Wrapper { slides })?)
}
