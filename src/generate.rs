// ABOUTME: Slide generation seam for the carousel-slides application
// ABOUTME: Validates input text and provides the built-in outline-splitting generator

use crate::errors::{CarouselError, Result};
use crate::slides::{Slide, SlideKind};
use log::info;
use uuid::Uuid;

/// Minimum accepted input length in characters.
pub const MIN_INPUT_CHARS: usize = 50;
/// Maximum accepted input length in characters.
pub const MAX_INPUT_CHARS: usize = 5000;

/// Reject input text outside the accepted length range before any
/// generation attempt.
pub fn validate_input_text(text: &str) -> Result<()> {
    let chars = text.chars().count();
    if chars < MIN_INPUT_CHARS {
        return Err(CarouselError::ValidationError(format!(
            "Text must be at least {} characters",
            MIN_INPUT_CHARS
        )));
    }
    if chars > MAX_INPUT_CHARS {
        return Err(CarouselError::ValidationError(format!(
            "Text must be less than {} characters",
            MAX_INPUT_CHARS
        )));
    }
    Ok(())
}

/// The text-to-slides collaborator. The export pipeline treats generation
/// as an opaque producer of a slide list; implementations may call out to
/// a hosted model or split the text locally.
pub trait SlideGenerator {
    fn generate(&self, text: &str) -> Result<Vec<Slide>>;
}

/// Deterministic local generator: chunks the input into a title slide, key
/// point slides, and a closing call to action. Used when no hosted model is
/// configured.
#[derive(Debug, Default)]
pub struct OutlineGenerator;

impl SlideGenerator for OutlineGenerator {
    fn generate(&self, text: &str) -> Result<Vec<Slide>> {
        validate_input_text(text)?;

        let words: Vec<&str> = text.split_whitespace().collect();
        let chunk_size = (words.len() + 3) / 4;
        let chunks: Vec<String> = words
            .chunks(chunk_size.max(1))
            .map(|c| c.join(" "))
            .collect();

        let mut slides = Vec::with_capacity(chunks.len().max(2));

        slides.push(Slide {
            id: Uuid::new_v4().to_string(),
            kind: SlideKind::Title,
            headline: truncate_chars(chunks.first().map(String::as_str).unwrap_or("Welcome"), 50),
            body: None,
            emoji: Some("🚀".to_string()),
        });

        if chunks.len() > 2 {
            for (index, chunk) in chunks[1..chunks.len() - 1].iter().enumerate() {
                slides.push(Slide {
                    id: Uuid::new_v4().to_string(),
                    kind: SlideKind::Content,
                    headline: format!("Key Point {}", index + 1),
                    body: Some(truncate_chars(chunk, 180)),
                    emoji: None,
                });
            }
        }

        slides.push(Slide {
            id: Uuid::new_v4().to_string(),
            kind: SlideKind::Cta,
            headline: "Ready to get started?".to_string(),
            body: Some(truncate_chars(
                chunks.last().map(String::as_str).unwrap_or("Learn more today!"),
                100,
            )),
            emoji: Some("👉".to_string()),
        });

        info!("Generated {} slides from {} words", slides.len(), words.len());
        Ok(slides)
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}
