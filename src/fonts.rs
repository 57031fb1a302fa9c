// ABOUTME: Font loading module for the carousel-slides application
// ABOUTME: Resolves a font family name to rasterizable regular and bold faces

use crate::errors::{CarouselError, Result};
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Regular and bold faces for one font family. The headline uses the bold
/// face, emoji and body use the regular one.
#[derive(Clone)]
pub struct FontSet {
    pub regular: fontdue::Font,
    pub bold: fontdue::Font,
}

impl FontSet {
    /// Load both faces from a single font file. The bold face falls back to
    /// the regular one, which is what a file override can offer.
    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading font from file: {:?}", path);
        if !path.exists() {
            return Err(CarouselError::PathNotFoundError(path.to_path_buf()));
        }
        let data = fs::read(path).map_err(CarouselError::FileReadError)?;
        let regular = parse_font(data, 0)?;
        Ok(Self {
            bold: regular.clone(),
            regular,
        })
    }

    /// Resolve a family name against the system font database, falling back
    /// to the generic sans-serif family when the name is unknown. A missing
    /// bold face falls back to the regular face.
    pub fn load(family: &str) -> Result<Self> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        let regular = query_face(&db, family, fontdb::Weight::NORMAL)?;
        let bold = match query_face(&db, family, fontdb::Weight::BOLD) {
            Ok(font) => font,
            Err(e) => {
                warn!("No bold face for {:?} ({}), using regular", family, e);
                regular.clone()
            }
        };

        Ok(Self { regular, bold })
    }
}

fn query_face(db: &fontdb::Database, family: &str, weight: fontdb::Weight) -> Result<fontdue::Font> {
    let named = [fontdb::Family::Name(family), fontdb::Family::SansSerif];
    let generic = [fontdb::Family::SansSerif];
    let families: &[fontdb::Family] = if family.eq_ignore_ascii_case("sans-serif") {
        &generic
    } else {
        &named
    };

    let query = fontdb::Query {
        families,
        weight,
        ..fontdb::Query::default()
    };

    let id = db.query(&query).ok_or_else(|| {
        CarouselError::FontError(format!("No system font matches family {:?}", family))
    })?;

    let (source, index) = db
        .face_source(id)
        .ok_or_else(|| CarouselError::FontError("Font face has no source".to_string()))?;

    let data = match source {
        fontdb::Source::File(path) => {
            info!("Using font file {:?} for family {:?}", path, family);
            fs::read(&path).map_err(CarouselError::FileReadError)?
        }
        fontdb::Source::Binary(data) => data.as_ref().as_ref().to_vec(),
        fontdb::Source::SharedFile(_, data) => data.as_ref().as_ref().to_vec(),
    };

    parse_font(data, index)
}

fn parse_font(data: Vec<u8>, collection_index: u32) -> Result<fontdue::Font> {
    let settings = fontdue::FontSettings {
        collection_index,
        ..fontdue::FontSettings::default()
    };
    fontdue::Font::from_bytes(data, settings)
        .map_err(|e| CarouselError::FontError(format!("Failed to parse font: {}", e)))
}
