// ABOUTME: Batch export orchestrator for the carousel-slides application
// ABOUTME: Renders slides strictly in order, reports progress, and assembles the final artifact

use crate::artifact::slide_entry_name;
use crate::errors::{CarouselError, Result};
use crate::layout::scale_layout;
use crate::logo::{load_logo, LogoConfig};
use crate::platform::Platform;
use crate::render::{ArchiveEntry, RenderBackend, SlideComposition};
use crate::slides::{Slide, SlideKind};
use crate::style::{resolve_style, BackgroundStyle, EffectiveStyle, StylePalette};
use crate::templates::Template;
use log::info;
use std::collections::HashMap;
use std::str::FromStr;

/// The two artifact formats a batch can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// ZIP archive of numbered PNGs.
    ImageArchive,
    /// PDF with one page per slide.
    PagedDocument,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::ImageArchive => "zip",
            ExportFormat::PagedDocument => "pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "archive" | "zip" | "png" => Ok(ExportFormat::ImageArchive),
            "document" | "pdf" => Ok(ExportFormat::PagedDocument),
            other => Err(CarouselError::ValidationError(format!(
                "Unknown export format: {}",
                other
            ))),
        }
    }
}

/// A fully resolved customization snapshot for one export run. The
/// orchestrator only reads it; UI state never leaks in.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub platform: Platform,
    pub template: Option<Template>,
    pub custom_colors: Option<StylePalette>,
    pub background_style: BackgroundStyle,
    pub font_family: String,
    pub logo: Option<LogoConfig>,
    pub logo_timeout_ms: u64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            platform: Platform::Instagram,
            template: None,
            custom_colors: None,
            background_style: BackgroundStyle::Gradient,
            font_family: "sans-serif".to_string(),
            logo: None,
            logo_timeout_ms: 10_000,
        }
    }
}

/// The finished binary payload plus its suggested filename. Transient;
/// exists only until delivery writes it out.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub format: ExportFormat,
}

/// Render every slide in deck order and assemble the artifact.
///
/// Style is resolved once per slide kind encountered (resolution is pure,
/// so the result is cached across the batch), layout is scaled once, and
/// the logo is loaded once with silent degradation. After each slide the
/// progress callback fires synchronously with `(completed, total)`.
///
/// If any slide fails to render the whole batch fails and nothing already
/// rendered is returned; progress reported before the failure stands.
pub fn export_batch<B: RenderBackend>(
    slides: &[Slide],
    options: &ExportOptions,
    format: ExportFormat,
    backend: &B,
    mut on_progress: impl FnMut(usize, usize),
) -> Result<ExportArtifact> {
    if slides.is_empty() {
        return Err(CarouselError::ValidationError(
            "No slides to export".to_string(),
        ));
    }

    let target = options.platform.target();
    info!(
        "Exporting {} slides for {} as {:?}",
        slides.len(),
        options.platform.label(),
        format
    );

    let layout = scale_layout(target.width, target.height);
    let logo = options
        .logo
        .as_ref()
        .and_then(|config| load_logo(config, options.logo_timeout_ms));

    let mut styles: HashMap<SlideKind, EffectiveStyle> = HashMap::new();
    let total = slides.len();
    let mut rendered = Vec::with_capacity(total);

    for (index, slide) in slides.iter().enumerate() {
        let style = *styles.entry(slide.kind).or_insert_with(|| {
            resolve_style(
                slide.kind,
                options.custom_colors.as_ref(),
                options.template.as_ref(),
                options.background_style,
            )
        });

        let composition = SlideComposition {
            slide,
            style: &style,
            layout: &layout,
            logo: logo.as_ref(),
        };
        let page = backend.render_slide(&composition, target.width, target.height)?;
        rendered.push(page);

        on_progress(index + 1, total);
        info!("Rendered slide {}/{}", index + 1, total);
    }

    let bytes = match format {
        ExportFormat::ImageArchive => {
            let entries: Vec<ArchiveEntry> = rendered
                .into_iter()
                .enumerate()
                .map(|(index, page)| ArchiveEntry {
                    name: slide_entry_name(index),
                    data: page.png,
                })
                .collect();
            backend.assemble_archive(&entries)?
        }
        ExportFormat::PagedDocument => backend.assemble_paged_document(&rendered, &target)?,
    };

    Ok(ExportArtifact {
        bytes,
        filename: format!(
            "carousel-slides-{}.{}",
            options.platform,
            format.extension()
        ),
        format,
    })
}
