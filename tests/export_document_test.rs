use std::io::Cursor;

use carousel::artifact::{self, orientation, PageOrientation};
use carousel::errors::Result;
use carousel::export::{export_batch, ExportFormat, ExportOptions};
use carousel::platform::{ExportTarget, Platform};
use carousel::render::{ArchiveEntry, RenderBackend, RenderedSlide, SlideComposition};
use carousel::slides::{Slide, SlideKind};

struct BackgroundOnlyBackend;

impl RenderBackend for BackgroundOnlyBackend {
    fn render_slide(
        &self,
        composition: &SlideComposition<'_>,
        width: u32,
        height: u32,
    ) -> Result<RenderedSlide> {
        let mut canvas = image::RgbaImage::new(width, height);
        carousel::render::fill_background(
            &mut canvas,
            composition.style.background,
            composition.style.mode,
        );
        let mut png = Vec::new();
        image::DynamicImage::ImageRgba8(canvas)
            .write_to(&mut Cursor::new(&mut png), image::ImageOutputFormat::Png)
            .unwrap();
        Ok(RenderedSlide { png, width, height })
    }

    fn assemble_archive(&self, entries: &[ArchiveEntry]) -> Result<Vec<u8>> {
        artifact::assemble_image_archive(entries)
    }

    fn assemble_paged_document(
        &self,
        pages: &[RenderedSlide],
        target: &ExportTarget,
    ) -> Result<Vec<u8>> {
        artifact::assemble_paged_document(pages, target)
    }
}

fn deck(n: usize) -> Vec<Slide> {
    (0..n)
        .map(|i| Slide {
            id: format!("id-{}", i),
            kind: SlideKind::Content,
            headline: format!("Headline {}", i),
            body: None,
            emoji: None,
        })
        .collect()
}

#[test]
fn test_document_has_one_page_per_slide() {
    let options = ExportOptions {
        platform: Platform::Twitter,
        ..ExportOptions::default()
    };
    let artifact = export_batch(
        &deck(5),
        &options,
        ExportFormat::PagedDocument,
        &BackgroundOnlyBackend,
        |_, _| {},
    )
    .expect("export failed");

    assert_eq!(artifact.filename, "carousel-slides-twitter.pdf");
    assert!(artifact.bytes.starts_with(b"%PDF"));
    let text = String::from_utf8_lossy(&artifact.bytes);
    assert!(text.contains("/Count 5"), "expected a 5-page document");
}

#[test]
fn test_orientation_follows_target_aspect() {
    assert_eq!(
        orientation(&Platform::Twitter.target()),
        PageOrientation::Landscape
    );
    assert_eq!(
        orientation(&Platform::Facebook.target()),
        PageOrientation::Landscape
    );
    assert_eq!(
        orientation(&Platform::Instagram.target()),
        PageOrientation::Portrait
    );
    assert_eq!(
        orientation(&Platform::Linkedin.target()),
        PageOrientation::Portrait
    );
}

#[test]
fn test_failed_batch_returns_no_document() {
    struct FailingBackend;
    impl RenderBackend for FailingBackend {
        fn render_slide(
            &self,
            _composition: &SlideComposition<'_>,
            _width: u32,
            _height: u32,
        ) -> Result<RenderedSlide> {
            Err(carousel::CarouselError::RenderError("boom".to_string()))
        }
        fn assemble_archive(&self, entries: &[ArchiveEntry]) -> Result<Vec<u8>> {
            artifact::assemble_image_archive(entries)
        }
        fn assemble_paged_document(
            &self,
            pages: &[RenderedSlide],
            target: &ExportTarget,
        ) -> Result<Vec<u8>> {
            artifact::assemble_paged_document(pages, target)
        }
    }

    let options = ExportOptions::default();
    let mut progress = Vec::new();
    let result = export_batch(
        &deck(3),
        &options,
        ExportFormat::PagedDocument,
        &FailingBackend,
        |done, total| progress.push((done, total)),
    );
    assert!(result.is_err());
    assert!(progress.is_empty());
}
