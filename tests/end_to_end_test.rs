use std::io::{Cursor, Read};

use carousel::artifact;
use carousel::errors::Result;
use carousel::export::{export_batch, ExportFormat, ExportOptions};
use carousel::platform::{ExportTarget, Platform};
use carousel::render::{ArchiveEntry, RenderBackend, RenderedSlide, SlideComposition};
use carousel::slides::{Slide, SlideKind};
use carousel::{templates, validate_input_text};
use zip::ZipArchive;

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

fn slide(id: &str, kind: SlideKind, headline: &str) -> Slide {
    Slide {
        id: id.to_string(),
        kind,
        headline: headline.to_string(),
        body: Some("Something worth reading".to_string()),
        emoji: None,
    }
}

/// Full scenario: 200 characters of input, a 5-slide deck from the
/// generation collaborator, the sunset-gradient template, gradient
/// backgrounds, Twitter dimensions, exported as a PNG archive.
#[test]
fn test_full_export_scenario() {
    let input: String = "carousel input text ".chars().cycle().take(200).collect();
    assert_eq!(input.chars().count(), 200);
    validate_input_text(&input).expect("input should be accepted");

    // The generation collaborator is opaque; its output is just data.
    let slides = vec![
        slide("s1", SlideKind::Title, "Five ways to ship faster"),
        slide("s2", SlideKind::Content, "Cut scope"),
        slide("s3", SlideKind::Content, "Automate checks"),
        slide("s4", SlideKind::Content, "Review early"),
        slide("s5", SlideKind::Cta, "Follow for more"),
    ];

    let options = ExportOptions {
        platform: Platform::Twitter,
        template: templates::find("sunset-gradient"),
        background_style: carousel::BackgroundStyle::Gradient,
        ..ExportOptions::default()
    };

    let mut progress = Vec::new();
    let artifact = export_batch(
        &slides,
        &options,
        ExportFormat::ImageArchive,
        &BackgroundOnlyBackend,
        |done, total| progress.push((done, total)),
    )
    .expect("export failed");

    assert_eq!(progress.len(), 5);
    assert_eq!(artifact.filename, "carousel-slides-twitter.zip");

    let mut archive = ZipArchive::new(Cursor::new(artifact.bytes)).expect("not a zip");
    assert_eq!(archive.len(), 5);

    let expected = [
        "slide-01.png",
        "slide-02.png",
        "slide-03.png",
        "slide-04.png",
        "slide-05.png",
    ];
    for (i, name) in expected.iter().enumerate() {
        let mut file = archive.by_index(i).unwrap();
        assert_eq!(file.name(), *name);

        let mut data = Vec::new();
        file.read_to_end(&mut data).unwrap();
        let decoded = image::load_from_memory(&data).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (1200, 675));

        if i == 0 {
            // Title slide: sunset-gradient runs #f97316 -> #db2777 from the
            // top-left corner to the bottom-right corner.
            assert_eq!(decoded.get_pixel(0, 0).0, [0xf9, 0x73, 0x16, 255]);
            assert_eq!(decoded.get_pixel(1199, 674).0, [0xdb, 0x27, 0x77, 255]);
        }
    }
}

#[test]
fn test_deck_json_round_trip_through_files() {
    let slides = vec![
        slide("a", SlideKind::Title, "Hello"),
        slide("b", SlideKind::Cta, "Bye"),
    ];
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("deck.json");
    std::fs::write(&path, carousel::slides::deck_to_json(&slides).unwrap()).unwrap();

    let loaded = carousel::load_deck(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].headline, "Hello");
    assert_eq!(loaded[1].kind, SlideKind::Cta);
}
