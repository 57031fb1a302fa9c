// ABOUTME: Artifact assembly module for the carousel-slides application
// ABOUTME: Packs rendered slides into a ZIP of numbered PNGs or a paged PDF document

use crate::errors::{CarouselError, Result};
use crate::platform::ExportTarget;
use crate::render::{ArchiveEntry, RenderedSlide};
use log::info;
use printpdf::{Image, ImageTransform, Mm, PdfDocument};
use std::io::{BufWriter, Cursor, Write};
use zip::{write::FileOptions, ZipWriter};

/// Millimeters per pixel at 96 DPI, the conversion used for document pages.
pub const PX_TO_MM: f64 = 0.264583;

/// Document page orientation, derived from the target canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOrientation {
    Portrait,
    Landscape,
}

/// Landscape iff the canvas is wider than tall.
pub fn orientation(target: &ExportTarget) -> PageOrientation {
    if target.width > target.height {
        PageOrientation::Landscape
    } else {
        PageOrientation::Portrait
    }
}

/// Document page size in millimeters for a pixel canvas.
pub fn page_size_mm(target: &ExportTarget) -> (f64, f64) {
    (
        f64::from(target.width) * PX_TO_MM,
        f64::from(target.height) * PX_TO_MM,
    )
}

/// Archive entry name for a slide at `index` (0-based). Two-digit zero
/// padding keeps lexicographic and numeric order identical for up to 99
/// slides.
pub fn slide_entry_name(index: usize) -> String {
    format!("slide-{:02}.png", index + 1)
}

/// Pack named entries into a ZIP archive, in the order given.
pub fn assemble_image_archive(entries: &[ArchiveEntry]) -> Result<Vec<u8>> {
    if entries.is_empty() {
        return Err(CarouselError::ArchiveError(
            "No slides to archive".to_string(),
        ));
    }

    info!("Assembling archive with {} entries", entries.len());
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    for entry in entries {
        zip.start_file(entry.name.as_str(), FileOptions::default())?;
        zip.write_all(&entry.data)
            .map_err(CarouselError::FileReadError)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Pack rendered slides into a PDF with one page per slide. Pages are sized
/// to the target canvas converted at 96 DPI, so each page matches the
/// platform's pixel dimensions exactly.
pub fn assemble_paged_document(pages: &[RenderedSlide], target: &ExportTarget) -> Result<Vec<u8>> {
    if pages.is_empty() {
        return Err(CarouselError::DocumentError(
            "No slides to paginate".to_string(),
        ));
    }

    let (page_w, page_h) = page_size_mm(target);
    info!(
        "Assembling {}-page document at {:.2}x{:.2} mm ({:?})",
        pages.len(),
        page_w,
        page_h,
        orientation(target)
    );

    let (doc, first_page, first_layer) =
        PdfDocument::new("Carousel", Mm(page_w as f32), Mm(page_h as f32), "slide");

    let mut current = (first_page, first_layer);
    for (index, page) in pages.iter().enumerate() {
        if index > 0 {
            current = doc.add_page(Mm(page_w as f32), Mm(page_h as f32), "slide");
        }
        let layer = doc.get_page(current.0).get_layer(current.1);

        let decoded = printpdf::image_crate::load_from_memory(&page.png)
            .map_err(|e| CarouselError::DocumentError(format!("Bad page image: {}", e)))?;
        let rgb = printpdf::image_crate::DynamicImage::ImageRgb8(decoded.to_rgb8());
        let pdf_image = Image::from_dynamic_image(&rgb);
        pdf_image.add_to_layer(
            layer,
            ImageTransform {
                dpi: Some(96.0),
                ..ImageTransform::default()
            },
        );
    }

    let mut bytes = Vec::new();
    doc.save(&mut BufWriter::new(&mut bytes))
        .map_err(|e| CarouselError::DocumentError(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Platform;
    use std::io::Read;
    use zip::ZipArchive;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([9, 9, 9, 255]));
        let mut out = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(
                &mut Cursor::new(&mut out),
                image::ImageOutputFormat::Png,
            )
            .unwrap();
        out
    }

    #[test]
    fn test_entry_names_are_zero_padded() {
        assert_eq!(slide_entry_name(0), "slide-01.png");
        assert_eq!(slide_entry_name(11), "slide-12.png");
        assert_eq!(slide_entry_name(98), "slide-99.png");
    }

    #[test]
    fn test_entry_names_sort_lexicographically() {
        let mut names: Vec<String> = (0..12).map(slide_entry_name).collect();
        let numeric = names.clone();
        names.sort();
        assert_eq!(names, numeric);
    }

    #[test]
    fn test_archive_preserves_entry_order_and_content() {
        let entries: Vec<ArchiveEntry> = (0..3)
            .map(|i| ArchiveEntry {
                name: slide_entry_name(i),
                data: png_bytes(2, 2),
            })
            .collect();
        let bytes = assemble_image_archive(&entries).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 3);
        for (i, expected) in ["slide-01.png", "slide-02.png", "slide-03.png"]
            .iter()
            .enumerate()
        {
            let mut file = archive.by_index(i).unwrap();
            assert_eq!(file.name(), *expected);
            let mut data = Vec::new();
            file.read_to_end(&mut data).unwrap();
            assert_eq!(data, png_bytes(2, 2));
        }
    }

    #[test]
    fn test_empty_archive_is_rejected() {
        assert!(assemble_image_archive(&[]).is_err());
    }

    #[test]
    fn test_orientation_from_target() {
        assert_eq!(
            orientation(&Platform::Twitter.target()),
            PageOrientation::Landscape
        );
        assert_eq!(
            orientation(&Platform::Instagram.target()),
            PageOrientation::Portrait
        );
    }

    #[test]
    fn test_page_size_converts_at_96_dpi() {
        let (w, h) = page_size_mm(&Platform::Twitter.target());
        assert!((w - 1200.0 * 0.264583).abs() < 1e-9);
        assert!((h - 675.0 * 0.264583).abs() < 1e-9);
    }

    #[test]
    fn test_document_has_one_page_per_slide() {
        let target = Platform::Twitter.target();
        let pages: Vec<RenderedSlide> = (0..3)
            .map(|_| RenderedSlide {
                png: png_bytes(12, 7),
                width: 12,
                height: 7,
            })
            .collect();
        let bytes = assemble_paged_document(&pages, &target).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        // The page tree advertises the page count in its /Count entry.
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 3"), "missing page count in document");
    }

    #[test]
    fn test_empty_document_is_rejected() {
        assert!(assemble_paged_document(&[], &Platform::Instagram.target()).is_err());
    }
}
