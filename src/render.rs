// ABOUTME: Slide rendering module for the carousel-slides application
// ABOUTME: Rasterizes one slide composition to an exact-size PNG canvas

use crate::errors::{CarouselError, Result};
use crate::fonts::FontSet;
use crate::layout::LayoutMetrics;
use crate::logo::{LogoOverlay, LogoPosition};
use crate::platform::ExportTarget;
use crate::slides::Slide;
use crate::style::{BackgroundStyle, Color, ColorPair, EffectiveStyle};
use fontdue::layout::{
    CoordinateSystem, HorizontalAlign, Layout, LayoutSettings, TextStyle, WrapStyle,
};
use image::{imageops, Rgba, RgbaImage};
use std::io::Cursor;

/// Line height multiplier for wrapped headlines.
const HEADLINE_LINE_HEIGHT: f32 = 1.2;
/// Line height multiplier for body text.
const BODY_LINE_HEIGHT: f32 = 1.4;
/// Headline wraps within this fraction of the content width.
const HEADLINE_WIDTH_FRAC: f32 = 0.9;
/// Body wraps within this fraction of the content width.
const BODY_WIDTH_FRAC: f32 = 0.85;
/// Body text is drawn slightly translucent.
const BODY_OPACITY: f32 = 0.9;

/// Everything needed to paint one slide: content, resolved style, scaled
/// layout, and the optional logo overlay. Borrowed per render call, so the
/// batch owns all inputs.
#[derive(Clone, Copy)]
pub struct SlideComposition<'a> {
    pub slide: &'a Slide,
    pub style: &'a EffectiveStyle,
    pub layout: &'a LayoutMetrics,
    pub logo: Option<&'a LogoOverlay>,
}

/// One finished raster slide: encoded PNG bytes plus its pixel size.
#[derive(Debug, Clone)]
pub struct RenderedSlide {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// A named file inside the export archive.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub name: String,
    pub data: Vec<u8>,
}

/// The swappable rendering surface. The orchestrator only talks to this
/// trait, so the raster backend can be replaced without touching the batch
/// logic.
pub trait RenderBackend {
    /// Rasterize one composition to an exact `width` x `height` image.
    fn render_slide(
        &self,
        composition: &SlideComposition<'_>,
        width: u32,
        height: u32,
    ) -> Result<RenderedSlide>;

    /// Pack named entries into a compressed archive.
    fn assemble_archive(&self, entries: &[ArchiveEntry]) -> Result<Vec<u8>>;

    /// Pack rendered slides into a paged document, one page per slide sized
    /// to the target platform.
    fn assemble_paged_document(
        &self,
        pages: &[RenderedSlide],
        target: &ExportTarget,
    ) -> Result<Vec<u8>>;
}

/// Default CPU rasterizer: per-pixel background fill, fontdue text layout,
/// and `image`-based compositing. Output pixels are reproducible for
/// identical inputs.
pub struct RasterBackend {
    fonts: FontSet,
}

impl RasterBackend {
    pub fn new(fonts: FontSet) -> Self {
        Self { fonts }
    }

    fn text_blocks<'a>(
        &'a self,
        composition: &SlideComposition<'a>,
        width: u32,
    ) -> Vec<TextBlock<'a>> {
        let slide = composition.slide;
        let layout = composition.layout;
        let content_width = (width.saturating_sub(2 * layout.padding)).max(1) as f32;

        let mut blocks = Vec::with_capacity(3);

        if let Some(emoji) = slide.emoji.as_deref() {
            if !emoji.is_empty() {
                blocks.push(TextBlock {
                    text: emoji,
                    font: &self.fonts.regular,
                    px: layout.emoji_size as f32,
                    max_width: content_width,
                    line_height: 1.0,
                    opacity: 1.0,
                    margin_below: layout.emoji_margin as f32,
                });
            }
        }

        let has_body = slide.body.as_deref().map_or(false, |b| !b.is_empty());
        blocks.push(TextBlock {
            text: &slide.headline,
            font: &self.fonts.bold,
            px: layout.headline_size as f32,
            max_width: (content_width * HEADLINE_WIDTH_FRAC).max(1.0),
            line_height: HEADLINE_LINE_HEIGHT,
            opacity: 1.0,
            margin_below: if has_body {
                layout.headline_margin as f32
            } else {
                0.0
            },
        });

        if let Some(body) = slide.body.as_deref() {
            if !body.is_empty() {
                blocks.push(TextBlock {
                    text: body,
                    font: &self.fonts.regular,
                    px: layout.body_size as f32,
                    max_width: (content_width * BODY_WIDTH_FRAC).max(1.0),
                    line_height: BODY_LINE_HEIGHT,
                    opacity: BODY_OPACITY,
                    margin_below: 0.0,
                });
            }
        }

        blocks
    }
}

impl RenderBackend for RasterBackend {
    fn render_slide(
        &self,
        composition: &SlideComposition<'_>,
        width: u32,
        height: u32,
    ) -> Result<RenderedSlide> {
        if width == 0 || height == 0 {
            return Err(CarouselError::RenderError(format!(
                "Canvas dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        // The canvas is the scoped rendering surface; it is dropped when
        // this call returns, whether or not encoding succeeds.
        let mut canvas = RgbaImage::new(width, height);
        fill_background(
            &mut canvas,
            composition.style.background,
            composition.style.mode,
        );

        let blocks = self.text_blocks(composition, width);
        let heights: Vec<f32> = blocks
            .iter()
            .map(|block| block.build_layout(width as f32, 0.0).height())
            .collect();
        let total: f32 = blocks
            .iter()
            .zip(&heights)
            .map(|(block, h)| h + block.margin_below)
            .sum();

        // Center the stack vertically, never starting above the padding line.
        let mut top = ((height as f32 - total) / 2.0).max(composition.layout.padding as f32);
        for (block, block_height) in blocks.iter().zip(&heights) {
            let laid_out = block.build_layout(width as f32, top);
            blit_text(&mut canvas, block, &laid_out, composition.style.text);
            top += block_height + block.margin_below;
        }

        if let Some(logo) = composition.logo {
            overlay_logo(&mut canvas, logo, composition.layout);
        }

        let mut png = Vec::new();
        image::DynamicImage::ImageRgba8(canvas)
            .write_to(&mut Cursor::new(&mut png), image::ImageOutputFormat::Png)
            .map_err(CarouselError::ImageError)?;

        Ok(RenderedSlide { png, width, height })
    }

    fn assemble_archive(&self, entries: &[ArchiveEntry]) -> Result<Vec<u8>> {
        crate::artifact::assemble_image_archive(entries)
    }

    fn assemble_paged_document(
        &self,
        pages: &[RenderedSlide],
        target: &ExportTarget,
    ) -> Result<Vec<u8>> {
        crate::artifact::assemble_paged_document(pages, target)
    }
}

/// One run of text with its face, size, wrap width, and spacing.
struct TextBlock<'a> {
    text: &'a str,
    font: &'a fontdue::Font,
    px: f32,
    max_width: f32,
    line_height: f32,
    opacity: f32,
    margin_below: f32,
}

impl TextBlock<'_> {
    fn build_layout(&self, canvas_width: f32, top: f32) -> Layout {
        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: (canvas_width - self.max_width) / 2.0,
            y: top,
            max_width: Some(self.max_width),
            horizontal_align: HorizontalAlign::Center,
            line_height: self.line_height,
            wrap_style: WrapStyle::Word,
            ..LayoutSettings::default()
        });
        layout.append(
            &[self.font],
            &TextStyle::new(self.text, self.px, 0),
        );
        layout
    }
}

/// Paint the background: a flat `from` fill, or a linear blend from `from`
/// at the top-left corner to `to` at the bottom-right corner.
pub fn fill_background(canvas: &mut RgbaImage, pair: ColorPair, mode: BackgroundStyle) {
    let (width, height) = canvas.dimensions();
    match mode {
        BackgroundStyle::Solid => {
            let px = Rgba([pair.from.r, pair.from.g, pair.from.b, 255]);
            for pixel in canvas.pixels_mut() {
                *pixel = px;
            }
        }
        BackgroundStyle::Gradient => {
            for y in 0..height {
                for x in 0..width {
                    canvas.put_pixel(x, y, gradient_at(pair, x, y, width, height));
                }
            }
        }
    }
}

/// Gradient color at one pixel: the position projected onto the top-left to
/// bottom-right diagonal selects the blend amount.
pub fn gradient_at(pair: ColorPair, x: u32, y: u32, width: u32, height: u32) -> Rgba<u8> {
    let dx = width.saturating_sub(1) as f32;
    let dy = height.saturating_sub(1) as f32;
    let denom = dx * dx + dy * dy;
    let t = if denom == 0.0 {
        0.0
    } else {
        (x as f32 * dx + y as f32 * dy) / denom
    };
    Rgba([
        lerp_channel(pair.from.r, pair.to.r, t),
        lerp_channel(pair.from.g, pair.to.g, t),
        lerp_channel(pair.from.b, pair.to.b, t),
        255,
    ])
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * t).round() as u8
}

fn blit_text(canvas: &mut RgbaImage, block: &TextBlock<'_>, layout: &Layout, color: Color) {
    let (width, height) = canvas.dimensions();
    for glyph in layout.glyphs() {
        if glyph.width == 0 || glyph.height == 0 {
            continue;
        }
        let (metrics, coverage) = block.font.rasterize_config(glyph.key);
        let origin_x = glyph.x.round() as i64;
        let origin_y = glyph.y.round() as i64;
        for row in 0..metrics.height {
            for col in 0..metrics.width {
                let px = origin_x + col as i64;
                let py = origin_y + row as i64;
                if px < 0 || py < 0 || px >= width as i64 || py >= height as i64 {
                    continue;
                }
                let alpha =
                    coverage[row * metrics.width + col] as f32 / 255.0 * block.opacity;
                if alpha <= 0.0 {
                    continue;
                }
                let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                pixel.0[0] = blend_channel(pixel.0[0], color.r, alpha);
                pixel.0[1] = blend_channel(pixel.0[1], color.g, alpha);
                pixel.0[2] = blend_channel(pixel.0[2], color.b, alpha);
            }
        }
    }
}

fn blend_channel(dst: u8, src: u8, alpha: f32) -> u8 {
    (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8
}

/// Scale an image to fit within a square of `size` pixels, preserving
/// aspect ratio.
pub fn fit_within(width: u32, height: u32, size: u32) -> (u32, u32) {
    if width == 0 || height == 0 || size == 0 {
        return (0, 0);
    }
    if width >= height {
        let scaled = (height as f64 * size as f64 / width as f64).round() as u32;
        (size, scaled.max(1))
    } else {
        let scaled = (width as f64 * size as f64 / height as f64).round() as u32;
        (scaled.max(1), size)
    }
}

/// Top-left corner of the logo bounding box for a given anchor corner.
pub fn logo_box_origin(
    position: LogoPosition,
    logo_size: u32,
    margin: u32,
    width: u32,
    height: u32,
) -> (i64, i64) {
    let margin = margin as i64;
    let logo_size = logo_size as i64;
    let width = width as i64;
    let height = height as i64;
    match position {
        LogoPosition::TopLeft => (margin, margin),
        LogoPosition::TopRight => (width - margin - logo_size, margin),
        LogoPosition::BottomLeft => (margin, height - margin - logo_size),
        LogoPosition::BottomRight => (width - margin - logo_size, height - margin - logo_size),
    }
}

fn overlay_logo(canvas: &mut RgbaImage, logo: &LogoOverlay, layout: &LayoutMetrics) {
    let (logo_w, logo_h) = logo.image.dimensions();
    let (fit_w, fit_h) = fit_within(logo_w, logo_h, layout.logo_size);
    if fit_w == 0 || fit_h == 0 {
        return;
    }

    let mut scaled = imageops::resize(&logo.image, fit_w, fit_h, imageops::FilterType::Triangle);

    let alpha = f32::from(logo.opacity.min(100)) / 100.0;
    if alpha < 1.0 {
        for pixel in scaled.pixels_mut() {
            pixel.0[3] = (pixel.0[3] as f32 * alpha).round() as u8;
        }
    }

    let (width, height) = canvas.dimensions();
    let (box_x, box_y) = logo_box_origin(
        logo.position,
        layout.logo_size,
        layout.logo_margin,
        width,
        height,
    );
    // Center the contained image inside its square box.
    let x = box_x + i64::from(layout.logo_size.saturating_sub(fit_w)) / 2;
    let y = box_y + i64::from(layout.logo_size.saturating_sub(fit_h)) / 2;
    imageops::overlay(canvas, &scaled, x, y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    fn pair() -> ColorPair {
        ColorPair::new(Color::rgb(0xf9, 0x73, 0x16), Color::rgb(0xdb, 0x27, 0x77))
    }

    #[test]
    fn test_solid_fill_uses_only_from_color() {
        let mut canvas = RgbaImage::new(8, 8);
        fill_background(&mut canvas, pair(), BackgroundStyle::Solid);
        for pixel in canvas.pixels() {
            assert_eq!(pixel.0, [0xf9, 0x73, 0x16, 255]);
        }
    }

    #[test]
    fn test_gradient_corners_hit_endpoints() {
        let mut canvas = RgbaImage::new(100, 60);
        fill_background(&mut canvas, pair(), BackgroundStyle::Gradient);
        assert_eq!(canvas.get_pixel(0, 0).0, [0xf9, 0x73, 0x16, 255]);
        assert_eq!(canvas.get_pixel(99, 59).0, [0xdb, 0x27, 0x77, 255]);
    }

    #[test]
    fn test_gradient_midpoint_is_blend() {
        let p = ColorPair::new(Color::rgb(0, 0, 0), Color::rgb(200, 100, 50));
        let mid = gradient_at(p, 50, 50, 101, 101);
        assert_eq!(mid.0, [100, 50, 25, 255]);
    }

    #[test]
    fn test_gradient_is_deterministic() {
        let a = gradient_at(pair(), 37, 11, 1200, 675);
        let b = gradient_at(pair(), 37, 11, 1200, 675);
        assert_eq!(a, b);
    }

    #[test]
    fn test_logo_box_origin_all_corners() {
        // 80px logo, 40px margin on a 1080x1080 canvas.
        assert_eq!(
            logo_box_origin(LogoPosition::TopLeft, 80, 40, 1080, 1080),
            (40, 40)
        );
        assert_eq!(
            logo_box_origin(LogoPosition::TopRight, 80, 40, 1080, 1080),
            (960, 40)
        );
        assert_eq!(
            logo_box_origin(LogoPosition::BottomLeft, 80, 40, 1080, 1080),
            (40, 960)
        );
        assert_eq!(
            logo_box_origin(LogoPosition::BottomRight, 80, 40, 1080, 1080),
            (960, 960)
        );
    }

    #[test]
    fn test_fit_within_preserves_aspect() {
        assert_eq!(fit_within(200, 100, 80), (80, 40));
        assert_eq!(fit_within(100, 200, 80), (40, 80));
        assert_eq!(fit_within(64, 64, 80), (80, 80));
        assert_eq!(fit_within(0, 10, 80), (0, 0));
    }
}
