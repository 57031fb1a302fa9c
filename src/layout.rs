// ABOUTME: Layout scaling module for the carousel-slides application
// ABOUTME: Derives per-dimension typography and spacing from the 1080px reference design

/// Short side of the reference design canvas, in pixels.
pub const REFERENCE_SIZE: u32 = 1080;

/// Emoji glyph size at reference scale.
pub const REF_EMOJI_SIZE: u32 = 120;
/// Headline font size at reference scale.
pub const REF_HEADLINE_SIZE: u32 = 56;
/// Body font size at reference scale.
pub const REF_BODY_SIZE: u32 = 32;
/// Logo square size at reference scale.
pub const REF_LOGO_SIZE: u32 = 80;
/// Outer canvas padding at reference scale.
pub const REF_PADDING: u32 = 60;
/// Gap below the emoji glyph at reference scale.
pub const REF_EMOJI_MARGIN: u32 = 24;
/// Gap below the headline at reference scale.
pub const REF_HEADLINE_MARGIN: u32 = 16;
/// Corner inset for the logo overlay at reference scale.
pub const REF_LOGO_MARGIN: u32 = 40;

/// All linear dimensions for one target canvas, in integer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    pub emoji_size: u32,
    pub headline_size: u32,
    pub body_size: u32,
    pub logo_size: u32,
    pub padding: u32,
    pub emoji_margin: u32,
    pub headline_margin: u32,
    pub logo_margin: u32,
}

/// Scale factor for a target canvas: short side over the 1080 reference.
pub fn scale_factor(width: u32, height: u32) -> f64 {
    debug_assert!(width > 0 && height > 0, "target dimensions must be positive");
    f64::from(width.min(height)) / f64::from(REFERENCE_SIZE)
}

fn scaled(reference: u32, factor: f64) -> u32 {
    (f64::from(reference) * factor).round() as u32
}

/// Compute the layout metrics for a target canvas. Every dimension is the
/// reference constant times the scale factor, rounded to the nearest pixel,
/// so visual proportions hold across platforms.
pub fn scale_layout(width: u32, height: u32) -> LayoutMetrics {
    let factor = scale_factor(width, height);
    LayoutMetrics {
        emoji_size: scaled(REF_EMOJI_SIZE, factor),
        headline_size: scaled(REF_HEADLINE_SIZE, factor),
        body_size: scaled(REF_BODY_SIZE, factor),
        logo_size: scaled(REF_LOGO_SIZE, factor),
        padding: scaled(REF_PADDING, factor),
        emoji_margin: scaled(REF_EMOJI_MARGIN, factor),
        headline_margin: scaled(REF_HEADLINE_MARGIN, factor),
        logo_margin: scaled(REF_LOGO_MARGIN, factor),
    }
}
