// ABOUTME: Library module for the carousel-slides program.
// ABOUTME: Contains core functionality for styling, rendering, and exporting carousel slides.

// Reexport modules
pub mod artifact;
pub mod config;
pub mod deliver;
pub mod errors;
pub mod export;
pub mod fonts;
pub mod generate;
pub mod layout;
pub mod logo;
pub mod platform;
pub mod render;
pub mod slides;
pub mod style;
pub mod templates;

// Reexport common types and functions
pub use config::Config;
pub use deliver::deliver;
pub use errors::{CarouselError, Result};
pub use export::{export_batch, ExportArtifact, ExportFormat, ExportOptions};
pub use fonts::FontSet;
pub use generate::{validate_input_text, OutlineGenerator, SlideGenerator};
pub use layout::{scale_layout, LayoutMetrics};
pub use logo::{LogoConfig, LogoPosition};
pub use platform::{ExportTarget, Platform};
pub use render::{RasterBackend, RenderBackend, RenderedSlide, SlideComposition};
pub use slides::{load_deck, Slide, SlideKind};
pub use style::{resolve_style, BackgroundStyle, Color, ColorPair, EffectiveStyle, StylePalette};
pub use templates::{Template, TemplateCategory};
