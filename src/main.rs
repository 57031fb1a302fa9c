// ABOUTME: Main entry point for the carousel-slides program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use carousel::export::ExportFormat;
use carousel::logo::LogoPosition;
use carousel::platform::Platform;
use carousel::style::{BackgroundStyle, StylePalette};
use carousel::{templates, CarouselError, Config, FontSet, OutlineGenerator, SlideGenerator};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a slide deck as a PNG archive or PDF document
    Export(ExportArgs),

    /// Generate a slide deck from free-form text
    Generate(GenerateArgs),

    /// List the template catalog
    Templates(TemplatesArgs),
}

#[derive(Args)]
struct ExportArgs {
    /// Path to the slide deck JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Output file or directory
    #[arg(short, long)]
    output: PathBuf,

    /// Target platform: instagram, linkedin, twitter, facebook
    #[arg(short, long, default_value = "instagram")]
    platform: String,

    /// Artifact format: 'archive' (ZIP of PNGs) or 'document' (PDF)
    #[arg(short, long, default_value = "archive")]
    format: String,

    /// Template id from the catalog
    #[arg(short, long)]
    template: Option<String>,

    /// Path to a custom palette JSON file (overrides the template)
    #[arg(long)]
    custom_colors: Option<PathBuf>,

    /// Background style: gradient or solid
    #[arg(long)]
    background: Option<String>,

    /// Font family name
    #[arg(long)]
    font: Option<String>,

    /// Font file to use instead of a system family lookup
    #[arg(long)]
    font_path: Option<PathBuf>,

    /// Logo image path or URL
    #[arg(long)]
    logo: Option<String>,

    /// Logo corner: top-left, top-right, bottom-left, bottom-right
    #[arg(long)]
    logo_position: Option<String>,

    /// Logo opacity in percent (0-100)
    #[arg(long)]
    logo_opacity: Option<u8>,
}

#[derive(Args)]
struct GenerateArgs {
    /// Path to the input text file (50-5000 characters)
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the output slide deck JSON file
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct TemplatesArgs {
    /// Filter by category: professional, creative, minimal, bold
    #[arg(short, long)]
    category: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Export(args)) => run_export(args),
        Some(Commands::Generate(args)) => run_generate(args),
        Some(Commands::Templates(args)) => run_templates(args),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_export(args: &ExportArgs) -> carousel::Result<()> {
    let config = Config::from_env();

    let slides = carousel::load_deck(&args.input)?;
    let platform: Platform = args.platform.parse()?;
    let format: ExportFormat = args.format.parse()?;

    let template = match &args.template {
        Some(id) => Some(
            templates::find(id).ok_or_else(|| CarouselError::UnknownTemplate(id.clone()))?,
        ),
        None => None,
    };

    let custom_colors: Option<StylePalette> = match &args.custom_colors {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(CarouselError::FileReadError)?;
            Some(serde_json::from_str(&raw)?)
        }
        None => None,
    };

    let background = args
        .background
        .as_deref()
        .map(str::parse::<BackgroundStyle>)
        .transpose()?;
    let logo_position = args
        .logo_position
        .as_deref()
        .map(str::parse::<LogoPosition>)
        .transpose()?;

    let options = config.get_export_options(
        platform,
        template,
        custom_colors,
        background,
        args.font.clone(),
        args.logo.clone(),
        logo_position,
        args.logo_opacity,
    );

    let fonts = match args.font_path.as_ref().or(config.font_path.as_ref()) {
        Some(path) => FontSet::from_file(path)?,
        None => FontSet::load(&options.font_family)?,
    };
    let backend = carousel::RasterBackend::new(fonts);

    println!(
        "Exporting {} slides for {}...",
        slides.len(),
        platform.label()
    );
    let artifact = carousel::export_batch(&slides, &options, format, &backend, |done, total| {
        println!("  rendered {}/{}", done, total);
    })?;

    let path = carousel::deliver(&artifact, &args.output)?;
    println!("Export complete: {:?}", path);
    Ok(())
}

fn run_generate(args: &GenerateArgs) -> carousel::Result<()> {
    let text = fs::read_to_string(&args.input).map_err(CarouselError::FileReadError)?;
    let slides = OutlineGenerator.generate(text.trim())?;
    let json = carousel::slides::deck_to_json(&slides)?;
    fs::write(&args.output, json).map_err(CarouselError::FileReadError)?;
    println!("Wrote {} slides to {:?}", slides.len(), args.output);
    Ok(())
}

fn run_templates(args: &TemplatesArgs) -> carousel::Result<()> {
    let list = match &args.category {
        Some(category) => templates::by_category(category.parse()?),
        None => templates::all(),
    };

    for template in list {
        println!(
            "{:<18} {:<14} {} [{} -> {}]",
            template.id,
            template.category.as_str(),
            template.description,
            template.colors.title.from,
            template.colors.title.to
        );
    }
    Ok(())
}
