use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use winit::dpi::LogicalSize;

use quadfit_engine::content::{TextRasterizer, TextStyle};
use quadfit_engine::coords::ContentExtent;
use quadfit_engine::device::GpuInit;
use quadfit_engine::logging::{LoggingConfig, init_logging};
use quadfit_engine::paint::Color;
use quadfit_engine::render::{BlendMode, FlatColorDesc, TexturedDesc};
use quadfit_engine::shell::{QuadShell, QuadSource};
use quadfit_engine::window::{Runtime, RuntimeConfig};

/// Draws one aspect-fitted quad: rendered text, an image, or a flat color.
#[derive(Parser, Debug)]
#[command(name = "quadfit-demo", version, about)]
struct Args {
    /// Text to render onto the quad.
    #[arg(long, default_value = "Hello World")]
    text: String,

    /// TTF/OTF font used for --text. Falls back to common system fonts.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Text pixel size.
    #[arg(long, default_value_t = 120.0)]
    size: f32,

    /// Text color as #rrggbb or #rrggbbaa.
    #[arg(long, default_value = "#ffffff")]
    color: String,

    /// Show an image file instead of text.
    #[arg(long, conflicts_with = "flat")]
    image: Option<PathBuf>,

    /// Draw a flat-colored quad (uses --color) with the given aspect, e.g. 16:9.
    #[arg(long, value_name = "W:H")]
    flat: Option<String>,

    /// Never blend; transparent pixels overwrite the background. By default
    /// blending is on only for content with translucent pixels.
    #[arg(long)]
    opaque: bool,

    /// Flip the texture vertically.
    #[arg(long)]
    flip: bool,

    /// Clear color as #rrggbb.
    #[arg(long, default_value = "#808080")]
    background: String,

    #[arg(long, default_value = "quadfit")]
    title: String,

    #[arg(long, default_value_t = 960.0)]
    width: f64,

    #[arg(long, default_value_t = 540.0)]
    height: f64,

    /// Redraw every frame instead of on demand.
    #[arg(long)]
    continuous: bool,

    /// Log filter (env_logger syntax). Overrides RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(match &args.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let color = parse_color(&args.color)?;
    let clear = parse_color(&args.background)?;
    let source = build_source(&args, color)?;

    let config = RuntimeConfig {
        title: args.title.clone(),
        initial_size: LogicalSize::new(args.width, args.height),
        continuous: args.continuous,
    };

    Runtime::run(config, GpuInit::default(), QuadShell::new(source).with_clear_color(clear))
}

fn build_source(args: &Args, color: Color) -> Result<QuadSource> {
    let blend = if args.opaque { BlendMode::Replace } else { BlendMode::Auto };
    let desc = TexturedDesc { blend, flip_y: args.flip };

    if let Some(aspect) = &args.flat {
        log::info!("source: flat color, aspect {aspect}");
        return Ok(QuadSource::FlatColor(FlatColorDesc {
            color,
            extent: parse_aspect(aspect)?,
            blend,
        }));
    }

    if let Some(path) = &args.image {
        let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        log::info!("source: image {} ({} bytes)", path.display(), bytes.len());
        return Ok(QuadSource::Image { bytes, desc });
    }

    let (font_path, font_bytes) = load_font(args.font.as_deref())?;
    let rasterizer = TextRasterizer::new(&font_bytes)
        .with_context(|| format!("failed to parse font {}", font_path.display()))?;
    log::info!("source: text {:?} at {}px, font {}", args.text, args.size, font_path.display());
    Ok(QuadSource::Text {
        rasterizer,
        text: args.text.clone(),
        style: TextStyle { size: args.size, color },
        desc,
    })
}

fn parse_color(s: &str) -> Result<Color> {
    Color::from_hex(s).with_context(|| format!("invalid color {s:?}, expected #rrggbb or #rrggbbaa"))
}

fn parse_aspect(s: &str) -> Result<ContentExtent> {
    let (w, h) = s.split_once(':').with_context(|| format!("invalid aspect {s:?}, expected W:H"))?;
    let extent = ContentExtent::new(
        w.trim().parse().with_context(|| format!("invalid aspect width {w:?}"))?,
        h.trim().parse().with_context(|| format!("invalid aspect height {h:?}"))?,
    );
    anyhow::ensure!(!extent.is_empty(), "aspect {s:?} has a zero side");
    Ok(extent)
}

fn load_font(explicit: Option<&Path>) -> Result<(PathBuf, Vec<u8>)> {
    if let Some(path) = explicit {
        let bytes = std::fs::read(path).with_context(|| format!("failed to read font {}", path.display()))?;
        return Ok((path.to_path_buf(), bytes));
    }

    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok().map(|bytes| (PathBuf::from(p), bytes)))
    .context("no system font found; pass --font <path>")
}
