use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use slideshow_widget::config::PageConfig;
use slideshow_widget::page::render_page;
use slideshow_widget::texture_loader::{detect_range, missing_slides};
use slideshow_widget::viewer::WindowTarget;
use slideshow_widget::{ImageSource, SlideshowRegistry};

const VIEWER_WIDGET_ID: &str = "viewer";
const MISSING_SAMPLE: usize = 10;

#[derive(Parser)]
#[command(name = "slideshow", version, about = "Numbered-image slideshow widgets")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a static HTML page from a TOML page description
    Page {
        #[arg(short, long)]
        config: PathBuf,
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Browse `<BASE><n>.<EXT>` images in a window
    View {
        /// Path prefix of the images, e.g. `slides/slide_`
        base: String,
        #[arg(long, default_value = "jpg")]
        ext: String,
        /// First index (detected from the directory when omitted)
        #[arg(long, requires = "end")]
        start: Option<i64>,
        /// Last index (detected from the directory when omitted)
        #[arg(long, requires = "start")]
        end: Option<i64>,
        /// Zero-pad indices to this many digits
        #[arg(long, default_value_t = 0)]
        pad: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Page { config, output } => page(config, output),
        Command::View { base, ext, start, end, pad } => view(base, ext, start.zip(end), pad),
    }
}

fn page(config_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let config = PageConfig::load(&config_path)?;
    let html = render_page(&config)?;
    match output {
        Some(path) => {
            fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(output = %path.display(), "wrote page");
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn view(base: String, ext: String, range: Option<(i64, i64)>, pad: usize) -> Result<()> {
    let (start, end) = match range {
        Some(range) => range,
        None => detect_range(&base, &ext)?,
    };
    let source = ImageSource::new(base, ext).with_pad(pad);
    info!("Slides {}..={} from {}", start, end, source.uri_for(start));

    match missing_slides(&source, start, end, MISSING_SAMPLE) {
        Ok(missing) if missing.count > 0 => {
            warn!(count = %missing.count, first = ?missing.sample, "some slides have no image file")
        }
        Ok(_) => {}
        Err(e) => warn!("Could not check slide files: {:#}", e),
    }

    let title = format!("Slideshow - {}", source.base_uri);
    let mut window = WindowTarget::open(VIEWER_WIDGET_ID, &title);
    let mut registry = SlideshowRegistry::new();
    registry.initialize(&mut window, VIEWER_WIDGET_ID, &source, start, end)?;
    window.run(&mut registry)
}
