use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use portrait_compositor::{config::Config, BatchEngine};

#[derive(Parser)]
#[command(
    name = "portrait-compositor",
    version,
    about = "Convert photos into 1080x1920 portrait canvases with a blurred backdrop",
    long_about = "Portrait-Compositor scales every .jpg in a directory to fit a 9:16 canvas and fills the rest with a blurred, darkened copy of the same photo. Outputs are written next to the inputs as <name>_portrait.jpg and are skipped on later runs."
)]
struct Cli {
    /// Directory to process
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of images converted at once
    #[arg(short = 'j', long)]
    workers: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(log_level).into())
                .from_env_lossy(),
        )
        .init();

    info!("Starting Portrait-Compositor v{}", env!("CARGO_PKG_VERSION"));
    info!("Directory: {:?}", cli.dir);

    // Load configuration
    let mut config = match cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(&config_path)?
        }
        None => Config::default(),
    };

    if let Some(workers) = cli.workers {
        config.batch.workers = workers;
    }
    config.validate()?;

    info!(
        "Canvas: {}x{}, blur {}, brightness {}, quality {}",
        config.canvas.width,
        config.canvas.height,
        config.canvas.blur_radius,
        config.canvas.brightness,
        config.canvas.quality
    );

    let engine = BatchEngine::new(config);
    let report = engine
        .run(&cli.dir)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    info!(
        "Done: {} of {} image(s) converted",
        report.converted.len(),
        report.total()
    );
    Ok(())
}
