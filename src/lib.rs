//! # Portrait-Compositor
//!
//! Turn landscape (or any) photos into 1080x1920 portrait canvases for short-video platforms.
//!
//! Each image is scaled to fit inside the canvas and centered over a blurred, darkened,
//! cover-cropped copy of itself, then written next to the source as `<name>_portrait.jpg`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use portrait_compositor::{BatchEngine, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let engine = BatchEngine::new(Config::default());
//! let report = engine.run(".").await?;
//!
//! for failure in &report.failures {
//!     eprintln!("{:?}: {}", failure.input, failure.error);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`canvas`] - Layout, rendering and JPEG encoding of a single canvas
//! - [`batch`] - Directory scanning and concurrent per-file conversion
//! - [`config`] - Configuration management
//!
//! ## Rendering a single image
//!
//! ```rust,no_run
//! use portrait_compositor::canvas::PortraitRenderer;
//! use portrait_compositor::config::CanvasConfig;
//!
//! # fn main() -> portrait_compositor::Result<()> {
//! let renderer = PortraitRenderer::new(CanvasConfig::default());
//! let placement = renderer.convert("holiday.jpg", "holiday_portrait.jpg")?;
//! println!("foreground at {}x{}", placement.left, placement.top);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod canvas;
pub mod config;
pub mod error;

// Re-export commonly used types for convenience
pub use crate::{
    batch::{BatchEngine, BatchReport},
    canvas::{Placement, PortraitRenderer},
    config::Config,
    error::{CompositorError, Result},
};
