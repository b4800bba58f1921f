use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use rayon::prelude::*;
use tracing::debug;

use crate::canvas::encoder;
use crate::canvas::layout::Placement;
use crate::config::CanvasConfig;
use crate::error::{RenderError, Result};

/// Turns a single source image into a portrait canvas: the image scaled to
/// fit, centered over a blurred and darkened cover-crop of itself.
#[derive(Debug, Clone)]
pub struct PortraitRenderer {
    config: CanvasConfig,
}

impl PortraitRenderer {
    pub fn new(config: CanvasConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Compute where `source` goes on this renderer's canvas
    pub fn placement(&self, source: &DynamicImage) -> Result<Placement> {
        let (width, height) = source.dimensions();
        Placement::fit_inside(width, height, self.config.width, self.config.height)
    }

    /// Scale the source to exactly the placement's size
    pub fn render_foreground(&self, source: &DynamicImage, placement: &Placement) -> RgbaImage {
        source
            .resize_exact(placement.width, placement.height, FilterType::Lanczos3)
            .to_rgba8()
    }

    /// Cover-crop the source to the canvas, blur it and darken it
    pub fn render_background(&self, source: &DynamicImage) -> Result<RgbaImage> {
        let (width, height) = source.dimensions();
        let region = Placement::cover_region(width, height, self.config.width, self.config.height)?;

        let filled = source
            .crop_imm(region.x, region.y, region.width, region.height)
            .resize_exact(self.config.width, self.config.height, FilterType::Lanczos3);

        let blurred = if self.config.blur_radius > 0.0 {
            filled.blur(self.config.blur_radius)
        } else {
            filled
        };

        let mut background = blurred.to_rgba8();
        darken(&mut background, self.config.brightness);
        Ok(background)
    }

    /// Layer background then foreground onto an opaque black canvas
    pub fn compose(&self, background: &RgbaImage, foreground: &RgbaImage, placement: &Placement) -> RgbaImage {
        let mut canvas = RgbaImage::from_pixel(
            self.config.width,
            self.config.height,
            Rgba([0, 0, 0, 255]),
        );

        imageops::overlay(&mut canvas, background, 0, 0);
        imageops::overlay(&mut canvas, foreground, placement.left as i64, placement.top as i64);
        canvas
    }

    /// Produce the finished canvas for an already decoded source
    pub fn render(&self, source: &DynamicImage) -> Result<(RgbaImage, Placement)> {
        let placement = self.placement(source)?;
        debug!(
            "Placing {}x{} source at {}x{}+{}+{}",
            source.width(), source.height(),
            placement.width, placement.height, placement.left, placement.top
        );

        let background = self.render_background(source)?;
        let foreground = self.render_foreground(source, &placement);

        Ok((self.compose(&background, &foreground, &placement), placement))
    }

    /// Decode `input`, render it and write the JPEG to `output`
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<Placement> {
        let source = load_source(input)?;
        let (canvas, placement) = self.render(&source)?;
        encoder::write_jpeg(&canvas, output, self.config.quality)?;
        Ok(placement)
    }
}

impl Default for PortraitRenderer {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

/// Decode an image, sniffing the format from its content rather than its extension
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    let decode_failed = |reason: String| RenderError::DecodeFailed {
        path: path.display().to_string(),
        reason,
    };

    let image = image::io::Reader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_failed(e.to_string()))?
        .decode()
        .map_err(|e| decode_failed(e.to_string()))?;

    Ok(image)
}

/// Multiply the RGB channels by `factor`, leaving alpha alone
pub fn darken(image: &mut RgbaImage, factor: f32) {
    let row_len = (image.width() as usize * 4).max(4);

    image.par_chunks_mut(row_len).for_each(|row| {
        for pixel in row.chunks_exact_mut(4) {
            for channel in &mut pixel[..3] {
                *channel = (*channel as f32 * factor).round().clamp(0.0, 255.0) as u8;
            }
        }
    });
}
