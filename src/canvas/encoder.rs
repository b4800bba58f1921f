use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::buffer::ConvertBuffer;
use image::{RgbImage, RgbaImage};

use crate::error::{RenderError, Result};

/// Flatten the canvas to RGB and write it as a JPEG at `quality` (1-100)
pub fn write_jpeg<P: AsRef<Path>>(canvas: &RgbaImage, path: P, quality: u8) -> Result<()> {
    let path = path.as_ref();
    let encoding_failed = |reason: String| RenderError::EncodingFailed {
        path: path.display().to_string(),
        reason,
    };

    // JPEG has no alpha; the canvas is opaque so dropping the channel loses nothing
    let rgb: RgbImage = canvas.convert();

    let file = File::create(path).map_err(|e| encoding_failed(e.to_string()))?;
    let mut writer = BufWriter::new(file);

    JpegEncoder::new_with_quality(&mut writer, quality)
        .encode_image(&rgb)
        .map_err(|e| encoding_failed(e.to_string()))?;

    writer.flush().map_err(|e| encoding_failed(e.to_string()))?;
    Ok(())
}
