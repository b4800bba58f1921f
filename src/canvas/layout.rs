use crate::error::{RenderError, Result};

/// Where the scaled foreground lands on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Width of the scaled foreground
    pub width: u32,

    /// Height of the scaled foreground
    pub height: u32,

    /// Horizontal offset from the canvas' left edge
    pub left: u32,

    /// Vertical offset from the canvas' top edge
    pub top: u32,

    /// Canvas the placement was computed for
    pub canvas: (u32, u32),
}

/// Rectangle within the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Placement {
    /// Letterbox a `source_width x source_height` image into the canvas.
    ///
    /// Sources relatively wider than the canvas are scaled to the canvas
    /// width; all others (including exactly the canvas ratio) are scaled to
    /// the canvas height. The foreground is then centered, rounding offsets
    /// down.
    pub fn fit_inside(
        source_width: u32,
        source_height: u32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<Self> {
        if source_width == 0 || source_height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: source_width,
                height: source_height,
            }.into());
        }
        if canvas_width == 0 || canvas_height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: canvas_width,
                height: canvas_height,
            }.into());
        }

        let aspect = source_width as f64 / source_height as f64;

        // w/h > W/H, compared without floating point
        let wider = source_width as u64 * canvas_height as u64
            > canvas_width as u64 * source_height as u64;

        let (width, height) = if wider {
            let height = (canvas_width as f64 / aspect).round() as u32;
            (canvas_width, height.clamp(1, canvas_height))
        } else {
            let width = (canvas_height as f64 * aspect).round() as u32;
            (width.clamp(1, canvas_width), canvas_height)
        };

        Ok(Self {
            width,
            height,
            left: (canvas_width - width) / 2,
            top: (canvas_height - height) / 2,
            canvas: (canvas_width, canvas_height),
        })
    }

    /// Centered part of the source with the canvas' aspect ratio
    ///
    /// Scaling this region to the canvas gives the cover-and-crop backdrop
    /// without ever enlarging the whole source first.
    pub fn cover_region(
        source_width: u32,
        source_height: u32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<CropRegion> {
        if source_width == 0 || source_height == 0 || canvas_width == 0 || canvas_height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: source_width,
                height: source_height,
            }.into());
        }

        let (sw, sh) = (source_width as u64, source_height as u64);
        let (cw, ch) = (canvas_width as u64, canvas_height as u64);

        let (width, height) = if sw * ch > cw * sh {
            let width = ((sh * cw + ch / 2) / ch).clamp(1, sw);
            (width as u32, source_height)
        } else {
            let height = ((sw * ch + cw / 2) / cw).clamp(1, sh);
            (source_width, height as u32)
        };

        Ok(CropRegion {
            x: (source_width - width) / 2,
            y: (source_height - height) / 2,
            width,
            height,
        })
    }

    /// Space between the foreground's right edge and the canvas edge
    pub fn right_margin(&self) -> u32 {
        self.canvas.0 - self.left - self.width
    }

    /// Space between the foreground's bottom edge and the canvas edge
    pub fn bottom_margin(&self) -> u32 {
        self.canvas.1 - self.top - self.height
    }

    /// True when the foreground covers the whole canvas
    pub fn is_full_bleed(&self) -> bool {
        (self.width, self.height) == self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portrait(width: u32, height: u32) -> Placement {
        Placement::fit_inside(width, height, 1080, 1920).unwrap()
    }

    #[test]
    fn test_landscape_fits_width() {
        let placement = portrait(1920, 1080);
        assert_eq!((placement.width, placement.height), (1080, 608));
        assert_eq!((placement.left, placement.top), (0, 656));
    }

    #[test]
    fn test_exact_portrait_ratio_fills_canvas() {
        let placement = portrait(1080, 1920);
        assert_eq!((placement.width, placement.height), (1080, 1920));
        assert_eq!((placement.left, placement.top), (0, 0));
        assert!(placement.is_full_bleed());

        // Same ratio, different resolution
        let placement = portrait(540, 960);
        assert!(placement.is_full_bleed());
    }

    #[test]
    fn test_square_source() {
        let placement = portrait(800, 800);
        assert_eq!((placement.width, placement.height), (1080, 1080));
        assert_eq!((placement.left, placement.top), (0, 420));
    }

    #[test]
    fn test_tall_source_fits_height() {
        let placement = portrait(500, 2000);
        assert_eq!((placement.width, placement.height), (480, 1920));
        assert_eq!((placement.left, placement.top), (300, 0));
    }

    #[test]
    fn test_odd_margin_rounds_offset_down() {
        // 1080 / (4000/2999) = 809.73 -> 810, margin 1110 splits 555/555
        let placement = portrait(4000, 2999);
        assert_eq!(placement.height, 810);
        assert_eq!(placement.top, 555);
        assert_eq!(placement.bottom_margin(), 555);

        // 1920 * 0.301 = 577.92 -> 578, even margin
        let placement = portrait(301, 1000);
        assert_eq!(placement.width, 578);
        assert_eq!(placement.left, 251);
        assert_eq!(placement.right_margin(), 251);

        // 1920 * (1001/3000) = 640.64 -> 641, odd margin leaves the extra pixel on the right
        let placement = portrait(1001, 3000);
        assert_eq!(placement.width, 641);
        assert_eq!(placement.left, 219);
        assert_eq!(placement.right_margin(), 220);
    }

    #[test]
    fn test_extreme_panorama_keeps_one_pixel() {
        let placement = portrait(100_000, 1);
        assert_eq!((placement.width, placement.height), (1080, 1));
        assert_eq!(placement.top, 959);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(Placement::fit_inside(0, 100, 1080, 1920).is_err());
        assert!(Placement::fit_inside(100, 0, 1080, 1920).is_err());
        assert!(Placement::fit_inside(100, 100, 0, 1920).is_err());
    }

    #[test]
    fn test_placement_stays_inside_and_centered() {
        let sources = [
            (1, 1), (3, 2), (2, 3), (9, 16), (16, 9), (4032, 3024), (3024, 4032),
            (1079, 1921), (1081, 1919), (7, 1000), (1000, 7), (6000, 4000),
        ];

        for (w, h) in sources {
            let placement = portrait(w, h);
            assert!(placement.width <= 1080 && placement.height <= 1920, "{}x{}", w, h);
            assert!(
                placement.width == 1080 || placement.height == 1920,
                "{}x{} touches neither edge",
                w,
                h
            );
            assert!(placement.right_margin().abs_diff(placement.left) <= 1);
            assert!(placement.bottom_margin().abs_diff(placement.top) <= 1);
        }
    }

    #[test]
    fn test_cover_region_crops_to_canvas_ratio() {
        let region = Placement::cover_region(1920, 1080, 1080, 1920).unwrap();
        assert_eq!(region, CropRegion { x: 656, y: 0, width: 608, height: 1080 });

        let region = Placement::cover_region(800, 800, 1080, 1920).unwrap();
        assert_eq!(region, CropRegion { x: 175, y: 0, width: 450, height: 800 });

        let region = Placement::cover_region(500, 2000, 1080, 1920).unwrap();
        assert_eq!(region, CropRegion { x: 0, y: 555, width: 500, height: 889 });
    }

    #[test]
    fn test_cover_region_exact_ratio_is_whole_source() {
        let region = Placement::cover_region(1080, 1920, 1080, 1920).unwrap();
        assert_eq!(region, CropRegion { x: 0, y: 0, width: 1080, height: 1920 });
    }

    #[test]
    fn test_cover_region_of_thin_strips_stays_inside_source() {
        let region = Placement::cover_region(100_000, 1, 1080, 1920).unwrap();
        assert_eq!((region.width, region.height), (1, 1));
        assert_eq!(region.x, 49_999);

        let region = Placement::cover_region(1, 100_000, 1080, 1920).unwrap();
        assert_eq!((region.width, region.height), (1, 2));
        assert_eq!(region.y, 49_999);
    }

    #[test]
    fn test_small_canvas() {
        let placement = Placement::fit_inside(80, 80, 90, 160).unwrap();
        assert_eq!((placement.width, placement.height), (90, 90));
        assert_eq!((placement.left, placement.top), (0, 35));
    }
}
