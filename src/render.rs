use anyhow::Result;
use fontdue::Font;
use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// Rasterizes a single letter centered on a solid square background.
///
/// The glyph is rendered at 60% of the icon edge length and centered on
/// its measured ink bounding box rather than its advance width, so fonts
/// with asymmetric bearings still come out visually centered.
pub struct Renderer<'a> {
    font: &'a Font,
    background: Rgb<u8>,
    foreground: Rgb<u8>,
    glyph: char,
}

impl<'a> Renderer<'a> {
    pub fn new(font: &'a Font, background: Rgb<u8>, foreground: Rgb<u8>, glyph: char) -> Self {
        Self {
            font,
            background,
            foreground,
            glyph,
        }
    }

    pub fn render(&self, size: u32) -> RgbImage {
        let mut img = RgbImage::from_pixel(size, size, self.background);
        let (metrics, coverage) = self.font.rasterize(self.glyph, point_size(size));
        // fontdue hands back the ink bitmap already cropped to the glyph
        // bounding box, so centering the bitmap centers the ink. At very
        // small sizes the bitmap may exceed the icon; offsets go negative
        // and out-of-bounds pixels are clipped.
        let x0 = (i64::from(size) - metrics.width as i64) / 2;
        let y0 = (i64::from(size) - metrics.height as i64) / 2;
        blend_glyph(&mut img, &coverage, metrics.width, x0, y0, self.foreground);
        img
    }
}

/// Font size for an icon edge length, truncated to a whole pixel.
fn point_size(size: u32) -> f32 {
    (size as f32 * 0.6).trunc()
}

/// Blends a coverage bitmap of the given row width over `img` at
/// `(x0, y0)`, which may be negative. Coverage 0 leaves the background
/// untouched bit for bit; coverage 255 produces the foreground exactly.
fn blend_glyph(img: &mut RgbImage, coverage: &[u8], width: usize, x0: i64, y0: i64, fg: Rgb<u8>) {
    if width == 0 {
        return;
    }
    let (w, h) = (i64::from(img.width()), i64::from(img.height()));
    for (i, &cov) in coverage.iter().enumerate() {
        if cov == 0 {
            continue;
        }
        let x = x0 + (i % width) as i64;
        let y = y0 + (i / width) as i64;
        if x < 0 || y < 0 || x >= w || y >= h {
            continue;
        }
        let px = img.get_pixel_mut(x as u32, y as u32);
        for c in 0..3 {
            let bg = u16::from(px.0[c]);
            let f = u16::from(fg.0[c]);
            let a = u16::from(cov);
            px.0[c] = ((bg * (255 - a) + f * a + 127) / 255) as u8;
        }
    }
}

/// Writes `img` as PNG to `path`, creating parent directories as needed
/// and overwriting any existing file.
pub fn write_png(img: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    const BG: Rgb<u8> = Rgb([0x8a, 0x3d, 0xff]);
    const FG: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

    #[test]
    fn point_size_truncates() {
        assert_eq!(point_size(20), 12.0);
        assert_eq!(point_size(29), 17.0);
        assert_eq!(point_size(120), 72.0);
        assert_eq!(point_size(167), 100.0);
        assert_eq!(point_size(1024), 614.0);
    }

    #[test]
    fn blend_extremes_are_exact() {
        let mut img = RgbImage::from_pixel(4, 4, BG);
        // 2x2 bitmap: opaque, transparent, half, opaque
        blend_glyph(&mut img, &[255, 0, 128, 255], 2, 1, 1, FG);
        assert_eq!(*img.get_pixel(1, 1), FG);
        assert_eq!(*img.get_pixel(2, 1), BG);
        assert_eq!(*img.get_pixel(2, 2), FG);
        // all pixels outside the bitmap untouched
        assert_eq!(*img.get_pixel(0, 0), BG);
        assert_eq!(*img.get_pixel(3, 3), BG);
        assert_eq!(*img.get_pixel(0, 2), BG);
        // half coverage lands strictly between both colors
        let mid = *img.get_pixel(1, 2);
        for c in 0..3 {
            assert!(mid.0[c] >= BG.0[c].min(FG.0[c]));
            assert!(mid.0[c] <= BG.0[c].max(FG.0[c]));
        }
    }

    #[test]
    fn blend_clips_negative_and_overflowing_offsets() {
        let mut img = RgbImage::from_pixel(2, 2, BG);
        // 4x4 opaque bitmap centered on a 2x2 icon: offsets are -1
        blend_glyph(&mut img, &[255; 16], 4, -1, -1, FG);
        for (_, _, px) in img.enumerate_pixels() {
            assert_eq!(*px, FG);
        }
        // entirely off-canvas bitmap is a no-op
        let mut img = RgbImage::from_pixel(2, 2, BG);
        blend_glyph(&mut img, &[255; 4], 2, 5, 5, FG);
        for (_, _, px) in img.enumerate_pixels() {
            assert_eq!(*px, BG);
        }
    }

    #[test]
    fn blend_empty_bitmap_is_noop() {
        let mut img = RgbImage::from_pixel(3, 3, BG);
        blend_glyph(&mut img, &[], 0, 0, 0, FG);
        for (_, _, px) in img.enumerate_pixels() {
            assert_eq!(*px, BG);
        }
    }

    #[test]
    fn write_creates_dirs_and_overwrites() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("android/mipmap-mdpi/ic_launcher.png");

        let img = RgbImage::from_pixel(48, 48, BG);
        write_png(&img, &path)?;
        let first = std::fs::read(&path)?;

        // second run against the existing tree overwrites in place
        write_png(&img, &path)?;
        let second = std::fs::read(&path)?;
        assert_eq!(first, second);

        let decoded = image::open(&path)?.to_rgb8();
        assert_eq!(decoded.dimensions(), (48, 48));
        for (_, _, px) in decoded.enumerate_pixels() {
            assert_eq!(*px, BG);
        }
        Ok(())
    }
}
