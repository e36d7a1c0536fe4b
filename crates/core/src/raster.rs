//! Immutable RGB8 source image.

use std::path::Path;

use log::info;

use crate::error::{CoreError, Result};
use crate::types::{CropRect, Rgb};

/// Row-major RGB8 pixel grid, 3 bytes per pixel.
///
/// Loaded once at startup and only read afterwards, through [`Image::crop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    /// Decode an image file into RGB8. Alpha and palette formats are flattened.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| CoreError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        info!("image size: {}x{} ({})", width, height, path.display());
        Ok(Self {
            width,
            height,
            pixels: rgb.into_raw(),
        })
    }

    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = rgb_len(width, height);
        if pixels.len() != expected {
            return Err(CoreError::BufferSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn solid(width: u32, height: u32, color: Rgb) -> Self {
        Self::from_fn(width, height, |_, _| color)
    }

    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb) -> Self {
        let mut pixels = Vec::with_capacity(rgb_len(width, height));
        for y in 0..height {
            for x in 0..width {
                let c = f(x, y);
                pixels.extend_from_slice(&[c.r, c.g, c.b]);
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
        Some(Rgb::from_slice(&self.pixels[i..i + 3]))
    }

    /// Copy the pixels inside `rect` into a contiguous RGB8 buffer.
    ///
    /// The rectangle is clamped to the image first, so the returned buffer is
    /// always `rect.width() * rect.height() * 3` bytes of the clamped rect.
    pub fn crop(&self, rect: CropRect) -> (Vec<u8>, u32, u32) {
        let ex = rect.ex.min(self.width);
        let ey = rect.ey.min(self.height);
        let sx = rect.sx.min(ex);
        let sy = rect.sy.min(ey);
        let (w, h) = (ex - sx, ey - sy);

        let stride = self.width as usize * 3;
        let row_len = w as usize * 3;
        let mut out = Vec::with_capacity(rgb_len(w, h));
        for y in sy..ey {
            let start = y as usize * stride + sx as usize * 3;
            out.extend_from_slice(&self.pixels[start..start + row_len]);
        }
        (out, w, h)
    }
}

#[inline]
pub(crate) fn rgb_len(width: u32, height: u32) -> usize {
    (width as usize) * (height as usize) * 3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(w: u32, h: u32) -> Image {
        Image::from_fn(w, h, |x, y| Rgb::new(x as u8, y as u8, 7))
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(Image::from_raw(2, 2, vec![0; 12]).is_ok());
        let err = Image::from_raw(2, 2, vec![0; 11]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::BufferSize {
                expected: 12,
                actual: 11,
                ..
            }
        ));
    }

    #[test]
    fn pixel_lookup_is_row_major() {
        let img = gradient(4, 3);
        assert_eq!(img.pixel(3, 2), Some(Rgb::new(3, 2, 7)));
        assert_eq!(img.pixel(4, 0), None);
        assert_eq!(img.pixel(0, 3), None);
    }

    #[test]
    fn crop_copies_the_requested_window() {
        let img = gradient(5, 4);
        let (buf, w, h) = img.crop(CropRect::new(1, 2, 4, 4));
        assert_eq!((w, h), (3, 2));
        assert_eq!(buf.len(), 18);
        assert_eq!(Rgb::from_slice(&buf[0..3]), Rgb::new(1, 2, 7));
        assert_eq!(Rgb::from_slice(&buf[15..18]), Rgb::new(3, 3, 7));
    }

    #[test]
    fn empty_crop_has_no_pixels() {
        let img = gradient(5, 4);
        let (buf, w, h) = img.crop(CropRect::new(2, 0, 2, 4));
        assert_eq!((w, h), (0, 4));
        assert!(buf.is_empty());
    }

    #[test]
    fn out_of_range_crop_is_clamped() {
        let img = gradient(5, 4);
        let (buf, w, h) = img.crop(CropRect::new(3, 1, 50, 50));
        assert_eq!((w, h), (2, 3));
        assert_eq!(buf.len(), 18);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Image::load("/definitely/not/here.png").unwrap_err();
        assert!(matches!(err, CoreError::ImageLoad { .. }));
        assert!(err.to_string().contains("/definitely/not/here.png"));
    }
}
