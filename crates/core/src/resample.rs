//! Area-average resampling of a crop into the render grid.
//!
//! The kernel is `fast_image_resize`'s box convolution, which averages every
//! source pixel covered by a destination pixel when downscaling.

use std::num::NonZeroU32;

use fast_image_resize as fir;
use log::trace;

use crate::error::{CoreError, Result};
use crate::raster::{rgb_len, Image};
use crate::types::{CropRect, RenderSize, Rgb};
use crate::viewport::compute_render_size;

/// Resized RGB8 pixels for one frame. Discarded after encoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RenderBuffer {
    pub fn empty() -> Self {
        Self::default()
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
        let mut pixels = Vec::with_capacity(rgb_len(width, height));
        for _ in 0..(width as usize * height as usize) {
            pixels.extend_from_slice(&[color.r, color.g, color.b]);
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

    pub fn size(&self) -> RenderSize {
        RenderSize::new(self.width, self.height)
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`. Panics when out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
        Rgb::from_slice(&self.pixels[i..i + 3])
    }
}

/// Resize a packed RGB8 buffer to `dst_w x dst_h`.
///
/// Zero-sized sources or targets produce an empty buffer without touching
/// the resize primitive.
pub fn resize(pixels: Vec<u8>, src_w: u32, src_h: u32, dst_w: u32, dst_h: u32) -> Result<RenderBuffer> {
    let (Some(sw), Some(sh), Some(dw), Some(dh)) = (
        NonZeroU32::new(src_w),
        NonZeroU32::new(src_h),
        NonZeroU32::new(dst_w),
        NonZeroU32::new(dst_h),
    ) else {
        return Ok(RenderBuffer::empty());
    };

    if src_w == dst_w && src_h == dst_h {
        return RenderBuffer::from_raw(dst_w, dst_h, pixels);
    }

    let fail = |reason: String| CoreError::Resize {
        src_w,
        src_h,
        dst_w,
        dst_h,
        reason,
    };

    let src = fir::Image::from_vec_u8(sw, sh, pixels, fir::PixelType::U8x3)
        .map_err(|e| fail(e.to_string()))?;
    let mut dst = fir::Image::new(dw, dh, fir::PixelType::U8x3);
    let mut resizer = fir::Resizer::new(fir::ResizeAlg::Convolution(fir::FilterType::Box));
    resizer
        .resize(&src.view(), &mut dst.view_mut())
        .map_err(|e| fail(e.to_string()))?;

    trace!("resized {}x{} -> {}x{}", src_w, src_h, dst_w, dst_h);
    RenderBuffer::from_raw(dst_w, dst_h, dst.into_vec())
}

/// Crop `image` to `crop` and resample it to fit `columns x pixel_rows`.
pub fn render_crop(image: &Image, crop: CropRect, columns: u32, pixel_rows: u32) -> Result<RenderBuffer> {
    let size = compute_render_size(crop.width(), crop.height(), columns, pixel_rows);
    if size.is_empty() {
        return Ok(RenderBuffer::empty());
    }
    let (pixels, w, h) = image.crop(crop);
    resize(pixels, w, h, size.width, size.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn zero_target_is_empty() {
        let img = Image::solid(4, 4, RED);
        let buf = resize(img.pixels().to_vec(), 4, 4, 0, 3).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.size(), RenderSize::EMPTY);

        let buf = resize(Vec::new(), 0, 4, 2, 2).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn solid_color_survives_downscale() {
        let img = Image::solid(37, 23, RED);
        let buf = resize(img.pixels().to_vec(), 37, 23, 5, 3).unwrap();
        assert_eq!(buf.size(), RenderSize::new(5, 3));
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(buf.pixel(x, y), RED);
            }
        }
    }

    #[test]
    fn solid_color_survives_upscale() {
        let color = Rgb::new(12, 200, 99);
        let img = Image::solid(2, 2, color);
        let buf = resize(img.pixels().to_vec(), 2, 2, 7, 9).unwrap();
        assert_eq!(buf.pixels().len(), 7 * 9 * 3);
        assert!(buf.pixels().chunks(3).all(|px| Rgb::from_slice(px) == color));
    }

    #[test]
    fn same_size_is_passthrough() {
        let img = Image::from_fn(3, 2, |x, y| Rgb::new(x as u8 * 40, y as u8 * 90, 1));
        let buf = resize(img.pixels().to_vec(), 3, 2, 3, 2).unwrap();
        assert_eq!(buf.pixels(), img.pixels());
    }

    #[test]
    fn downscale_averages_area() {
        // Left half black, right half white; a 1x1 target averages to mid grey.
        let img = Image::from_fn(4, 4, |x, _| {
            if x < 2 {
                Rgb::BLACK
            } else {
                Rgb::new(255, 255, 255)
            }
        });
        let buf = resize(img.pixels().to_vec(), 4, 4, 1, 1).unwrap();
        let px = buf.pixel(0, 0);
        assert!((120..=135).contains(&px.r), "{px:?}");
    }

    #[test]
    fn resize_is_deterministic() {
        let img = Image::from_fn(50, 31, |x, y| Rgb::new((x * 5) as u8, (y * 8) as u8, (x ^ y) as u8));
        let a = resize(img.pixels().to_vec(), 50, 31, 13, 8).unwrap();
        let b = resize(img.pixels().to_vec(), 50, 31, 13, 8).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn render_crop_fits_the_box() {
        let img = Image::solid(200, 100, RED);
        let buf = render_crop(&img, CropRect::new(0, 0, 200, 100), 80, 48).unwrap();
        assert_eq!(buf.size(), RenderSize::new(80, 40));
    }

    #[test]
    fn render_crop_of_empty_crop_is_empty() {
        let img = Image::solid(200, 100, RED);
        let buf = render_crop(&img, CropRect::new(0, 0, 0, 100), 80, 48).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn render_buffer_checks_length() {
        assert!(RenderBuffer::from_raw(1, 2, vec![0; 6]).is_ok());
        assert!(RenderBuffer::from_raw(1, 2, vec![0; 5]).is_err());
    }
}
