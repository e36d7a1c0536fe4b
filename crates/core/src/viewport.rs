//! Viewport math: view state -> crop rectangle -> render size.
//!
//! Everything here is pure arithmetic. Degenerate results (zero-area crops,
//! zero render sizes) are valid outputs and render as blank frames.

use crate::types::{CropRect, RenderSize};

/// Zoom used when the requested zoom is non-positive or NaN.
const MIN_ZOOM: f64 = f64::EPSILON;

fn effective_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() || zoom <= 0.0 {
        MIN_ZOOM
    } else {
        zoom
    }
}

/// Floor `v` and clamp it into `[0, max]`. NaN maps to 0.
fn floor_clamp(v: f64, max: u32) -> u32 {
    let v = v.floor();
    if v.is_nan() || v <= 0.0 {
        0
    } else if v >= f64::from(max) {
        max
    } else {
        v as u32
    }
}

/// Compute the visible source rectangle around `(center_x, center_y)`.
///
/// `pixel_rows` is the terminal row count times two. The half extents are
/// `columns / 2 * zoom` and `pixel_rows / 2 * zoom`; the far edge gets one
/// extra pixel so a centered crop always includes the center pixel.
///
/// The result always satisfies `0 <= sx <= ex <= image_w` and
/// `0 <= sy <= ey <= image_h`.
///
/// # Examples
///
/// ```
/// use tui_imgview_core::viewport::compute_crop;
///
/// let crop = compute_crop(50, 50, 1e9, 100, 100, 80, 48);
/// assert_eq!((crop.sx, crop.sy, crop.ex, crop.ey), (0, 0, 100, 100));
/// ```
pub fn compute_crop(
    center_x: i64,
    center_y: i64,
    zoom: f64,
    image_w: u32,
    image_h: u32,
    columns: u32,
    pixel_rows: u32,
) -> CropRect {
    let zoom = effective_zoom(zoom);
    let cx = center_x as f64;
    let cy = center_y as f64;
    let half_w = f64::from(columns) / 2.0 * zoom;
    let half_h = f64::from(pixel_rows) / 2.0 * zoom;

    let sx = floor_clamp(cx - half_w, image_w);
    let ex = floor_clamp(cx + half_w + 1.0, image_w);
    let sy = floor_clamp(cy - half_h, image_h);
    let ey = floor_clamp(cy + half_h + 1.0, image_h);

    // Both edges go through the same monotone clamp; only a NaN extent could
    // invert them.
    CropRect::new(sx, sy, ex.max(sx), ey.max(sy))
}

/// Fit a `crop_w x crop_h` crop into a `columns x pixel_rows` box, keeping
/// its aspect ratio.
///
/// Filling the height is preferred; it is used only when the resulting width
/// is strictly narrower than `columns`. Otherwise the width is filled and the
/// height follows (clamped to `pixel_rows` against rounding overshoot).
///
/// Any zero dimension yields [`RenderSize::EMPTY`].
pub fn compute_render_size(crop_w: u32, crop_h: u32, columns: u32, pixel_rows: u32) -> RenderSize {
    if crop_w == 0 || crop_h == 0 || columns == 0 || pixel_rows == 0 {
        return RenderSize::EMPTY;
    }

    let aspect = f64::from(crop_w) / f64::from(crop_h);

    let height_filled_w = (f64::from(pixel_rows) * aspect).round();
    if height_filled_w < f64::from(columns) {
        return RenderSize::new(height_filled_w as u32, pixel_rows);
    }

    let width_filled_h = (f64::from(columns) / aspect).round() as u32;
    RenderSize::new(columns, width_filled_h.min(pixel_rows))
}

/// Zoom at which the whole image fits the render box.
///
/// Used as the default zoom. Returns `1.0` when either side of the box or
/// the image is empty.
pub fn fit_zoom(image_w: u32, image_h: u32, columns: u32, pixel_rows: u32) -> f64 {
    if columns == 0 || pixel_rows == 0 {
        return 1.0;
    }
    let zoom = (f64::from(image_w) / f64::from(columns))
        .max(f64::from(image_h) / f64::from(pixel_rows));
    if zoom > 0.0 {
        zoom
    } else {
        1.0
    }
}
