//! Alpha-blended raster primitives on top of `image::RgbaImage`.
//!
//! Shapes are described with float coordinates; a pixel is filled when its
//! center lies inside the shape. Rectangular extents are half-open so a
//! one-pixel-wide bar covers exactly one pixel column. Fills blend
//! source-over, so translucent colors composite instead of overwriting.

use image::{Rgba, RgbaImage};

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Source-over blend of two non-premultiplied RGBA pixels.
fn blend(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = src.0[3] as f32 / 255.0;
    if sa >= 1.0 {
        return src;
    }
    if sa <= 0.0 {
        return dst;
    }
    let da = dst.0[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return TRANSPARENT;
    }
    let mut out = [0u8; 4];
    for c in 0..3 {
        let sc = src.0[c] as f32;
        let dc = dst.0[c] as f32;
        out[c] = ((sc * sa + dc * da * (1.0 - sa)) / out_a).round() as u8;
    }
    out[3] = (out_a * 255.0).round() as u8;
    Rgba(out)
}

/// Blend `color` onto a single pixel. Out-of-bounds coordinates are ignored.
pub fn blend_pixel(img: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>) {
    if x < img.width() && y < img.height() {
        let dst = *img.get_pixel(x, y);
        img.put_pixel(x, y, blend(dst, color));
    }
}

/// Pixel columns/rows whose centers can fall inside [lo, hi), clamped to the
/// surface edge.
fn pixel_range(lo: f32, hi: f32, max: u32) -> std::ops::Range<u32> {
    let start = lo.floor().max(0.0).min(max as f32) as u32;
    let end = hi.ceil().clamp(0.0, max as f32) as u32;
    start..end.max(start)
}

/// Fill a rounded rectangle spanning `[x0, x1) x [y0, y1)` with corner
/// radius `radius` (clamped to half the shorter side).
pub fn fill_rounded_rect(
    img: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    radius: f32,
    color: Rgba<u8>,
) {
    let r = radius
        .min((x1 - x0) / 2.0)
        .min((y1 - y0) / 2.0)
        .max(0.0);
    let (w, h) = img.dimensions();
    for y in pixel_range(y0, y1, h) {
        let py = y as f32 + 0.5;
        if py < y0 || py >= y1 {
            continue;
        }
        for x in pixel_range(x0, x1, w) {
            let px = x as f32 + 0.5;
            if px < x0 || px >= x1 {
                continue;
            }
            // Distance from the pixel center to the inset core rectangle;
            // within `r` means inside a corner arc or the straight edges.
            let dx = px - px.clamp(x0 + r, x1 - r);
            let dy = py - py.clamp(y0 + r, y1 - r);
            if dx * dx + dy * dy <= r * r {
                blend_pixel(img, x, y, color);
            }
        }
    }
}

/// Fill the ellipse inscribed in the bounding box `[x0, y0, x1, y1]`.
pub fn fill_ellipse(img: &mut RgbaImage, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba<u8>) {
    let cx = (x0 + x1) / 2.0;
    let cy = (y0 + y1) / 2.0;
    let rx = (x1 - x0) / 2.0;
    let ry = (y1 - y0) / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }
    let (w, h) = img.dimensions();
    for y in pixel_range(y0, y1, h) {
        let ny = (y as f32 + 0.5 - cy) / ry;
        for x in pixel_range(x0, x1, w) {
            let nx = (x as f32 + 0.5 - cx) / rx;
            if nx * nx + ny * ny <= 1.0 {
                blend_pixel(img, x, y, color);
            }
        }
    }
}

/// Fill a circle of radius `r` centered at `(cx, cy)`.
pub fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, r: f32, color: Rgba<u8>) {
    fill_ellipse(img, cx - r, cy - r, cx + r, cy + r, color);
}

/// Composite `overlay` over `base` (source-over). Both surfaces must have
/// identical dimensions.
pub fn alpha_composite(base: &mut RgbaImage, overlay: &RgbaImage) {
    debug_assert_eq!(base.dimensions(), overlay.dimensions());
    for (dst, src) in base.pixels_mut().zip(overlay.pixels()) {
        *dst = blend(*dst, *src);
    }
}
