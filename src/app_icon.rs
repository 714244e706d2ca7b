//! The full application icon: coral card, soft bottom shadow, frosted badge
//! circle, waveform glyph, and the two-tone record dot.

use image::RgbaImage;

use crate::canvas::{alpha_composite, fill_circle, fill_rounded_rect, TRANSPARENT};
use crate::constants::palette;
use crate::waveform::{draw_waveform, WaveformSpec};

/// Render the app icon at `size x size` pixels.
///
/// All proportions are fractions of `size`, so every output of the fixed
/// size set is visually self-similar. Deterministic: identical sizes yield
/// byte-identical images.
pub fn render_app_icon(size: u32) -> RgbaImage {
    let s = size as f32;
    let mut img = RgbaImage::from_pixel(size, size, TRANSPARENT);

    let padding = s * 0.05;
    let corner_radius = s * 0.22;

    // Background card
    fill_rounded_rect(
        &mut img,
        padding,
        padding,
        s - padding,
        s - padding,
        corner_radius,
        palette::CORAL,
    );

    // Bottom shadow on its own overlay, so the translucent tone composites
    // over the card instead of stacking where the card is absent.
    let mut overlay = RgbaImage::from_pixel(size, size, TRANSPARENT);
    fill_rounded_rect(
        &mut overlay,
        padding,
        s * 0.55,
        s - padding,
        s - padding,
        corner_radius,
        palette::CARD_SHADOW,
    );
    alpha_composite(&mut img, &overlay);

    // Frosted badge circle
    let cx = s / 2.0;
    let cy = s / 2.0;
    let circle_r = s * 0.30;
    fill_circle(&mut img, cx, cy, circle_r, palette::BADGE_WHITE);

    // Waveform in the card color, cutting through the badge
    draw_waveform(&mut img, &WaveformSpec::new((cx, cy), circle_r, palette::CORAL));

    // Record dot at the badge's upper right
    let dot_r = s * 0.05;
    let dot_cx = cx + circle_r * 0.7;
    let dot_cy = cy - circle_r * 0.7;
    fill_circle(&mut img, dot_cx, dot_cy, dot_r, palette::DOT_WHITE);
    fill_circle(&mut img, dot_cx, dot_cy, dot_r * 0.6, palette::RECORD_RED);

    img
}
