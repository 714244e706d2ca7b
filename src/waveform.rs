//! The five-bar waveform glyph shared by the app icon and the idle menu bar
//! icon.

use image::{Rgba, RgbaImage};

use crate::canvas::fill_rounded_rect;

/// Half-height of each bar as a fraction of `radius * 0.65`. The taper is a
/// fixed five-entry design constant; the glyph is not generalized to other
/// bar counts.
pub const BAR_HEIGHT_CURVE: [f32; 5] = [0.30, 0.60, 1.00, 0.60, 0.30];

/// Parameters for one waveform glyph. `bar_count` and `bar_width_ratio`
/// default to the app-icon values (5 bars, 0.09); the menu bar icon uses a
/// thicker 0.13 ratio on its much smaller canvas.
#[derive(Debug, Clone, Copy)]
pub struct WaveformSpec {
    pub center: (f32, f32),
    pub radius: f32,
    pub color: Rgba<u8>,
    pub bar_count: u32,
    pub bar_width_ratio: f32,
}

impl WaveformSpec {
    pub fn new(center: (f32, f32), radius: f32, color: Rgba<u8>) -> Self {
        WaveformSpec {
            center,
            radius,
            color,
            bar_count: 5,
            bar_width_ratio: 0.09,
        }
    }

    pub fn with_bar_width_ratio(mut self, ratio: f32) -> Self {
        self.bar_width_ratio = ratio;
        self
    }
}

/// Draw a symmetric waveform into `img`, centered at `spec.center`.
///
/// Bars are pill-shaped (fully rounded ends) with a 1px floor on width so
/// the glyph stays visible at tiny sizes. The height table drives the bar
/// loop positionally; `bar_count` only affects the horizontal centering of
/// the group, so the design is effectively fixed at five bars.
pub fn draw_waveform(img: &mut RgbaImage, spec: &WaveformSpec) {
    let bar_w = (spec.radius * spec.bar_width_ratio * 2.0).round().max(1.0);
    let spacing = spec.radius * 0.24;
    let total_width = (spec.bar_count.saturating_sub(1)) as f32 * spacing;
    let start_x = spec.center.0 - total_width / 2.0;
    let corner = (bar_w / 2.0).max(1.0);

    for (i, h) in BAR_HEIGHT_CURVE.iter().enumerate() {
        let bx = start_x + i as f32 * spacing;
        let bar_h = spec.radius * 0.65 * h;
        fill_rounded_rect(
            img,
            bx - bar_w / 2.0,
            spec.center.1 - bar_h,
            bx + bar_w / 2.0,
            spec.center.1 + bar_h,
            corner,
            spec.color,
        );
    }
}
