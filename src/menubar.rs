//! Menu bar status glyphs: template-style black-on-transparent icons, plus
//! the red recording dot.

use image::RgbaImage;

use crate::canvas::{fill_circle, fill_rounded_rect, TRANSPARENT};
use crate::constants::palette;
use crate::waveform::{draw_waveform, WaveformSpec};

/// Recording status shown in the menu bar. Purely a rendering-time
/// discriminator; nothing is stored between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuBarState {
    Idle,
    Recording,
    Paused,
}

impl MenuBarState {
    pub const ALL: [MenuBarState; 3] = [
        MenuBarState::Idle,
        MenuBarState::Recording,
        MenuBarState::Paused,
    ];

    /// File-name fragment for this state (`menubar_<name>.png`).
    pub fn name(self) -> &'static str {
        match self {
            MenuBarState::Idle => "idle",
            MenuBarState::Recording => "recording",
            MenuBarState::Paused => "paused",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "idle" => Some(MenuBarState::Idle),
            "recording" => Some(MenuBarState::Recording),
            "paused" => Some(MenuBarState::Paused),
            _ => None,
        }
    }
}

/// Render the menu bar glyph for `state` at `size x size` pixels. Exactly
/// one glyph per call.
pub fn render_menu_bar_icon(size: u32, state: MenuBarState) -> RgbaImage {
    let s = size as f32;
    let mut img = RgbaImage::from_pixel(size, size, TRANSPARENT);
    let cx = s / 2.0;
    let cy = s / 2.0;

    match state {
        MenuBarState::Idle => {
            draw_waveform(
                &mut img,
                &WaveformSpec::new((cx, cy), s * 0.4, palette::TEMPLATE_BLACK)
                    .with_bar_width_ratio(0.13),
            );
        }
        MenuBarState::Recording => {
            fill_circle(&mut img, cx, cy, s * 0.32, palette::RECORD_RED);
        }
        MenuBarState::Paused => {
            let bar_w = s * 0.12;
            let bar_h = s * 0.5;
            let gap = s * 0.08;
            let corner = (bar_w / 3.0).max(1.0);
            fill_rounded_rect(
                &mut img,
                cx - gap - bar_w,
                cy - bar_h / 2.0,
                cx - gap,
                cy + bar_h / 2.0,
                corner,
                palette::TEMPLATE_BLACK,
            );
            fill_rounded_rect(
                &mut img,
                cx + gap,
                cy - bar_h / 2.0,
                cx + gap + bar_w,
                cy + bar_h / 2.0,
                corner,
                palette::TEMPLATE_BLACK,
            );
        }
    }

    img
}

/// Render a menu bar glyph from a state name. An unrecognized name yields an
/// empty (fully transparent) glyph rather than an error, so a stale or
/// misspelled state degrades to no icon instead of aborting generation.
pub fn render_menu_bar_icon_named(size: u32, name: &str) -> RgbaImage {
    match MenuBarState::from_name(name) {
        Some(state) => render_menu_bar_icon(size, state),
        None => RgbaImage::from_pixel(size, size, TRANSPARENT),
    }
}
