use crate::color::{Hsv, Rgb};

/// Degrees per hue step of the 16-bit hue circle
const DEGREES_PER_HUE: f32 = 360.0 / 65536.0;

/// Deltas below this are treated as gray
const GRAY_EPSILON: f32 = 0.000_01;

/// Convert HSV to RGB using the six-sector formula.
///
/// Channels are truncated, not rounded. The largest output channel is
/// always exactly `hsv.val`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]
pub fn hsv2rgb(hsv: Hsv) -> Rgb {
    let h = f32::from(hsv.hue) * DEGREES_PER_HUE;
    let s = f32::from(hsv.sat) / 255.0;
    let v = f32::from(hsv.val);

    let hh = h / 60.0;
    let sector = hh as u32;
    let ff = hh - sector as f32;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * ff);
    let t = v * (1.0 - s * (1.0 - ff));

    let (r, g, b) = match sector % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: r as u8,
        g: g as u8,
        b: b as u8,
    }
}

/// Convert RGB to HSV using the max/min/delta decomposition.
///
/// Grays (zero delta) come back with zero hue and saturation and their
/// value intact; black comes back all zero.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]
pub fn rgb2hsv(rgb: Rgb) -> Hsv {
    let r = f32::from(rgb.r) / 255.0;
    let g = f32::from(rgb.g) / 255.0;
    let b = f32::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // Value is the max channel, taken from the integers to avoid float loss
    let val = rgb.r.max(rgb.g).max(rgb.b);

    if max <= 0.0 {
        return Hsv::default();
    }
    if delta < GRAY_EPSILON {
        return Hsv { hue: 0, sat: 0, val };
    }

    let sat = (delta / max * 255.0) as u8;

    let mut h = if r >= max {
        // between yellow & magenta
        (g - b) / delta
    } else if g >= max {
        // between cyan & yellow
        2.0 + (b - r) / delta
    } else {
        // between magenta & cyan
        4.0 + (r - g) / delta
    };
    h *= 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    // Saturating cast keeps h == 360.0 at the top of the circle
    let hue = (h / 360.0 * 65536.0) as u16;

    Hsv { hue, sat, val }
}
