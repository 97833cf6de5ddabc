mod convert;

use smart_leds::RGB8;

pub use convert::{hsv2rgb, rgb2hsv};

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// HSV color with a 16-bit hue
///
/// Hue covers a full turn over the whole `u16` range, so `hue / 65536`
/// is the fraction of 360 degrees. Saturation and value are 0-255.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hsv {
    pub hue: u16,
    pub sat: u8,
    pub val: u8,
}

impl Hsv {
    pub const fn new(hue: u16, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }
}
