//! Sparkle and decay
//!
//! Every frame each LED either sparkles (with odds of one in
//! `SPARKLE_ODDS`) or decays. A sparkle is a random color with a
//! brightness curve heavily biased towards dim values; bright sparkles
//! also light both neighbors at a quarter of their brightness. Decay
//! lowers the HSV value of whatever is in the buffer by `DECAY_STEP`.
//!
//! LEDs are processed in ascending order, so a neighbor glow written to
//! `i + 1` is then subject to that LED's own sparkle or decay in the
//! same frame, while a glow written to `i - 1` survives the frame.

use embassy_time::Instant;
use rand_core::RngCore;

use super::{Animation, AnimationSettings};
use crate::color::{Hsv, Rgb, hsv2rgb, rgb2hsv};

/// Odds of a sparkle per LED per frame
///
/// Tuned for about a third of a 180 LED strip sparkling per second at
/// 30 fps: `fps * leds / sparkles_per_second`.
pub const SPARKLE_ODDS: u32 = (30 * 600) / 180;

/// Value subtracted from a decaying LED every frame (out of 255)
pub const DECAY_STEP: u8 = 3;

/// Sparkles brighter than this also light their neighbors
pub const GLOW_THRESHOLD: f32 = 0.65;

/// Neighbor glow brightness divisor
const GLOW_DIVISOR: f32 = 4.0;

/// Brightness curve exponent
const BRIGHTNESS_POWER: f32 = 6.0;

/// Sparkles and decays the existing frame
#[derive(Debug, Clone, Default)]
pub struct SparkleAnimation {
    settings: AnimationSettings,
}

impl SparkleAnimation {
    pub const fn new() -> Self {
        Self {
            settings: AnimationSettings::new(0, 0),
        }
    }
}

impl Animation for SparkleAnimation {
    fn reset(&mut self, settings: AnimationSettings) {
        self.settings = settings;
    }

    fn render<R: RngCore>(&mut self, _now: Instant, leds: &mut [Rgb], rng: &mut R) {
        let leds = self.settings.active(leds);
        for i in 0..leds.len() {
            if random(rng, SPARKLE_ODDS) == 0 {
                sparkle(leds, i, rng);
            } else {
                leds[i] = decay(leds[i]);
            }
        }
    }
}

/// Darken a color by one decay step, keeping hue and saturation
pub fn decay(color: Rgb) -> Rgb {
    let mut hsv = rgb2hsv(color);
    if hsv.val > 0 {
        hsv.val = hsv.val.saturating_sub(DECAY_STEP);
    }
    hsv2rgb(hsv)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn sparkle<R: RngCore>(leds: &mut [Rgb], i: usize, rng: &mut R) {
    let hue = random(rng, 100) as f32 / 100.0;
    let brightness = random_range(rng, 20, 100) as f32 / 100.0;
    let brightness = libm::powf(brightness, BRIGHTNESS_POWER);
    let saturation = random_range(rng, 10, 100) as f32 / 100.0;

    let hue = (hue * f32::from(u16::MAX)) as u16;
    let sat = (saturation * 255.0) as u8;

    leds[i] = hsv2rgb(Hsv {
        hue,
        sat,
        val: (brightness * 255.0) as u8,
    });

    if brightness > GLOW_THRESHOLD {
        let glow = hsv2rgb(Hsv {
            hue,
            sat,
            val: (brightness * 255.0 / GLOW_DIVISOR) as u8,
        });
        if i >= 1 {
            leds[i - 1] = glow;
        }
        if i + 1 < leds.len() {
            leds[i + 1] = glow;
        }
    }
}

/// Uniform draw in `[0, max)`
fn random<R: RngCore>(rng: &mut R, max: u32) -> u32 {
    rng.next_u32() % max
}

/// Uniform draw in `[min, max)`
fn random_range<R: RngCore>(rng: &mut R, min: u32, max: u32) -> u32 {
    rng.next_u32() % (max - min) + min
}
