//! Rotating rainbow animations
//!
//! Provides two layouts over the same hue sweep:
//! - `RainbowLayout::Linear`: one full rainbow spread across the strip
//! - `RainbowLayout::Circle`: a quarter of the rainbow per strip, starting
//!   a quarter turn further per strip index, so four strips laid out as
//!   quadrants of a circle form one continuous rainbow

use embassy_time::{Duration, Instant};
use rand_core::RngCore;

use super::{Animation, AnimationSettings};
use crate::color::{Hsv, Rgb, hsv2rgb};

/// Duration of one full hue rotation
pub const RAINBOW_CYCLE: Duration = Duration::from_millis(5_000);

/// Full hue circle in 16-bit hue steps
const HUE_RANGE: u64 = 1 << 16;
const QUARTER_TURN: u64 = HUE_RANGE / 4;
const CIRCLE_QUADRANTS: u64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainbowLayout {
    Linear,
    Circle,
}

/// Rainbow whose origin rotates once per cycle
#[derive(Debug, Clone)]
pub struct RainbowAnimation {
    settings: AnimationSettings,
    layout: RainbowLayout,
    /// Duration of one complete rainbow cycle
    cycle_duration: Duration,
    /// Saturation (0-255)
    saturation: u8,
    /// Brightness value (0-255)
    value: u8,
}

impl Default for RainbowAnimation {
    fn default() -> Self {
        Self::new(RainbowLayout::Linear)
    }
}

impl RainbowAnimation {
    pub const fn new(layout: RainbowLayout) -> Self {
        Self {
            settings: AnimationSettings::new(0, 0),
            layout,
            cycle_duration: RAINBOW_CYCLE,
            saturation: 255,
            value: 255,
        }
    }

    /// Set the cycle duration
    #[must_use]
    pub const fn with_cycle_duration(mut self, duration: Duration) -> Self {
        self.cycle_duration = duration;
        self
    }

    /// Set the brightness value
    #[must_use]
    pub const fn with_value(mut self, value: u8) -> Self {
        self.value = value;
        self
    }

    pub const fn layout(&self) -> RainbowLayout {
        self.layout
    }

    /// Hue of the first LED at `now`
    fn origin(&self, now: Instant) -> u64 {
        let cycle_ms = self.cycle_duration.as_millis().max(1);
        let progress_ms = now.as_millis() % cycle_ms;
        let origin = progress_ms * HUE_RANGE / cycle_ms;

        match self.layout {
            RainbowLayout::Linear => origin,
            RainbowLayout::Circle => {
                origin + u64::from(self.settings.strip_index) * QUARTER_TURN
            }
        }
    }

    /// Number of strips sharing one full turn
    const fn quadrants(&self) -> u64 {
        match self.layout {
            RainbowLayout::Linear => 1,
            RainbowLayout::Circle => CIRCLE_QUADRANTS,
        }
    }
}

impl Animation for RainbowAnimation {
    fn reset(&mut self, settings: AnimationSettings) {
        self.settings = settings;
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render<R: RngCore>(&mut self, now: Instant, leds: &mut [Rgb], _rng: &mut R) {
        let origin = self.origin(now);
        let span = self.settings.led_count as u64 * self.quadrants();

        for (i, led) in self.settings.active(leds).iter_mut().enumerate() {
            let offset = i as u64 * HUE_RANGE / span;
            *led = hsv2rgb(Hsv {
                hue: ((origin + offset) % HUE_RANGE) as u16,
                sat: self.saturation,
                val: self.value,
            });
        }
    }
}
