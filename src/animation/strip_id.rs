//! Strip identification marker
//!
//! Lights a white run whose length encodes the strip index, which makes
//! it easy to tell strips apart on multi-strip installations.

use embassy_time::Instant;
use rand_core::RngCore;

use super::{Animation, AnimationSettings};
use crate::color::{BLACK, Rgb, WHITE};

/// LEDs added to the marker per strip index
const LEDS_PER_INDEX: usize = 10;

/// Marker length for strip zero
const BASE_MARKER_LEN: usize = 5;

/// White marker of `strip_index * 10 + 5` LEDs, black after it
#[derive(Debug, Clone, Default)]
pub struct StripIdAnimation {
    settings: AnimationSettings,
}

impl StripIdAnimation {
    pub const fn new() -> Self {
        Self {
            settings: AnimationSettings::new(0, 0),
        }
    }

    /// Number of white LEDs shown for the current strip
    pub const fn marker_len(&self) -> usize {
        self.settings.strip_index as usize * LEDS_PER_INDEX + BASE_MARKER_LEN
    }
}

impl Animation for StripIdAnimation {
    fn reset(&mut self, settings: AnimationSettings) {
        self.settings = settings;
    }

    fn render<R: RngCore>(&mut self, _now: Instant, leds: &mut [Rgb], _rng: &mut R) {
        let marker_len = self.marker_len();
        for (i, led) in self.settings.active(leds).iter_mut().enumerate() {
            *led = if i < marker_len { WHITE } else { BLACK };
        }
    }
}
