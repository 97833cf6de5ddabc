//! Solid white fill

use embassy_time::Instant;
use rand_core::RngCore;

use super::{Animation, AnimationSettings};
use crate::color::{Rgb, WHITE};

/// Fills every LED with full white
#[derive(Debug, Clone, Default)]
pub struct WhiteAnimation {
    settings: AnimationSettings,
}

impl WhiteAnimation {
    pub const fn new() -> Self {
        Self {
            settings: AnimationSettings::new(0, 0),
        }
    }
}

impl Animation for WhiteAnimation {
    fn reset(&mut self, settings: AnimationSettings) {
        self.settings = settings;
    }

    fn render<R: RngCore>(&mut self, _now: Instant, leds: &mut [Rgb], _rng: &mut R) {
        self.settings.active(leds).fill(WHITE);
    }
}
