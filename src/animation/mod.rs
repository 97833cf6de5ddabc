//! Animation system with compile-time known animation variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the `Animation` trait. The only state an
//! animation carries is its `AnimationSettings`; anything that evolves
//! across frames lives in the LED buffer it is handed.

mod rainbow;
mod sparkle;
mod strip_id;
mod white;

use embassy_time::Instant;
use rand_core::RngCore;

pub use rainbow::{RAINBOW_CYCLE, RainbowAnimation, RainbowLayout};
pub use sparkle::{DECAY_STEP, GLOW_THRESHOLD, SPARKLE_ODDS, SparkleAnimation, decay};
pub use strip_id::StripIdAnimation;
pub use white::WhiteAnimation;

use crate::color::Rgb;

const ANIMATION_NAME_WHITE: &str = "white";
const ANIMATION_NAME_STRIP_ID: &str = "strip_id";
const ANIMATION_NAME_CIRCLE_RAINBOW: &str = "circle_rainbow";
const ANIMATION_NAME_SPARKLE: &str = "sparkle";
const ANIMATION_NAME_RAINBOW: &str = "rainbow";

const ANIMATION_ID_WHITE: u8 = 0;
const ANIMATION_ID_STRIP_ID: u8 = 1;
const ANIMATION_ID_CIRCLE_RAINBOW: u8 = 2;
const ANIMATION_ID_SPARKLE: u8 = 3;
const ANIMATION_ID_RAINBOW: u8 = 4;

/// Number of known animations
pub const ANIMATION_COUNT: usize = AnimationId::ALL.len();

/// Per-render settings handed to an animation before every frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationSettings {
    /// Number of LEDs to render
    pub led_count: usize,
    /// Index of the strip being rendered
    pub strip_index: u8,
}

impl AnimationSettings {
    pub const fn new(led_count: usize, strip_index: u8) -> Self {
        Self {
            led_count,
            strip_index,
        }
    }

    /// Get the part of the buffer this frame renders into
    ///
    /// Panics if the buffer is shorter than `led_count`.
    pub(crate) fn active<'a>(&self, leds: &'a mut [Rgb]) -> &'a mut [Rgb] {
        &mut leds[..self.led_count]
    }
}

pub trait Animation {
    /// Replace the animation settings
    fn reset(&mut self, settings: AnimationSettings);

    /// Render a single frame on top of the previous one
    ///
    /// `leds` holds the previous frame and must be at least
    /// `led_count` long.
    fn render<R: RngCore>(&mut self, now: Instant, leds: &mut [Rgb], rng: &mut R);
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    /// Solid white
    White(WhiteAnimation),
    /// White marker whose length encodes the strip index
    StripId(StripIdAnimation),
    /// Quarter rainbow per strip, phase-shifted by strip index
    CircleRainbow(RainbowAnimation),
    /// Random sparkles decaying towards black
    Sparkle(SparkleAnimation),
    /// Single rainbow sweep across the strip
    Rainbow(RainbowAnimation),
}

/// Known animation ids that can be requested.
///
/// The numeric values are an external contract: new animations are
/// appended, never inserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AnimationId {
    White = ANIMATION_ID_WHITE,
    StripId = ANIMATION_ID_STRIP_ID,
    CircleRainbow = ANIMATION_ID_CIRCLE_RAINBOW,
    Sparkle = ANIMATION_ID_SPARKLE,
    Rainbow = ANIMATION_ID_RAINBOW,
}

impl AnimationId {
    /// All animations in id order
    pub const ALL: [Self; 5] = [
        Self::White,
        Self::StripId,
        Self::CircleRainbow,
        Self::Sparkle,
        Self::Rainbow,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_WHITE => Self::White,
            ANIMATION_ID_STRIP_ID => Self::StripId,
            ANIMATION_ID_CIRCLE_RAINBOW => Self::CircleRainbow,
            ANIMATION_ID_SPARKLE => Self::Sparkle,
            ANIMATION_ID_RAINBOW => Self::Rainbow,
            _ => return None,
        })
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }

    pub const fn to_slot(self) -> AnimationSlot {
        match self {
            Self::White => AnimationSlot::White(WhiteAnimation::new()),
            Self::StripId => AnimationSlot::StripId(StripIdAnimation::new()),
            Self::CircleRainbow => {
                AnimationSlot::CircleRainbow(RainbowAnimation::new(RainbowLayout::Circle))
            }
            Self::Sparkle => AnimationSlot::Sparkle(SparkleAnimation::new()),
            Self::Rainbow => {
                AnimationSlot::Rainbow(RainbowAnimation::new(RainbowLayout::Linear))
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::White => ANIMATION_NAME_WHITE,
            Self::StripId => ANIMATION_NAME_STRIP_ID,
            Self::CircleRainbow => ANIMATION_NAME_CIRCLE_RAINBOW,
            Self::Sparkle => ANIMATION_NAME_SPARKLE,
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_WHITE => Some(Self::White),
            ANIMATION_NAME_STRIP_ID => Some(Self::StripId),
            ANIMATION_NAME_CIRCLE_RAINBOW => Some(Self::CircleRainbow),
            ANIMATION_NAME_SPARKLE => Some(Self::Sparkle),
            ANIMATION_NAME_RAINBOW => Some(Self::Rainbow),
            _ => None,
        }
    }
}

impl AnimationSlot {
    /// Render the current animation
    pub fn render<R: RngCore>(&mut self, now: Instant, leds: &mut [Rgb], rng: &mut R) {
        match self {
            Self::White(animation) => animation.render(now, leds, rng),
            Self::StripId(animation) => animation.render(now, leds, rng),
            Self::CircleRainbow(animation) => animation.render(now, leds, rng),
            Self::Sparkle(animation) => animation.render(now, leds, rng),
            Self::Rainbow(animation) => animation.render(now, leds, rng),
        }
    }

    /// Replace the animation settings
    pub fn reset(&mut self, settings: AnimationSettings) {
        match self {
            Self::White(animation) => animation.reset(settings),
            Self::StripId(animation) => animation.reset(settings),
            Self::CircleRainbow(animation) => animation.reset(settings),
            Self::Sparkle(animation) => animation.reset(settings),
            Self::Rainbow(animation) => animation.reset(settings),
        }
    }

    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::White(_) => AnimationId::White,
            Self::StripId(_) => AnimationId::StripId,
            Self::CircleRainbow(_) => AnimationId::CircleRainbow,
            Self::Sparkle(_) => AnimationId::Sparkle,
            Self::Rainbow(_) => AnimationId::Rainbow,
        }
    }
}
