//! Per-strip frame history
//!
//! Keeps the last rendered buffer of every strip so that stateful
//! animations (sparkle decay) continue smoothly between independent
//! render calls, and restarts a strip from black whenever its animation
//! changes.

use embassy_time::Instant;
use heapless::{LinearMap, Vec};
use rand_core::RngCore;

use crate::animation::{AnimationId, AnimationSettings};
use crate::color::{BLACK, Rgb};
use crate::error::RenderError;
use crate::logging::debug;
use crate::registry::AnimationRegistry;

/// One frame to render for one strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest {
    /// Raw animation id, see [`AnimationId`]
    pub animation_id: u8,
    /// Strip to render
    pub strip_id: u8,
    /// Time since the host started animating
    pub now: Instant,
    /// Number of LEDs on the strip
    pub led_count: usize,
}

impl FrameRequest {
    #[allow(clippy::cast_lossless)]
    pub const fn new(animation_id: u8, strip_id: u8, elapsed_ms: u32, led_count: usize) -> Self {
        Self {
            animation_id,
            strip_id,
            now: Instant::from_millis(elapsed_ms as u64),
            led_count,
        }
    }
}

/// Last rendered state of a single strip
#[derive(Debug, Clone, Default)]
pub struct StripHistory<const MAX_LEDS: usize> {
    leds: Vec<Rgb, MAX_LEDS>,
    last_animation: Option<AnimationId>,
}

impl<const MAX_LEDS: usize> StripHistory<MAX_LEDS> {
    pub const fn new() -> Self {
        Self {
            leds: Vec::new(),
            last_animation: None,
        }
    }

    /// The whole retained buffer
    ///
    /// Never shrinks, so it can be longer than the last requested
    /// LED count.
    pub fn leds(&self) -> &[Rgb] {
        &self.leds
    }

    pub const fn last_animation(&self) -> Option<AnimationId> {
        self.last_animation
    }

    /// Prepare the buffer for rendering `animation` over `led_count` LEDs
    fn prepare(&mut self, animation: AnimationId, led_count: usize) -> Result<(), RenderError> {
        if self.last_animation != Some(animation) {
            self.leds.clear();
        }
        self.last_animation = Some(animation);

        if self.leds.len() < led_count {
            self.leds
                .resize(led_count, BLACK)
                .map_err(|()| RenderError::LedCountTooLarge {
                    requested: led_count,
                    capacity: MAX_LEDS,
                })?;
        }
        Ok(())
    }
}

/// Frame history store
///
/// `MAX_LEDS` bounds the buffer of each strip, `MAX_STRIPS` bounds the
/// number of strips tracked at once.
#[derive(Debug, Clone)]
pub struct FrameHistory<const MAX_LEDS: usize, const MAX_STRIPS: usize> {
    registry: AnimationRegistry,
    strips: LinearMap<u8, StripHistory<MAX_LEDS>, MAX_STRIPS>,
}

impl<const MAX_LEDS: usize, const MAX_STRIPS: usize> Default
    for FrameHistory<MAX_LEDS, MAX_STRIPS>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX_LEDS: usize, const MAX_STRIPS: usize> FrameHistory<MAX_LEDS, MAX_STRIPS> {
    pub const fn new() -> Self {
        Self {
            registry: AnimationRegistry::new(),
            strips: LinearMap::new(),
        }
    }

    /// Number of animations that can be requested
    pub const fn animation_count(&self) -> usize {
        self.registry.count()
    }

    /// Render the next frame of a strip
    ///
    /// Returns the first `led_count` LEDs of the strip buffer. On error
    /// the history is left untouched.
    pub fn render<R: RngCore>(
        &mut self,
        request: FrameRequest,
        rng: &mut R,
    ) -> Result<&[Rgb], RenderError> {
        let animation = AnimationRegistry::resolve(request.animation_id)?;
        if request.led_count > MAX_LEDS {
            return Err(RenderError::LedCountTooLarge {
                requested: request.led_count,
                capacity: MAX_LEDS,
            });
        }

        let history = Self::history_mut(&mut self.strips, request.strip_id)?;
        if history.last_animation.is_some_and(|last| last != animation) {
            debug!(
                "[FrameHistory.render] strip {} switched to {}, resetting buffer",
                request.strip_id,
                animation.as_str()
            );
        }
        history.prepare(animation, request.led_count)?;

        let slot = self.registry.get_mut(animation);
        slot.reset(AnimationSettings::new(request.led_count, request.strip_id));
        slot.render(request.now, &mut history.leds, rng);

        Ok(&history.leds[..request.led_count])
    }

    /// Get the history of a strip, if it was ever rendered
    pub fn strip(&self, strip_id: u8) -> Option<&StripHistory<MAX_LEDS>> {
        self.strips.get(&strip_id)
    }

    /// Forget a strip
    ///
    /// Returns `true` if the strip was tracked.
    pub fn evict(&mut self, strip_id: u8) -> bool {
        let removed = self.strips.remove(&strip_id).is_some();
        if removed {
            debug!("[FrameHistory.evict] strip {} evicted", strip_id);
        }
        removed
    }

    /// Forget all strips
    pub fn clear(&mut self) {
        self.strips.clear();
    }

    /// Number of tracked strips
    pub fn len(&self) -> usize {
        self.strips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strips.is_empty()
    }

    /// Look up a strip history, creating it on first use
    fn history_mut(
        strips: &mut LinearMap<u8, StripHistory<MAX_LEDS>, MAX_STRIPS>,
        strip_id: u8,
    ) -> Result<&mut StripHistory<MAX_LEDS>, RenderError> {
        let full = RenderError::TooManyStrips {
            capacity: MAX_STRIPS,
        };
        if !strips.contains_key(&strip_id) {
            strips
                .insert(strip_id, StripHistory::new())
                .map_err(|_| full)?;
            debug!("[FrameHistory.render] tracking new strip {}", strip_id);
        }
        strips.get_mut(&strip_id).ok_or(full)
    }
}
