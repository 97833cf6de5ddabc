//! Fixed catalog of animations indexed by their stable ids

use crate::animation::{ANIMATION_COUNT, AnimationId, AnimationSlot};
use crate::error::RenderError;

/// Number of animations a host can choose from
pub const fn animation_count() -> usize {
    ANIMATION_COUNT
}

/// Holds one instance of every animation, in id order
#[derive(Debug, Clone)]
pub struct AnimationRegistry {
    slots: [AnimationSlot; ANIMATION_COUNT],
}

impl Default for AnimationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationRegistry {
    pub const fn new() -> Self {
        Self {
            slots: [
                AnimationId::White.to_slot(),
                AnimationId::StripId.to_slot(),
                AnimationId::CircleRainbow.to_slot(),
                AnimationId::Sparkle.to_slot(),
                AnimationId::Rainbow.to_slot(),
            ],
        }
    }

    pub const fn count(&self) -> usize {
        self.slots.len()
    }

    /// Resolve a raw id to its animation id
    pub const fn resolve(raw: u8) -> Result<AnimationId, RenderError> {
        match AnimationId::from_raw(raw) {
            Some(id) => Ok(id),
            None => Err(RenderError::InvalidAnimationId(raw)),
        }
    }

    /// Get the animation instance for a raw id
    pub fn get_animation(&mut self, raw: u8) -> Result<&mut AnimationSlot, RenderError> {
        let id = Self::resolve(raw)?;
        Ok(self.get_mut(id))
    }

    /// Get the animation instance for a known id
    pub fn get_mut(&mut self, id: AnimationId) -> &mut AnimationSlot {
        &mut self.slots[id as usize]
    }
}
