//! Frame history that can live in a `static`.
//!
//! Wraps [`FrameHistory`] in a `critical-section` mutex so a host can keep
//! a single process-wide store and render into it from wherever its frame
//! loop runs. Renders for the same strip are serialized by the critical
//! section.

use core::cell::RefCell;

use critical_section::Mutex;
use rand_core::RngCore;

use crate::color::Rgb;
use crate::error::RenderError;
use crate::history::{FrameHistory, FrameRequest};

pub struct SharedFrameHistory<const MAX_LEDS: usize, const MAX_STRIPS: usize> {
    inner: Mutex<RefCell<FrameHistory<MAX_LEDS, MAX_STRIPS>>>,
}

impl<const MAX_LEDS: usize, const MAX_STRIPS: usize> Default
    for SharedFrameHistory<MAX_LEDS, MAX_STRIPS>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const MAX_LEDS: usize, const MAX_STRIPS: usize> SharedFrameHistory<MAX_LEDS, MAX_STRIPS> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(FrameHistory::new())),
        }
    }

    /// Render the next frame of a strip and hand it to `f`
    ///
    /// The frame is only borrowed for the duration of `f`, which runs
    /// inside the critical section.
    pub fn render<R, T>(
        &self,
        request: FrameRequest,
        rng: &mut R,
        f: impl FnOnce(&[Rgb]) -> T,
    ) -> Result<T, RenderError>
    where
        R: RngCore,
    {
        critical_section::with(|cs| {
            let mut history = self.inner.borrow(cs).borrow_mut();
            history.render(request, rng).map(f)
        })
    }

    /// Forget a strip
    pub fn evict(&self, strip_id: u8) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().evict(strip_id))
    }

    /// Forget all strips
    pub fn clear(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().clear());
    }

    /// Number of tracked strips
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
