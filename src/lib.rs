#![no_std]

pub mod animation;
pub mod color;
pub mod error;
pub mod history;
mod logging;
pub mod registry;
pub mod shared;

pub use animation::{Animation, AnimationId, AnimationSettings, AnimationSlot};
pub use error::RenderError;
pub use history::{FrameHistory, FrameRequest, StripHistory};
pub use registry::{AnimationRegistry, animation_count};
pub use shared::SharedFrameHistory;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};
