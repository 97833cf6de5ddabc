use thiserror::Error;

/// Errors returned by frame rendering
///
/// Every variant is detected before the frame history is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("animation id {0} is out of range")]
    InvalidAnimationId(u8),
    #[error("led count {requested} exceeds buffer capacity {capacity}")]
    LedCountTooLarge { requested: usize, capacity: usize },
    #[error("frame history is full ({capacity} strips)")]
    TooManyStrips { capacity: usize },
}
