//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the scene-viewport crate.
#[derive(Debug)]
pub enum ViewportError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// The requested offscreen target exceeds the device texture limit.
    TargetTooLarge {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
        /// Largest 2D texture dimension the device supports.
        max: u32,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Every entity id has been allocated.
    EntityIdsExhausted,
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::TargetTooLarge { width, height, max } => write!(
                f,
                "offscreen target {width}x{height} exceeds device limit of \
                 {max}"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::EntityIdsExhausted => write!(f, "entity ids exhausted"),
        }
    }
}

impl std::error::Error for ViewportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for ViewportError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for ViewportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_too_large_mentions_limit() {
        let err = ViewportError::TargetTooLarge {
            width: 9000,
            height: 10,
            max: 8192,
        };
        assert_eq!(
            err.to_string(),
            "offscreen target 9000x10 exceeds device limit of 8192"
        );
    }

    #[test]
    fn io_error_has_source() {
        let err = ViewportError::from(std::io::Error::other("disk gone"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }
}
