/// Convenience result type used across framecast.
pub type FramecastResult<T> = Result<T, FramecastError>;

/// Top-level error taxonomy used by the streaming pipeline.
#[derive(thiserror::Error, Debug)]
pub enum FramecastError {
    /// A frame payload could not be decoded or is missing required fields.
    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    /// Network failure while streaming, mutating or closing a session.
    #[error("transport error: {0}")]
    Transport(String),

    /// Caller supplied data that violates a contract (e.g. an empty colour list).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by a renderer while rasterizing or delivering a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Filesystem errors from sinks and recording loaders.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramecastError {
    /// Build a [`FramecastError::MalformedFrame`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedFrame(msg.into())
    }

    /// Build a [`FramecastError::Transport`] value.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Build a [`FramecastError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramecastError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FramecastError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Return `true` for errors that indicate an undecodable payload.
    pub fn is_malformed_frame(&self) -> bool {
        matches!(self, Self::MalformedFrame(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
