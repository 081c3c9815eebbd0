/// Convenience result type used across inkbloom.
pub type BloomResult<T> = Result<T, BloomError>;

/// Top-level error taxonomy used by engine APIs.
///
/// This is a decorative rendering layer, so most bad inputs are clamped or
/// normalized instead of raised; `BloomError` is reserved for genuine contract
/// violations such as mismatched pixel buffer lengths or an empty phase list.
#[derive(thiserror::Error, Debug)]
pub enum BloomError {
    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while advancing phase machines or schedulers.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while compositing geometry onto a surface.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BloomError {
    /// Build a [`BloomError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BloomError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`BloomError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
