/// Convenience result type used across genart.
pub type GenartResult<T> = Result<T, GenartError>;

/// Top-level error taxonomy for the ambient layers (config, colors, rasterization, output).
///
/// Generation itself never fails: unknown palettes fall back and `count <= 0` yields nothing.
#[derive(thiserror::Error, Debug)]
pub enum GenartError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A color literal that is not `#RRGGBB` / `#RRGGBBAA`.
    #[error("color error: {0}")]
    Color(String),

    /// Errors while rasterizing a scene or writing its pixels.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GenartError {
    /// Build a [`GenartError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GenartError::Color`] value.
    pub fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }

    /// Build a [`GenartError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GenartError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
