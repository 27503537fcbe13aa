//! Error types for the crate's outer boundaries.
//!
//! Geometry never fails: "no intersection" is an ordinary `None`. Errors only
//! come from the renderer backend and from parsing stage configuration.

/// Error returned by [`crate::render::Renderer`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The drawing backend rejected a call (e.g. invalid context state).
    #[error("render backend error: {0}")]
    Backend(String),
}

/// Error returned when building a [`crate::stage::StageConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("failed to parse stage config: {0}")]
    Json(#[from] serde_json::Error),
    /// A stage dimension is zero, negative, or not a number.
    #[error("invalid stage dimension {name}: {value}")]
    InvalidDimension { name: &'static str, value: String },
}
