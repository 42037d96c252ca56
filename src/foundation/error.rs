/// Convenience result type used across Prisma.
pub type PrismaResult<T> = Result<T, PrismaError>;

/// Top-level error taxonomy used by geometry, compositing and timeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum PrismaError {
    /// Invalid geometry, compositor or configuration parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// A numeric parameter outside its allowed range.
    #[error("validation error: {param} must be finite and {bound} (got {value})")]
    OutOfRange {
        /// Name of the offending parameter.
        param: String,
        /// Value that was supplied.
        value: f64,
        /// Accepted range, e.g. `> 0`.
        bound: &'static str,
    },

    /// Invalid animation channel definitions.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors raised by the presentation adapter (SVG parsing, rasterisation).
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PrismaError {
    /// Build a [`PrismaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PrismaError::OutOfRange`] value.
    pub fn out_of_range(param: impl Into<String>, value: f64, bound: &'static str) -> Self {
        Self::OutOfRange {
            param: param.into(),
            value,
            bound,
        }
    }

    /// Name of the offending parameter, for range errors.
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::OutOfRange { param, .. } => Some(param.as_str()),
            _ => None,
        }
    }

    /// Build a [`PrismaError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`PrismaError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PrismaError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
