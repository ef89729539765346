//! Errors raised while constructing a [`Description`](crate::model::Description).

use std::ops::Range;

use thiserror::Error;

/// A schema violation in the input description.
///
/// These are the only hard failures in the pipeline. Everything detected
/// after construction degrades to a warning.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// The TOML source is malformed or does not match the schema.
    #[error("{message}")]
    Toml {
        message: String,
        /// Byte range in the source the error points at, when known.
        span: Option<Range<usize>>,
    },

    #[error("empty name in `{mapping}`")]
    EmptyKey { mapping: &'static str },
}

impl ModelError {
    /// Returns the byte range in the source this error refers to, if any.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Self::Toml { span, .. } => span.clone(),
            Self::EmptyKey { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ModelError {
    fn from(err: toml::de::Error) -> Self {
        Self::Toml {
            message: err.message().trim_end().to_string(),
            span: err.span(),
        }
    }
}
