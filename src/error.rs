//! Error types for Disha frontier detection.

use thiserror::Error;

/// Disha error type
#[derive(Error, Debug)]
pub enum FrontierError {
    /// Invalid grid geometry or configuration. Raised before any computation.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A visited frontier cell broke an invariant the classifier guarantees.
    #[error("Internal invariant violated at cell {index}: {message}")]
    InternalInvariant {
        /// Flat index of the offending cell.
        index: usize,
        /// What went wrong.
        message: String,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML/JSON parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Map image decode error.
    #[error("Image error: {0}")]
    Image(String),
}

impl FrontierError {
    /// Shorthand for a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "CONFIGURATION",
            Self::InternalInvariant { .. } => "INTERNAL_INVARIANT",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
            Self::Image(_) => "IMAGE",
        }
    }
}

impl From<serde_yaml::Error> for FrontierError {
    fn from(e: serde_yaml::Error) -> Self {
        FrontierError::Parse(e.to_string())
    }
}

impl From<serde_json::Error> for FrontierError {
    fn from(e: serde_json::Error) -> Self {
        FrontierError::Parse(e.to_string())
    }
}

impl From<image::ImageError> for FrontierError {
    fn from(e: image::ImageError) -> Self {
        FrontierError::Image(e.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FrontierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FrontierError::config("robot_radius must be > 0");
        assert_eq!(
            err.to_string(),
            "Configuration error: robot_radius must be > 0"
        );

        let err = FrontierError::InternalInvariant {
            index: 12,
            message: "no unknown neighbor".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Internal invariant violated at cell 12: no unknown neighbor"
        );
    }

    #[test]
    fn test_error_code() {
        assert_eq!(FrontierError::config("x").code(), "CONFIGURATION");
        assert_eq!(FrontierError::Parse("x".into()).code(), "PARSE");
    }

    #[test]
    fn test_from_yaml_error() {
        let err: FrontierError = serde_yaml::from_str::<u32>("[").unwrap_err().into();
        assert!(matches!(err, FrontierError::Parse(_)));
    }
}
