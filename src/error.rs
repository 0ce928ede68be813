//! Error types for goldorbit.
//!
//! The math itself is total for valid inputs. Errors come from arguments that
//! would otherwise divide by zero or produce NaN, from palette parsing, and
//! from loading configuration files.

use std::fmt;

/// Errors that can occur when computing layouts or loading configuration.
#[derive(Debug)]
pub enum OrbitError {
    /// An argument is outside the domain the formulas are defined on.
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// A palette entry is not a `#RRGGBB` or `#RGB` hex color.
    InvalidColor(String),
    /// A preset name did not match any known preset.
    UnknownPreset(String),
    /// Failed to read or write a configuration file.
    Io(std::io::Error),
    /// Failed to parse or serialize configuration JSON.
    Json(serde_json::Error),
}

impl OrbitError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::warn!(argument = name, %reason, "rejected invalid argument");
        OrbitError::InvalidArgument { name, reason }
    }
}

impl fmt::Display for OrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrbitError::InvalidArgument { name, reason } => {
                write!(f, "Invalid argument `{}`: {}", name, reason)
            }
            OrbitError::InvalidColor(c) => {
                write!(f, "Invalid color {:?}: expected #RRGGBB or #RGB", c)
            }
            OrbitError::UnknownPreset(name) => write!(
                f,
                "Unknown preset {:?}. Known presets: default, fast, slow, cosmic",
                name
            ),
            OrbitError::Io(e) => write!(f, "Failed to access config file: {}", e),
            OrbitError::Json(e) => write!(f, "Invalid config JSON: {}", e),
        }
    }
}

impl std::error::Error for OrbitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OrbitError::Io(e) => Some(e),
            OrbitError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrbitError {
    fn from(e: std::io::Error) -> Self {
        OrbitError::Io(e)
    }
}

impl From<serde_json::Error> for OrbitError {
    fn from(e: serde_json::Error) -> Self {
        OrbitError::Json(e)
    }
}

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, OrbitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_argument_display() {
        let err = OrbitError::invalid("total_elements", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid argument `total_elements`: must be at least 1"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_has_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: OrbitError = io.into();
        assert!(matches!(err, OrbitError::Io(_)));
        assert!(err.source().is_some());
    }
}
