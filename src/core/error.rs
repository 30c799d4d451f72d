//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`RainbowPathError`] which covers every failure mode of
//! rainbowpath, from malformed style expressions to a failing stdout write. It
//! uses `thiserror` for the definitions and offers constructor helpers for the
//! variants that carry data.
//!
//! # Public API
//! - [`RainbowPathError`]: Main error enum covering all failure modes
//! - [`ErrorKind`]: Coarse classification used by callers and tests
//! - [`Result<T>`]: Type alias for `std::result::Result<T, RainbowPathError>`
//!
//! # Error Categories
//! - **Syntax**: Malformed style, palette or config file input
//! - **Semantic**: Well-formed config options used the wrong way
//! - **Range**: Override indices or colors outside the accepted bounds
//! - **Resource**: Working directory, home directory, config file and stdout I/O

use std::path::PathBuf;
use thiserror::Error;

/// Coarse error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Semantic,
    Range,
    Resource,
}

/// Domain-specific error types for rainbowpath
#[derive(Error, Debug)]
pub enum RainbowPathError {
    // Style and palette expression errors
    #[error("Expected a property at position {position}")]
    ExpectedProperty { position: usize },

    #[error("Unknown property '{name}'")]
    UnknownProperty { name: String },

    #[error("Expected a color value for '{property}'")]
    MissingColor { property: String },

    #[error("Invalid color '{token}'")]
    InvalidColor { token: String },

    #[error("Expected end of input at position {position}")]
    ExpectedEndOfInput { position: usize },

    // Config file syntax errors
    #[error("Line {line}: {message}")]
    ConfigSyntax { line: usize, message: String },

    // Command line syntax errors
    #[error("Invalid override index '{input}'")]
    InvalidOverrideIndex { input: String },

    // Semantic errors
    #[error("Invalid option '{name}'")]
    UnknownOption { name: String },

    #[error("Option '{name}' expects {expected} value")]
    WrongValueKind { name: String, expected: &'static str },

    #[error("Option '{name}' does not accept an index")]
    UnexpectedIndex { name: String },

    #[error("Option '{name}' requires an index, e.g. {name}[0]")]
    MissingIndex { name: String },

    #[error("Unknown indexing method '{name}'. Use one of: sequential, hash, random")]
    UnknownIndexer { name: String },

    // Range errors
    #[error("Invalid override index {raw_index} ({count} available)")]
    OverrideIndexOutOfRange { raw_index: i64, count: usize },

    #[error("Color {value} is outside the acceptable range 0-{max}")]
    ColorOutOfRange { value: String, max: u16 },

    // Wrapped errors naming their origin
    #[error("Invalid value for option '{name}': {source}")]
    InvalidOption {
        name: String,
        source: Box<RainbowPathError>,
    },

    #[error("Invalid value for {flag}: {source}")]
    InvalidArgument {
        flag: String,
        source: Box<RainbowPathError>,
    },

    // Resource errors
    #[error("Failed to get working directory: {0}")]
    WorkingDirectory(std::io::Error),

    #[error("Failed to get home directory")]
    HomeDirectoryNotFound,

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using RainbowPathError
pub type Result<T> = std::result::Result<T, RainbowPathError>;

impl RainbowPathError {
    /// Classify the error, looking through wrapping variants
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ExpectedProperty { .. }
            | Self::UnknownProperty { .. }
            | Self::MissingColor { .. }
            | Self::InvalidColor { .. }
            | Self::ExpectedEndOfInput { .. }
            | Self::ConfigSyntax { .. }
            | Self::InvalidOverrideIndex { .. } => ErrorKind::Syntax,
            Self::UnknownOption { .. }
            | Self::WrongValueKind { .. }
            | Self::UnexpectedIndex { .. }
            | Self::MissingIndex { .. }
            | Self::UnknownIndexer { .. } => ErrorKind::Semantic,
            Self::OverrideIndexOutOfRange { .. } | Self::ColorOutOfRange { .. } => {
                ErrorKind::Range
            }
            Self::InvalidOption { source, .. } | Self::InvalidArgument { source, .. } => {
                source.kind()
            }
            Self::WorkingDirectory(_)
            | Self::HomeDirectoryNotFound
            | Self::ConfigReadFailed { .. }
            | Self::Io(_) => ErrorKind::Resource,
        }
    }

    /// Create an expected property error
    pub fn expected_property(position: usize) -> Self {
        Self::ExpectedProperty { position }
    }

    /// Create an unknown property error
    pub fn unknown_property(name: impl Into<String>) -> Self {
        Self::UnknownProperty { name: name.into() }
    }

    /// Create a missing color error for `fg` or `bg`
    pub fn missing_color(property: impl Into<String>) -> Self {
        Self::MissingColor {
            property: property.into(),
        }
    }

    /// Create an invalid color error
    pub fn invalid_color(token: impl Into<String>) -> Self {
        Self::InvalidColor {
            token: token.into(),
        }
    }

    /// Create a trailing input error
    pub fn expected_end_of_input(position: usize) -> Self {
        Self::ExpectedEndOfInput { position }
    }

    /// Create a config file syntax error on a 1-based line
    pub fn config_syntax(line: usize, message: impl Into<String>) -> Self {
        Self::ConfigSyntax {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid override index error
    pub fn invalid_override_index(input: impl Into<String>) -> Self {
        Self::InvalidOverrideIndex {
            input: input.into(),
        }
    }

    /// Create an unknown option error
    pub fn unknown_option(name: impl Into<String>) -> Self {
        Self::UnknownOption { name: name.into() }
    }

    /// Create a wrong value kind error
    pub fn wrong_value_kind(name: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongValueKind {
            name: name.into(),
            expected,
        }
    }

    /// Create an unexpected index error
    pub fn unexpected_index(name: impl Into<String>) -> Self {
        Self::UnexpectedIndex { name: name.into() }
    }

    /// Create a missing index error
    pub fn missing_index(name: impl Into<String>) -> Self {
        Self::MissingIndex { name: name.into() }
    }

    /// Create an unknown indexer error
    pub fn unknown_indexer(name: impl Into<String>) -> Self {
        Self::UnknownIndexer { name: name.into() }
    }

    /// Create an override index out of range error
    pub fn override_index_out_of_range(raw_index: i64, count: usize) -> Self {
        Self::OverrideIndexOutOfRange { raw_index, count }
    }

    /// Create a color out of range error
    pub fn color_out_of_range(value: impl Into<String>, max: u16) -> Self {
        Self::ColorOutOfRange {
            value: value.into(),
            max,
        }
    }

    /// Wrap an error raised while applying a config file option
    pub fn invalid_option(name: impl Into<String>, source: RainbowPathError) -> Self {
        Self::InvalidOption {
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// Wrap an error raised while applying a command line flag
    pub fn invalid_argument(flag: impl Into<String>, source: RainbowPathError) -> Self {
        Self::InvalidArgument {
            flag: flag.into(),
            source: Box::new(source),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RainbowPathError::HomeDirectoryNotFound;
        assert_eq!(err.to_string(), "Failed to get home directory");
    }

    #[test]
    fn test_unknown_option_error() {
        let err = RainbowPathError::unknown_option("colour");
        assert_eq!(err.to_string(), "Invalid option 'colour'");
        assert_eq!(err.kind(), ErrorKind::Semantic);
    }

    #[test]
    fn test_override_index_out_of_range_error() {
        let err = RainbowPathError::override_index_out_of_range(-6, 5);
        assert_eq!(err.to_string(), "Invalid override index -6 (5 available)");
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_config_syntax_error() {
        let err = RainbowPathError::config_syntax(3, "Unterminated string");
        assert_eq!(err.to_string(), "Line 3: Unterminated string");
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }

    #[test]
    fn test_wrapped_error_keeps_kind() {
        let inner = RainbowPathError::color_out_of_range("999", 255);
        let err = RainbowPathError::invalid_argument("--palette", inner);
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(err.to_string().contains("--palette"));
        assert!(err.to_string().contains("999"));
    }

    #[test]
    fn test_config_read_failed() {
        let path = std::path::PathBuf::from("/test/rainbowpath.conf");
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = RainbowPathError::config_read_failed(&path, io_err);
        assert!(err.to_string().contains("/test/rainbowpath.conf"));
        assert!(err.to_string().contains("access denied"));
        assert_eq!(err.kind(), ErrorKind::Resource);
    }
}
