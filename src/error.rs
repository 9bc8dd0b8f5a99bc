//! Error types for UI Demo
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// HTTP request failed (connect, timeout, non-success status)
    #[snafu(display("HTTP error for {url}: {source}"))]
    Http { url: String, source: reqwest::Error },

    /// Response arrived without a body
    #[snafu(display("Empty response body from {url}"))]
    EmptyBody { url: String },

    /// Response body is not an image format we can decode
    #[snafu(display("Unsupported image data from {url}"))]
    UnsupportedImage { url: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
