//! Error types for Widget Kit
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! Rendering itself never fails; these errors only surface at the boundaries
//! (config files, string parsing of props, version requirements).

use snafu::Snafu;

/// Main error type for the library
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// Unknown button variant name
    #[snafu(display("Invalid button variant: {value:?} (expected primary, secondary or danger)"))]
    InvalidVariant { value: String },

    /// Unknown button size name
    #[snafu(display("Invalid button size: {value:?} (expected small, medium or large)"))]
    InvalidSize { value: String },

    /// Peer requirement is not a valid semver range
    #[snafu(display("Invalid version requirement {requirement:?} for peer {name}: {source}"))]
    InvalidRequirement {
        name: String,
        requirement: String,
        source: semver::Error,
    },

    /// IO error (config file reads)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },
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
