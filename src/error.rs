//! Error types for genpkgbuild
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Dependency tool errors
#[derive(Error, Debug)]
pub enum QueryError {
    /// Tool could not be located
    #[error("Dependency tool '{command}' not found: {error}")]
    ToolNotFound { command: String, error: String },

    /// Tool could not be started
    #[error("Failed to run dependency tool '{command}': {error}")]
    Spawn { command: String, error: String },

    /// Tool exited unsuccessfully
    #[error("Dependency tool '{command}' failed with {status}")]
    Failed { command: String, status: String },

    /// Tool output was not UTF-8
    #[error("Dependency tool '{command}' produced non-UTF-8 output: {error}")]
    InvalidUtf8 { command: String, error: String },

    /// Tool output was not a valid manifest
    #[error("Failed to decode dependency manifest from '{command}': {error}")]
    Decode { command: String, error: String },
}

/// Checksum errors
#[derive(Error, Debug)]
pub enum ChecksumError {
    /// Checksum target could not be opened or read
    #[error("Failed to read '{path}' for checksum: {error}")]
    Read { path: PathBuf, error: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to open a file for reading
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to create or write a file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Explicitly requested config file is missing
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: PathBuf, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: PathBuf, error: String },

    /// Unknown scheme name
    #[error("Unknown scheme '{name}': must be one of {choices:?}")]
    UnknownScheme { name: String, choices: Vec<String> },

    /// Unknown digest algorithm
    #[error("Unknown checksum algorithm '{name}': must be one of {choices:?}")]
    UnknownAlgorithm { name: String, choices: Vec<String> },

    /// Placeholder token has the wrong shape
    #[error("Invalid placeholder token '{token}': expected the form @NAME@ with A-Z, 0-9 or _")]
    InvalidToken { token: String },

    /// Same token mapped twice
    #[error("Placeholder token '{token}' is configured more than once")]
    DuplicateToken { token: String },
}

/// Top-level genpkgbuild error type
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Dependency tool error
    #[error("Dependency query error: {0}")]
    Query(#[from] QueryError),

    /// Checksum error
    #[error("Checksum error: {0}")]
    Checksum(#[from] ChecksumError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
