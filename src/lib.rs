//! genpkgbuild - Arch Linux PKGBUILD generator
//!
//! Generates a PKGBUILD from a template by substituting placeholder tokens
//! with the dependency lists reported by an external tool, file checksums
//! and the build date.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Manifest, settings, replacement mapping and rendering
//! - [`infra`] - Infrastructure layer (filesystem, checksums, processes)
//! - [`config`] - Configuration constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
