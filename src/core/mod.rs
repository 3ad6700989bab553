//! Core business logic module
//!
//! # Submodules
//!
//! - [`manifest`] - Dependency manifest decoding
//! - [`scheme`] - Generator schemes, placeholder tokens and digest algorithms
//! - [`settings`] - Layered run settings (`genpkgbuild.toml` and CLI overrides)
//! - [`replacements`] - Placeholder to text mapping and `@PKGVER@` dates
//! - [`template`] - Line-by-line template rendering
//! - [`generate`] - The generation pipeline

pub mod generate;
pub mod manifest;
pub mod replacements;
pub mod scheme;
pub mod settings;
pub mod template;
