//! Infrastructure layer
//!
//! Wrappers around the filesystem and the external dependency tool.

pub mod checksum;
pub mod dependency_tool;
pub mod filesystem;
