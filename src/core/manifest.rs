//! Dependency manifest
//!
//! The JSON document printed by `<tool> packages-json [platform]`:
//!
//! ```json
//! { "required": ["qt5-base", "kio"], "suggested": ["clang"] }
//! ```
//!
//! Keys other than `required` and `suggested` are ignored.

use serde::Deserialize;

use super::scheme::JoinStyle;

/// Required and suggested package names reported by the dependency tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DependencyManifest {
    /// Packages needed at run time (`depends`)
    pub required: Vec<String>,

    /// Packages that enable optional features (`optdepends`)
    pub suggested: Vec<String>,
}

impl DependencyManifest {
    /// Parse from a JSON string
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Required packages joined for substitution
    pub fn depends(&self, style: JoinStyle) -> String {
        style.join(&self.required)
    }

    /// Suggested packages joined for substitution
    pub fn optdepends(&self, style: JoinStyle) -> String {
        style.join(&self.suggested)
    }
}
