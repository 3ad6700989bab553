//! Generation schemes
//!
//! A scheme captures what differs between revisions of the PKGBUILD
//! generator: how the dependency tool is asked, how dependency lists are
//! joined, which files are hashed with which digest, and whether a
//! date-derived `@PKGVER@` is provided.

use std::fmt;
use std::str::FromStr;

use crate::config::defaults;
use crate::error::ConfigError;

/// Placeholder for the required dependency list
pub const TOKEN_DEPENDS: &str = "@DEPENDS@";
/// Placeholder for the optional dependency list
pub const TOKEN_OPTDEPENDS: &str = "@OPTDEPENDS@";
/// Placeholder for an MD5 digest
pub const TOKEN_MD5: &str = "@MD5@";
/// Placeholder for a SHA-256 digest
pub const TOKEN_SHA256: &str = "@SHA256@";
/// Placeholder for the date-derived package version
pub const TOKEN_PKGVER: &str = "@PKGVER@";

/// Digest algorithm used for a checksum entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Md5,
    Sha256,
}

impl DigestAlgorithm {
    /// All accepted names
    pub const NAMES: &'static [&'static str] = &["md5", "sha256"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            _ => Err(ConfigError::UnknownAlgorithm {
                name: s.to_string(),
                choices: Self::NAMES.iter().map(ToString::to_string).collect(),
            }),
        }
    }
}

/// How dependency names are joined into one replacement string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStyle {
    /// `a b c`
    Space,
    /// One name per line, indented
    Indented,
}

impl JoinStyle {
    pub fn separator(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Indented => defaults::INDENTED_SEPARATOR,
        }
    }

    pub fn join(self, names: &[String]) -> String {
        names.join(self.separator())
    }
}

/// A file digest to embed under a placeholder token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumSpec {
    pub token: String,
    pub path: String,
    pub algorithm: DigestAlgorithm,
}

impl ChecksumSpec {
    pub fn new(token: &str, path: &str, algorithm: DigestAlgorithm) -> Self {
        Self {
            token: token.to_string(),
            path: path.to_string(),
            algorithm,
        }
    }
}

/// Known generator revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// Space-joined lists, MD5 of the appdata file, no platform argument
    #[default]
    V1,
    /// Indented lists, SHA-256 of the appdata file, platform argument, `@PKGVER@`
    V2,
}

impl Scheme {
    /// All accepted names
    pub const NAMES: &'static [&'static str] = &["v1", "v2"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }

    pub fn join_style(self) -> JoinStyle {
        match self {
            Self::V1 => JoinStyle::Space,
            Self::V2 => JoinStyle::Indented,
        }
    }

    /// Whether the tool is given a platform name after `packages-json`
    pub fn passes_platform(self) -> bool {
        matches!(self, Self::V2)
    }

    /// Whether `@PKGVER@` is filled from the build date
    pub fn provides_pkgver(self) -> bool {
        matches!(self, Self::V2)
    }

    /// Checksum entries used when none are configured
    pub fn default_checksums(self) -> Vec<ChecksumSpec> {
        match self {
            Self::V1 => vec![ChecksumSpec::new(
                TOKEN_MD5,
                defaults::DEFAULT_CHECKSUM_TARGET,
                DigestAlgorithm::Md5,
            )],
            Self::V2 => vec![ChecksumSpec::new(
                TOKEN_SHA256,
                defaults::DEFAULT_CHECKSUM_TARGET,
                DigestAlgorithm::Sha256,
            )],
        }
    }

    /// Arguments passed to the dependency tool
    pub fn tool_args(self, platform: &str) -> Vec<String> {
        let mut args = vec![defaults::PACKAGES_JSON_ARG.to_string()];
        if self.passes_platform() {
            args.push(platform.to_string());
        }
        args
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            _ => Err(ConfigError::UnknownScheme {
                name: s.to_string(),
                choices: Self::NAMES.iter().map(ToString::to_string).collect(),
            }),
        }
    }
}
