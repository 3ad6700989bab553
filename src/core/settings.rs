//! Run settings
//!
//! Settings are layered: scheme defaults, then the optional project file
//! `genpkgbuild.toml`, then command-line overrides.
//!
//! ```toml
//! scheme = "v2"
//! template = "archlinux/PKGBUILD.in"
//! output = "archlinux-output/PKGBUILD"
//!
//! [tool]
//! command = "./packages"
//! platform = "archlinux"
//!
//! [[checksum]]
//! token = "@SHA256@"
//! path = "org.kde.development.appdata.xml"
//! algorithm = "sha256"
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::defaults;
use crate::error::ConfigError;

use super::scheme::{ChecksumSpec, DigestAlgorithm, Scheme};
use super::template::is_valid_token;

/// Contents of `genpkgbuild.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Scheme name (`v1` or `v2`)
    pub scheme: Option<String>,

    /// Template path
    pub template: Option<PathBuf>,

    /// Output path
    pub output: Option<PathBuf>,

    /// Dependency tool settings
    #[serde(default)]
    pub tool: ToolConfig,

    /// Checksum entries; replace the scheme defaults when present
    #[serde(default, rename = "checksum")]
    pub checksums: Option<Vec<ChecksumConfig>>,
}

/// `[tool]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Command to run
    pub command: Option<String>,

    /// Platform name passed by schemes that take one
    pub platform: Option<String>,
}

/// `[[checksum]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChecksumConfig {
    pub token: String,
    pub path: String,
    pub algorithm: String,
}

impl ProjectConfig {
    /// Parse from TOML string
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load from a specific path
    ///
    /// A missing file yields the default configuration unless `required` is
    /// set, in which case it is an error.
    pub fn load_from_path(path: &Path, required: bool) -> Result<Self, ConfigError> {
        if !path.exists() {
            if required {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        tracing::debug!("Loaded config from {}", path.display());
        Self::from_toml(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }
}

/// Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub scheme: Option<String>,
    pub tool: Option<String>,
    pub platform: Option<String>,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub pkgver: Option<String>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory relative paths resolve against
    pub root: PathBuf,
    pub scheme: Scheme,
    pub tool: String,
    pub platform: String,
    pub template: PathBuf,
    pub output: PathBuf,
    pub checksums: Vec<ChecksumSpec>,
    /// Explicit `@PKGVER@` value, bypassing the build date
    pub pkgver: Option<String>,
}

impl Settings {
    /// Scheme defaults rooted at `root`
    pub fn defaults(root: &Path, scheme: Scheme) -> Self {
        Self {
            root: root.to_path_buf(),
            scheme,
            tool: defaults::DEFAULT_TOOL.to_string(),
            platform: defaults::DEFAULT_PLATFORM.to_string(),
            template: PathBuf::from(defaults::DEFAULT_TEMPLATE),
            output: PathBuf::from(defaults::DEFAULT_OUTPUT),
            checksums: scheme.default_checksums(),
            pkgver: None,
        }
    }

    /// Layer the project file and command-line overrides over the defaults
    pub fn resolve(
        root: &Path,
        config: ProjectConfig,
        overrides: Overrides,
    ) -> Result<Self, ConfigError> {
        let scheme = match overrides.scheme.as_deref().or(config.scheme.as_deref()) {
            Some(name) => name.parse::<Scheme>()?,
            None => Scheme::default(),
        };

        let mut settings = Self::defaults(root, scheme);

        if let Some(command) = overrides.tool.or(config.tool.command) {
            settings.tool = command;
        }
        if let Some(platform) = overrides.platform.or(config.tool.platform) {
            settings.platform = platform;
        }
        if let Some(template) = overrides.template.or(config.template) {
            settings.template = template;
        }
        if let Some(output) = overrides.output.or(config.output) {
            settings.output = output;
        }
        if let Some(entries) = config.checksums {
            settings.checksums = parse_checksums(entries)?;
        }
        settings.pkgver = overrides.pkgver;

        Ok(settings)
    }

    /// Arguments passed to the dependency tool
    pub fn tool_args(&self) -> Vec<String> {
        self.scheme.tool_args(&self.platform)
    }

    /// Resolve a configured path against the root
    pub fn path(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    pub fn template_path(&self) -> PathBuf {
        self.path(&self.template)
    }

    pub fn output_path(&self) -> PathBuf {
        self.path(&self.output)
    }
}

fn parse_checksums(entries: Vec<ChecksumConfig>) -> Result<Vec<ChecksumSpec>, ConfigError> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .map(|entry| {
            if !is_valid_token(&entry.token) {
                return Err(ConfigError::InvalidToken { token: entry.token });
            }
            if !seen.insert(entry.token.clone()) {
                return Err(ConfigError::DuplicateToken { token: entry.token });
            }
            let algorithm = entry.algorithm.parse::<DigestAlgorithm>()?;
            Ok(ChecksumSpec {
                token: entry.token,
                path: entry.path,
                algorithm,
            })
        })
        .collect()
}
