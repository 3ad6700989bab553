//! CLI implementation of the generate run
//!
//! Loads settings, runs the pipeline and reports the result.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::defaults::PROJECT_CONFIG_FILE;
use crate::core::generate::generate;
use crate::core::settings::{Overrides, ProjectConfig, Settings};

use super::output::OutputConfig;

/// Execute a generate run rooted at `root`
pub fn execute(
    root: &Path,
    config: Option<&Path>,
    overrides: Overrides,
    output: OutputConfig,
) -> Result<()> {
    // An explicitly named config file must exist; the default one is optional
    let (config_path, required) = match config {
        Some(path) => (root.join(path), true),
        None => (root.join(PROJECT_CONFIG_FILE), false),
    };
    let project_config = ProjectConfig::load_from_path(&config_path, required)?;

    let settings = Settings::resolve(root, project_config, overrides)?;
    tracing::info!(
        "Scheme {} in {}: {} -> {}",
        settings.scheme,
        root.display(),
        settings.template.display(),
        settings.output.display()
    );

    let report = generate(&settings)
        .with_context(|| format!("Failed to generate {}", settings.output.display()))?;

    tracing::debug!(
        "Applied {} replacements to {}",
        report.replacements.len(),
        report.output.display()
    );
    output.success(&format!("Wrote {}", settings.output.display()));

    Ok(())
}
