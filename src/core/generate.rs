//! PKGBUILD generation
//!
//! Runs the pipeline once: query the dependency tool, hash the checksum
//! targets, then render the template. Every replacement is computed before
//! the output file is opened, so a failing query or a missing checksum
//! target leaves no output behind. A write failure during rendering can
//! leave a partial file.

use std::path::{Path, PathBuf};

use crate::config::defaults::SOURCE_DATE_EPOCH;
use crate::error::{FilesystemError, GenerateError};
use crate::infra::checksum::file_digest;
use crate::infra::dependency_tool::DependencyTool;
use crate::infra::filesystem::{create_writer, open_reader};

use super::manifest::DependencyManifest;
use super::replacements::{build_date, pkgver_for_date, Replacements};
use super::scheme::TOKEN_PKGVER;
use super::settings::Settings;
use super::template::{render, RenderError, RenderStats};

/// Result of a successful run
#[derive(Debug)]
pub struct GenerateReport {
    /// File that was written
    pub output: PathBuf,
    /// Mapping that was applied
    pub replacements: Replacements,
    /// Render statistics
    pub stats: RenderStats,
}

/// Build the replacement mapping for a manifest
///
/// Hashes every configured checksum target and fills `@PKGVER@` when the
/// scheme provides it or an explicit value is set.
pub fn build_replacements(
    settings: &Settings,
    manifest: &DependencyManifest,
    source_date_epoch: Option<&str>,
) -> Result<Replacements, GenerateError> {
    let mut replacements = Replacements::from_manifest(manifest, settings.scheme.join_style());

    for spec in &settings.checksums {
        let digest = file_digest(&settings.path(Path::new(&spec.path)), spec.algorithm)?;
        tracing::info!("{} ({}) = {digest}", spec.token, spec.path);
        replacements.insert(spec.token.as_str(), digest);
    }

    if let Some(pkgver) = &settings.pkgver {
        replacements.insert(TOKEN_PKGVER, pkgver.as_str());
    } else if settings.scheme.provides_pkgver() {
        let pkgver = pkgver_for_date(build_date(source_date_epoch));
        tracing::info!("{TOKEN_PKGVER} = {pkgver}");
        replacements.insert(TOKEN_PKGVER, pkgver);
    }

    Ok(replacements)
}

/// Render the template with a prepared mapping
pub fn render_to_output(
    settings: &Settings,
    replacements: &Replacements,
) -> Result<RenderStats, GenerateError> {
    let template_path = settings.template_path();
    let output_path = settings.output_path();

    let input = open_reader(&template_path)?;
    let mut output = create_writer(&output_path)?;

    let stats = render(input, &mut output, replacements).map_err(|e| match e {
        RenderError::Read(e) => FilesystemError::ReadFile {
            path: template_path.clone(),
            error: e.to_string(),
        },
        RenderError::Write(e) => FilesystemError::WriteFile {
            path: output_path.clone(),
            error: e.to_string(),
        },
    })?;

    tracing::info!(
        "Rendered {} lines ({} substitutions) to {}",
        stats.lines,
        stats.substitutions,
        output_path.display()
    );
    for (token, line) in &stats.unresolved {
        tracing::warn!(
            "Placeholder {token} has no value and was left as-is ({}:{line})",
            template_path.display()
        );
    }

    Ok(stats)
}

/// Run the whole pipeline
pub fn generate(settings: &Settings) -> Result<GenerateReport, GenerateError> {
    let tool = DependencyTool::new(settings.tool.as_str(), settings.root.as_path());
    let manifest = tool.query(&settings.tool_args())?;

    let source_date_epoch = std::env::var(SOURCE_DATE_EPOCH).ok();
    let replacements = build_replacements(settings, &manifest, source_date_epoch.as_deref())?;

    let stats = render_to_output(settings, &replacements)?;

    Ok(GenerateReport {
        output: settings.output_path(),
        replacements,
        stats,
    })
}
