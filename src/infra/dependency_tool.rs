//! Dependency tool invocation
//!
//! Runs the project's dependency listing tool and decodes its JSON output.
//! The call blocks until the tool exits; its stderr goes straight to the
//! user's terminal.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::core::manifest::DependencyManifest;
use crate::error::QueryError;

/// Dependency tool wrapper
#[derive(Debug, Clone)]
pub struct DependencyTool {
    /// Command as configured (bare name or path)
    command: String,
    /// Working directory the tool runs in and relative paths resolve against
    working_dir: PathBuf,
}

impl DependencyTool {
    /// Create a new dependency tool wrapper
    ///
    /// `working_dir` should be absolute; the resolved program path is
    /// derived from it.
    pub fn new(command: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            working_dir: working_dir.into(),
        }
    }

    /// Locate the tool on PATH, or relative to the working directory
    pub fn resolve(&self) -> Result<PathBuf, QueryError> {
        which::which_in(
            &self.command,
            std::env::var_os("PATH"),
            &self.working_dir,
        )
        .map_err(|e| QueryError::ToolNotFound {
            command: self.command.clone(),
            error: e.to_string(),
        })
    }

    /// Run the tool and return its raw stdout
    pub fn run(&self, args: &[String]) -> Result<Vec<u8>, QueryError> {
        let program = self.resolve()?;
        tracing::info!("Running {} {}", program.display(), args.join(" "));

        let output = Command::new(&program)
            .args(args)
            .current_dir(&self.working_dir)
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| QueryError::Spawn {
                command: self.command.clone(),
                error: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(QueryError::Failed {
                command: self.command.clone(),
                status: output.status.to_string(),
            });
        }

        tracing::debug!("{} wrote {} bytes", self.command, output.stdout.len());
        Ok(output.stdout)
    }

    /// Query the dependency manifest
    pub fn query(&self, args: &[String]) -> Result<DependencyManifest, QueryError> {
        let stdout = self.run(args)?;
        decode_manifest(&self.command, stdout)
    }
}

/// Decode the tool's stdout as a UTF-8 JSON manifest
pub fn decode_manifest(command: &str, stdout: Vec<u8>) -> Result<DependencyManifest, QueryError> {
    let text = String::from_utf8(stdout).map_err(|e| QueryError::InvalidUtf8 {
        command: command.to_string(),
        error: e.to_string(),
    })?;

    let manifest = DependencyManifest::from_json(&text).map_err(|e| QueryError::Decode {
        command: command.to_string(),
        error: e.to_string(),
    })?;

    tracing::info!(
        "Dependency manifest: {} required, {} suggested",
        manifest.required.len(),
        manifest.suggested.len()
    );
    Ok(manifest)
}
