//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod generate;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::core::settings::Overrides;
use output::OutputConfig;

/// genpkgbuild - Arch Linux PKGBUILD generator
///
/// Fills the placeholders of a PKGBUILD template with the dependency lists
/// reported by the project's dependency tool, file checksums and the build
/// date. Run without arguments from the source tree root.
#[derive(Parser, Debug)]
#[command(name = "genpkgbuild")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Run as if started in DIR
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Project config file [default: genpkgbuild.toml if present]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Generator scheme (v1 or v2)
    #[arg(long, env = "GENPKGBUILD_SCHEME")]
    pub scheme: Option<String>,

    /// Dependency tool command
    #[arg(long, env = "GENPKGBUILD_TOOL")]
    pub tool: Option<String>,

    /// Platform name passed to the dependency tool (v2)
    #[arg(long)]
    pub platform: Option<String>,

    /// Template path
    #[arg(long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Output path
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Value for @PKGVER@, instead of the build date
    #[arg(long)]
    pub pkgver: Option<String>,
}

impl Cli {
    /// Output settings for this invocation
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.verbose)
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output_config = self.output_config();
        let current_dir = std::env::current_dir()?;
        let root = match self.directory {
            Some(dir) => current_dir.join(dir),
            None => current_dir,
        };

        let overrides = Overrides {
            scheme: self.scheme,
            tool: self.tool,
            platform: self.platform,
            template: self.template,
            output: self.output,
            pkgver: self.pkgver,
        };

        generate::execute(&root, self.config.as_deref(), overrides, output_config)
    }
}
