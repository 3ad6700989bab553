//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary source tree with a template, an appdata file and a
/// fake dependency tool.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new empty test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a project laid out the way the generator expects by default
    #[allow(dead_code)]
    pub fn with_defaults(template: &str) -> Self {
        let project = Self::new();
        project.create_file("archlinux/PKGBUILD.in", template);
        project.create_dir("archlinux-output");
        project.create_file(APPDATA_FILE, APPDATA_CONTENT);
        project.create_tool(SAMPLE_MANIFEST_JSON);
        project
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Install `./packages`, which prints `json` for `packages-json` and
    /// records its arguments in `tool-args.txt`
    pub fn create_tool(&self, json: &str) {
        self.create_script(
            "packages",
            &format!(
                "echo \"$@\" > tool-args.txt\n\
                 if [ \"$1\" != \"packages-json\" ]; then exit 2; fi\n\
                 cat <<'JSON'\n{json}\nJSON"
            ),
        );
    }

    /// Install an executable shell script
    pub fn create_script(&self, name: &str, body: &str) {
        self.create_file(name, &format!("#!/bin/sh\n{body}\n"));
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let path = self.dir.path().join(name);
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to make script executable");
        }
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Run genpkgbuild in the project directory
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_genpkgbuild"));
        cmd.current_dir(self.path());
        cmd.env_remove("GENPKGBUILD_SCHEME");
        cmd.env_remove("GENPKGBUILD_TOOL");
        cmd.env_remove("SOURCE_DATE_EPOCH");
        cmd.env_remove("RUST_LOG");
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute genpkgbuild")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Auxiliary file hashed by both schemes
pub const APPDATA_FILE: &str = "org.kde.development.appdata.xml";

/// Content of the auxiliary file
pub const APPDATA_CONTENT: &str = "hello world";

/// MD5 of `APPDATA_CONTENT`
#[allow(dead_code)]
pub const APPDATA_MD5: &str = "5eb63bbbe01eeed093cb22bb8f5acdc3";

/// SHA-256 of `APPDATA_CONTENT`
#[allow(dead_code)]
pub const APPDATA_SHA256: &str =
    "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

/// Dependency tool output used by default
pub const SAMPLE_MANIFEST_JSON: &str =
    r#"{"required": ["foo", "bar"], "suggested": ["baz"], "build": ["cmake"]}"#;

/// PKGBUILD template using every placeholder
#[allow(dead_code)]
pub const SAMPLE_TEMPLATE: &str = "\
# Maintainer: KDevelop team <kdevelop-devel@kde.org>
pkgname=kdevelop-git
pkgver=@PKGVER@
depends=(@DEPENDS@)
optdepends=(@OPTDEPENDS@)
md5sums=('@MD5@')
sha256sums=('@SHA256@')
";
