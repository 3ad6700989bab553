//! Default configuration values

/// Dependency tool invoked when none is configured
pub const DEFAULT_TOOL: &str = "./packages";

/// Subcommand asking the tool for its JSON dependency listing
pub const PACKAGES_JSON_ARG: &str = "packages-json";

/// Platform name passed to the tool by schemes that take one
pub const DEFAULT_PLATFORM: &str = "archlinux";

/// Template read on every run
pub const DEFAULT_TEMPLATE: &str = "archlinux/PKGBUILD.in";

/// Output written on every run
pub const DEFAULT_OUTPUT: &str = "archlinux-output/PKGBUILD";

/// Auxiliary file whose digest is embedded in the PKGBUILD
pub const DEFAULT_CHECKSUM_TARGET: &str = "org.kde.development.appdata.xml";

/// Project config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "genpkgbuild.toml";

/// Read size used when hashing files
pub const CHECKSUM_CHUNK_SIZE: usize = 4096;

/// Separator between list entries for the indented join style
pub const INDENTED_SEPARATOR: &str = "\n    ";

/// `strftime` format of the date-derived package version
pub const PKGVER_DATE_FORMAT: &str = "%Y%m%d";

/// Environment variable carrying a reproducible build timestamp
pub const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
