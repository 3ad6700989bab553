//! Filesystem operations
//!
//! Opens the template and output files. The output's parent directory is
//! not created here; a missing directory surfaces as a write error.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::FilesystemError;

/// Open a file for buffered line reading
pub fn open_reader(path: &Path) -> Result<BufReader<File>, FilesystemError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| FilesystemError::ReadFile {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
}

/// Create or truncate a file for writing
pub fn create_writer(path: &Path) -> Result<BufWriter<File>, FilesystemError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| FilesystemError::WriteFile {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
}
