//! File checksums
//!
//! Streams files through an MD5 or SHA-256 digest in fixed-size chunks.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use md5::Md5;
use sha2::{Digest, Sha256};

use crate::config::defaults::CHECKSUM_CHUNK_SIZE;
use crate::core::scheme::DigestAlgorithm;
use crate::error::ChecksumError;

/// Feed a reader through a digest in `CHECKSUM_CHUNK_SIZE` chunks
fn stream_digest<D: Digest, R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut hasher = D::new();
    let mut buf = [0u8; CHECKSUM_CHUNK_SIZE];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buf[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Compute the hex digest of everything a reader yields
pub fn digest_reader<R: Read>(reader: R, algorithm: DigestAlgorithm) -> std::io::Result<String> {
    match algorithm {
        DigestAlgorithm::Md5 => stream_digest::<Md5, _>(reader),
        DigestAlgorithm::Sha256 => stream_digest::<Sha256, _>(reader),
    }
}

/// Compute the hex digest of a file
pub fn file_digest(path: &Path, algorithm: DigestAlgorithm) -> Result<String, ChecksumError> {
    let read_error = |e: std::io::Error| ChecksumError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    };

    let file = File::open(path).map_err(read_error)?;
    let digest = digest_reader(file, algorithm).map_err(read_error)?;
    tracing::debug!("{} of {}: {digest}", algorithm, path.display());
    Ok(digest)
}
