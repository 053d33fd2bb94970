// File-oriented helpers.
//
// Thin convenience layer over the in-memory engine: read both files,
// enforce the content-size cap, compute the delta. The cap bounds the
// latency of a single computation; the engine itself accepts buffers of
// any size.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::engine::{self, DeltaOptions, EncodeError};

/// Largest file accepted by [`diff_files`] (2 MiB).
pub const MAX_CONTENT_SIZE: u64 = 2 * 1024 * 1024;

/// File-level delta failures.
#[derive(Debug, Error)]
pub enum FileDeltaError {
    /// Reading an input file failed.
    #[error("cannot read {path}: {source}")]
    Read {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// An input file exceeds the content-size cap.
    #[error("{path} is {len} bytes, over the {max}-byte limit")]
    TooLarge {
        /// The offending file.
        path: PathBuf,
        /// Its length in bytes.
        len: u64,
        /// The enforced limit.
        max: u64,
    },
    /// The delta computation itself failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Compute the delta that transforms the file at `destination` into the
/// file at `source`, with the default content-size cap.
pub fn diff_files(
    source: &Path,
    destination: &Path,
    opts: &DeltaOptions,
) -> Result<Vec<u8>, FileDeltaError> {
    diff_files_capped(source, destination, opts, MAX_CONTENT_SIZE)
}

/// [`diff_files`] with an explicit content-size cap.
pub fn diff_files_capped(
    source: &Path,
    destination: &Path,
    opts: &DeltaOptions,
    max_len: u64,
) -> Result<Vec<u8>, FileDeltaError> {
    let source_bytes = read_capped(source, max_len)?;
    let destination_bytes = read_capped(destination, max_len)?;
    Ok(engine::compute_delta_with_options(
        &source_bytes,
        &destination_bytes,
        opts,
    )?)
}

fn read_capped(path: &Path, max_len: u64) -> Result<Vec<u8>, FileDeltaError> {
    let wrap = |source| FileDeltaError::Read {
        path: path.to_path_buf(),
        source,
    };
    let len = fs::metadata(path).map_err(wrap)?.len();
    if len > max_len {
        return Err(FileDeltaError::TooLarge {
            path: path.to_path_buf(),
            len,
            max: max_len,
        });
    }
    fs::read(path).map_err(wrap)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
