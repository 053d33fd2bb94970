// Delta engine: ties chunk indexing/scanning to wire encoding.
//
// Provides the high-level compute API that orchestrates:
//   - Whole-buffer fingerprint comparison (unmodified short-circuit)
//   - Chunk indexing of the destination buffer (chunk module)
//   - Source scanning into match/literal segments
//   - Wire encoding of the segment sequence (wire module)

use log::debug;
use thiserror::Error;

use crate::chunk::fingerprint::fingerprint;
use crate::chunk::index::ChunkIndex;
use crate::chunk::scan;
use crate::wire::encoder::{self, WireError};

/// Chunk width used by [`compute_delta`].
pub const DEFAULT_CHUNK_SIZE: usize = 20;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for delta computation.
#[derive(Debug, Clone)]
pub struct DeltaOptions {
    /// Chunk width in bytes. Both sides of a transfer must agree on it;
    /// the value is echoed in the output's `l` field.
    pub chunk_size: usize,
}

impl Default for DeltaOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Delta computation failures.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// `chunk_size` was zero; the scan cannot make progress.
    #[error("chunk size must be at least 1")]
    InvalidChunkSize,
    /// The segment sequence could not be serialized.
    #[error(transparent)]
    Wire(#[from] WireError),
}

// ---------------------------------------------------------------------------
// High-level compute
// ---------------------------------------------------------------------------

/// Compute the delta that transforms `destination` into `source`, with
/// the default chunk size.
///
/// Returns the serialized wire-format document. Byte-identical buffers
/// short-circuit to the unmodified form without running the chunk
/// machinery.
pub fn compute_delta(source: &[u8], destination: &[u8]) -> Result<Vec<u8>, EncodeError> {
    compute_delta_with_options(source, destination, &DeltaOptions::default())
}

/// Compute a delta with custom options.
pub fn compute_delta_with_options(
    source: &[u8],
    destination: &[u8],
    opts: &DeltaOptions,
) -> Result<Vec<u8>, EncodeError> {
    if opts.chunk_size == 0 {
        return Err(EncodeError::InvalidChunkSize);
    }

    // Worst case is one all-literal token plus framing.
    let mut out = Vec::with_capacity(source.len() + 32);

    if fingerprint(source) == fingerprint(destination) {
        debug!(
            "buffers identical ({} bytes), emitting unmodified form",
            source.len()
        );
        encoder::encode_unmodified(opts.chunk_size, &mut out)?;
        return Ok(out);
    }

    let index = ChunkIndex::build(destination, opts.chunk_size);
    debug!(
        "indexed {} destination chunks ({} distinct fingerprints)",
        index.chunk_count(),
        index.distinct_fingerprints()
    );

    let segments = scan::scan(&index, source, opts.chunk_size);
    debug!("scan produced {} segments", segments.len());

    encoder::encode_delta(source, &segments, opts.chunk_size, &mut out)?;
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(source: &[u8], destination: &[u8], chunk_size: usize) -> Vec<u8> {
        compute_delta_with_options(source, destination, &DeltaOptions { chunk_size })
            .expect("compute failed")
    }

    fn delta_err(source: &[u8], destination: &[u8], chunk_size: usize) -> EncodeError {
        compute_delta_with_options(source, destination, &DeltaOptions { chunk_size })
            .expect_err("compute unexpectedly succeeded")
    }

    #[test]
    fn identical_buffers_short_circuit() {
        let data = b"The quick brown fox jumps over the lazy dog.";
        assert_eq!(
            compute_delta(data, data).unwrap(),
            br#"{"m":false,"l":20,"c":[]}"#
        );
    }

    #[test]
    fn identical_empty_buffers_short_circuit() {
        assert_eq!(
            compute_delta(b"", b"").unwrap(),
            br#"{"m":false,"l":20,"c":[]}"#
        );
    }

    #[test]
    fn insertion_between_runs() {
        assert_eq!(
            delta(b"aaaabbbbXcccc", b"aaaabbbbcccc", 4),
            br#"{"m":true,"l":4,"c":[[0,2],"X",[2,1]]}"#
        );
    }

    #[test]
    fn empty_destination_is_one_literal() {
        assert_eq!(
            delta(b"all new content", b"", 4),
            br#"{"m":true,"l":4,"c":["all new content"]}"#
        );
    }

    #[test]
    fn empty_source_is_empty_token_array() {
        assert_eq!(
            delta(b"", b"old content here", 4),
            br#"{"m":true,"l":4,"c":[]}"#
        );
    }

    #[test]
    fn short_final_destination_chunk_is_matchable() {
        // Destination chunks: 0="aaaa", 1="bbbb", 2="cc".
        assert_eq!(
            delta(b"ZZZZcc", b"aaaabbbbcc", 4),
            br#"{"m":true,"l":4,"c":["ZZZZ",[2,1]]}"#
        );
    }

    #[test]
    fn replaced_tail() {
        assert_eq!(
            delta(b"aaaabbbbZZZZ", b"aaaabbbbcccc", 4),
            br#"{"m":true,"l":4,"c":[[0,2],"ZZZZ"]}"#
        );
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let err = delta_err(b"a", b"b", 0);
        assert!(matches!(err, EncodeError::InvalidChunkSize));
    }

    #[test]
    fn unquotable_literal_surfaces_as_error() {
        let err = delta_err(b"tab\there", b"unrelated content!", 4);
        assert!(matches!(
            err,
            EncodeError::Wire(WireError::UnquotableLiteral { byte: b'\t', .. })
        ));
    }

    #[test]
    fn identical_buffers_with_unquotable_bytes_still_short_circuit() {
        // The short-circuit never inspects literal content.
        let data = b"\x00\x01\x02\"\\\n";
        assert_eq!(
            compute_delta(data, data).unwrap(),
            br#"{"m":false,"l":20,"c":[]}"#
        );
    }

    #[test]
    fn default_chunk_size_is_echoed() {
        let out = compute_delta(b"new", b"old").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(r#"{"m":true,"l":20,"c":["#), "got: {text}");
    }
}
