//! Chunkdelta: rsync-style chunk delta encoding.
//!
//! The crate computes a compact delta that transforms a previously-known
//! "destination" buffer into a new "source" buffer: the destination is
//! split into fixed-size chunks, the source is scanned for chunk
//! matches with byte-granularity fallback, and the result is serialized
//! as runs of reused chunks plus literal insertions.
//!
//! The crate provides:
//! - The delta engine (`engine`)
//! - Chunk fingerprinting, indexing and scanning (`chunk`)
//! - The wire format encoder (`wire`)
//! - File-oriented helpers (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use chunkdelta::{DeltaOptions, compute_delta_with_options};
//!
//! let destination = b"aaaabbbbcccc"; // what the receiver already has
//! let source = b"aaaabbbbXcccc"; // what it should end up with
//!
//! let opts = DeltaOptions { chunk_size: 4 };
//! let delta = compute_delta_with_options(source, destination, &opts).unwrap();
//! assert_eq!(delta, br#"{"m":true,"l":4,"c":[[0,2],"X",[2,1]]}"#);
//! ```

pub mod chunk;
pub mod engine;
pub mod io;
pub mod wire;

#[cfg(feature = "cli")]
pub mod cli;

pub use engine::{
    DEFAULT_CHUNK_SIZE, DeltaOptions, EncodeError, compute_delta, compute_delta_with_options,
};
