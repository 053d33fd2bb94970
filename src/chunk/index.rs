// Destination chunk index.
//
// The destination buffer is split into consecutive `chunk_size`-byte
// chunks (the final chunk takes whatever remains) and each chunk is
// assigned a sequential order id. The index maps a chunk fingerprint to
// the ordered list of order ids carrying that content, because distinct
// chunks may be byte-identical.
//
// `resolve` disambiguates among duplicate chunks by locality: the
// candidate numerically closest to the last accepted match wins, which
// tends to keep matches in ascending runs the wire encoder can merge.

use std::collections::HashMap;

use super::fingerprint::{Fingerprint, fingerprint};

/// Fingerprint-to-order-id index over a destination buffer.
///
/// Built once per delta computation, read-only afterward. Order ids are
/// assigned 0, 1, 2, … in extraction order; ids sharing a fingerprint
/// are stored in ascending order.
pub struct ChunkIndex {
    entries: HashMap<Fingerprint, Vec<u32>>,
    chunk_count: u32,
}

impl ChunkIndex {
    /// Index `buffer` in `chunk_size`-byte chunks.
    ///
    /// An empty buffer produces an empty index (no order ids allocated).
    pub fn build(buffer: &[u8], chunk_size: usize) -> Self {
        debug_assert!(chunk_size > 0, "chunk_size must be at least 1");
        let mut entries: HashMap<Fingerprint, Vec<u32>> = HashMap::new();
        let mut chunk_count = 0u32;
        for chunk in buffer.chunks(chunk_size) {
            entries.entry(fingerprint(chunk)).or_default().push(chunk_count);
            chunk_count += 1;
        }
        Self {
            entries,
            chunk_count,
        }
    }

    /// Pick the best order id for `fingerprint`, or `None` if the
    /// content occurs nowhere in the destination.
    ///
    /// With several candidates the one closest (by absolute distance) to
    /// `last_order_id` wins; equidistant candidates resolve to the
    /// smaller id. Before the first accepted match (`last_order_id` is
    /// `None`) the smallest candidate wins.
    pub fn resolve(&self, fingerprint: &Fingerprint, last_order_id: Option<u32>) -> Option<u32> {
        let candidates = self.entries.get(fingerprint)?;
        match (candidates.as_slice(), last_order_id) {
            ([only], _) => Some(*only),
            (ids, None) => ids.first().copied(),
            (ids, Some(last)) => ids.iter().copied().min_by_key(|&id| (id.abs_diff(last), id)),
        }
    }

    /// Number of chunks extracted from the destination buffer.
    pub fn chunk_count(&self) -> u32 {
        self.chunk_count
    }

    /// Number of distinct chunk fingerprints.
    pub fn distinct_fingerprints(&self) -> usize {
        self.entries.len()
    }

    /// Whether the destination buffer contributed no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunk_count == 0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
