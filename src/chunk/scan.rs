// Source scanning.
//
// Walks the source buffer attempting chunk-aligned matches against the
// destination index. A failed match advances one byte and grows the
// pending literal run, so a match boundary can be found at any offset,
// not just chunk-aligned ones. A successful match closes the pending
// literal, emits the match and jumps ahead a full window.

use std::ops::Range;

use log::trace;

use super::fingerprint::fingerprint;
use super::index::ChunkIndex;

/// One unit of a delta.
///
/// Concatenating what each segment stands for (the destination chunk
/// with the given order id, or the literal source bytes) reconstructs
/// the source buffer exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Source content here equals destination chunk `order_id`.
    Match(u32),
    /// Source byte range with no destination counterpart, sent verbatim.
    Literal(Range<usize>),
}

/// Scan `source` against `index`, producing segments that cover the
/// source buffer contiguously and in order.
///
/// Adjacent matches are kept one segment per chunk; run merging happens
/// at serialization. An empty source yields no segments; an index built
/// from an empty destination yields a single literal spanning the whole
/// source.
pub fn scan(index: &ChunkIndex, source: &[u8], chunk_size: usize) -> Vec<Segment> {
    debug_assert!(chunk_size > 0, "chunk_size must be at least 1");

    let mut segments = Vec::new();
    let mut literal_start = 0usize;
    let mut literal_len = 0usize;
    let mut last_order_id: Option<u32> = None;

    let mut i = 0usize;
    while i < source.len() {
        // Shrinks near the end of the buffer, mirroring the chunking
        // rule used when indexing the destination.
        let get_size = chunk_size.min(source.len() - i);
        let window = fingerprint(&source[i..i + get_size]);

        match index.resolve(&window, last_order_id) {
            Some(order_id) => {
                if literal_len > 0 {
                    trace!("literal run {literal_start}..{}", literal_start + literal_len);
                    segments.push(Segment::Literal(literal_start..literal_start + literal_len));
                    literal_len = 0;
                }
                trace!("match at {i}: chunk {order_id} ({get_size} bytes)");
                segments.push(Segment::Match(order_id));
                last_order_id = Some(order_id);
                i += get_size;
            }
            None => {
                if literal_len == 0 {
                    literal_start = i;
                }
                literal_len += 1;
                i += 1;
            }
        }
    }

    if literal_len > 0 {
        trace!("trailing literal run {literal_start}..{}", literal_start + literal_len);
        segments.push(Segment::Literal(literal_start..literal_start + literal_len));
    }

    segments
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
