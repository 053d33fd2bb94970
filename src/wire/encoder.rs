// Delta serialization.
//
// Owns the entire output byte layout. Consecutive `Match` segments with
// order ids ascending by exactly 1 collapse into a single
// `[start,count]` run token; a break in continuity starts a new token.
// Literal payloads are emitted verbatim between double quotes, so they
// are validated up front: a quote, backslash or control byte in a
// literal run would corrupt the document and fails the encode instead.

use std::io::{self, Write};

use thiserror::Error;

use crate::chunk::scan::Segment;

/// Serialization failures.
#[derive(Debug, Error)]
pub enum WireError {
    /// A literal payload byte cannot be represented in the quoting
    /// scheme (the format does not escape).
    #[error("literal byte {byte:#04x} at source offset {offset} cannot be quoted")]
    UnquotableLiteral {
        /// Offset of the offending byte in the source buffer.
        offset: usize,
        /// The offending byte value.
        byte: u8,
    },
    /// The output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Emit the "unmodified" form: source and destination byte-identical.
pub fn encode_unmodified<W: Write>(chunk_size: usize, out: &mut W) -> Result<(), WireError> {
    write!(out, "{{\"m\":false,\"l\":{chunk_size},\"c\":[]}}")?;
    Ok(())
}

/// Serialize a segment sequence over `source` into the wire format.
pub fn encode_delta<W: Write>(
    source: &[u8],
    segments: &[Segment],
    chunk_size: usize,
    out: &mut W,
) -> Result<(), WireError> {
    write!(out, "{{\"m\":true,\"l\":{chunk_size},\"c\":[")?;

    let mut i = 0usize;
    while i < segments.len() {
        if i > 0 {
            out.write_all(b",")?;
        }
        match &segments[i] {
            Segment::Match(start) => {
                let mut run = 1u32;
                while let Some(Segment::Match(next)) = segments.get(i + run as usize) {
                    if *next != start + run {
                        break;
                    }
                    run += 1;
                }
                write!(out, "[{start},{run}]")?;
                i += run as usize;
            }
            Segment::Literal(range) => {
                let payload = &source[range.clone()];
                validate_literal(payload, range.start)?;
                out.write_all(b"\"")?;
                out.write_all(payload)?;
                out.write_all(b"\"")?;
                i += 1;
            }
        }
    }

    out.write_all(b"]}")?;
    Ok(())
}

fn validate_literal(payload: &[u8], base_offset: usize) -> Result<(), WireError> {
    for (pos, &byte) in payload.iter().enumerate() {
        if byte == b'"' || byte == b'\\' || byte < 0x20 {
            return Err(WireError::UnquotableLiteral {
                offset: base_offset + pos,
                byte,
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
