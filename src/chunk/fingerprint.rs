// Content fingerprints.
//
// A fingerprint is the 128-bit MD5 digest of a byte range. Equal
// fingerprints are treated as equal content everywhere in this crate;
// MD5 is a fixed-width content identity here, not a security boundary.

/// 128-bit content fingerprint.
pub type Fingerprint = [u8; 16];

/// Fingerprint a byte range.
#[inline]
pub fn fingerprint(data: &[u8]) -> Fingerprint {
    md5::compute(data).into()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
