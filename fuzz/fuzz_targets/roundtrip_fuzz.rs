#![no_main]
use chunkdelta::{DeltaOptions, compute_delta_with_options};
use libfuzzer_sys::fuzz_target;

// Quotable inputs must encode successfully and replay back to the
// source byte for byte.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let chunk_size = (data[0] as usize % 32) + 1;
    let payload = &data[1..];
    let split = payload.len() / 2;
    let (raw_source, raw_destination) = payload.split_at(split);

    // Map every byte into a small quotable alphabet; a narrow range
    // also makes duplicate chunks and partial matches common.
    let sanitize = |bytes: &[u8]| -> Vec<u8> { bytes.iter().map(|b| b'a' + (b % 8)).collect() };
    let source = sanitize(raw_source);
    let destination = sanitize(raw_destination);

    let opts = DeltaOptions { chunk_size };
    let delta = compute_delta_with_options(&source, &destination, &opts).unwrap();
    assert_eq!(replay(&delta, &destination, chunk_size), source);
});

fn replay(delta: &[u8], destination: &[u8], chunk_size: usize) -> Vec<u8> {
    let text = std::str::from_utf8(delta).unwrap();
    let doc: serde_json::Value = serde_json::from_str(text).unwrap();

    if doc["m"] == serde_json::Value::Bool(false) {
        return destination.to_vec();
    }

    let mut out = Vec::new();
    for token in doc["c"].as_array().unwrap() {
        match token {
            serde_json::Value::String(literal) => out.extend_from_slice(literal.as_bytes()),
            serde_json::Value::Array(run) => {
                let start = run[0].as_u64().unwrap() as usize;
                let count = run[1].as_u64().unwrap() as usize;
                for id in start..start + count {
                    let lo = id * chunk_size;
                    let hi = (lo + chunk_size).min(destination.len());
                    out.extend_from_slice(&destination[lo..hi]);
                }
            }
            _ => unreachable!("unexpected token"),
        }
    }
    out
}
