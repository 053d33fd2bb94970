#![no_main]
use chunkdelta::{DeltaOptions, compute_delta_with_options};
use libfuzzer_sys::fuzz_target;

// Arbitrary buffer pairs and chunk sizes must never panic; unquotable
// literals are allowed to surface as errors.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let chunk_size = (data[0] as usize % 64) + 1;
    let payload = &data[1..];
    let split = payload.len() / 2;
    let (source, destination) = payload.split_at(split);

    let opts = DeltaOptions { chunk_size };
    let _ = compute_delta_with_options(source, destination, &opts);
});
