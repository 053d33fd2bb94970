// Wire format for computed deltas.
//
// The output is a compact JSON document:
//
//   {"m":<bool>,"l":<chunk_size>,"c":[<tokens>]}
//
// - `m` is `false` when source and destination are byte-identical; the
//   token array is then empty.
// - Otherwise `m` is `true`, `l` echoes the chunk size, and `c` holds
//   the token sequence: `[start_order_id,run_length]` for runs of
//   consecutive ascending destination chunks, and the raw literal bytes
//   in double quotes for unmatched regions.

pub mod encoder;

pub use encoder::WireError;
