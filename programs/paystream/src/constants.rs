// PDA seeds
pub const STREAM_ACCOUNT_SEED: &[u8] = b"stream";

// Stream limits
pub const MAX_STREAMS: usize = 32;

// Account sizes for zero-copy structs
// Stream (#[repr(C)]):
// - sender: 32
// - receiver: 32
// - start_time: 8
// - end_time: 8
// - amount: 8
// - withdrawn_amount: 8
// - is_active: 1
// - padding for 8-byte alignment: 7
// Total: 104
pub const STREAM_SIZE: usize = 104;

// StreamAccount size calculation:
// - discriminator: 8
// - authority: 32
// - stream_count: 8
// - streams: [Stream; 32] = 104 * 32 = 3328
// - bump: 1
// - padding for 8-byte alignment: 7
// Total: 8 + 32 + 8 + 3328 + 1 + 7 = 3384
pub const STREAM_ACCOUNT_SIZE: usize = 8 + 32 + 8 + STREAM_SIZE * MAX_STREAMS + 1 + 7;
