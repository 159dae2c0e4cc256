/// Discord epoch (2015-01-01T00:00:00Z) in milliseconds since the Unix epoch.
pub const DISCORD_EPOCH: u64 = 1_420_070_400_000;

pub const SEQUENCE_BITS: u64 = 12;
pub const PROCESS_ID_BITS: u64 = 5;
pub const WORKER_ID_BITS: u64 = 5;
pub const TIMESTAMP_BITS: u64 = 64 - WORKER_ID_BITS - PROCESS_ID_BITS - SEQUENCE_BITS;

pub const PROCESS_ID_SHIFT: u64 = SEQUENCE_BITS;
pub const WORKER_ID_SHIFT: u64 = PROCESS_ID_SHIFT + PROCESS_ID_BITS;
pub const TIMESTAMP_SHIFT: u64 = WORKER_ID_SHIFT + WORKER_ID_BITS;

pub const SEQUENCE_MASK: u64 = 0xFFF;
pub const PROCESS_ID_MASK: u64 = 0x1F000;
pub const WORKER_ID_MASK: u64 = 0x3E0000;

pub const MAX_SEQUENCE: u16 = (1 << SEQUENCE_BITS) as u16 - 1;
pub const MAX_PROCESS_ID: u8 = (1 << PROCESS_ID_BITS) as u8 - 1;
pub const MAX_WORKER_ID: u8 = (1 << WORKER_ID_BITS) as u8 - 1;

/// Number of bits in a snowflake, and the length of a [`Bitmap`](crate::Bitmap).
pub const SNOWFLAKE_BITS: usize = 64;

// Literal JSON encodings that always decode to the zero snowflake.
pub const JSON_NULL: &[u8] = b"null";
pub const JSON_ZERO: &[u8] = b"0";
pub const JSON_ZERO_QUOTED: &[u8] = b"\"0\"";
