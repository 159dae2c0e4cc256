use core::hash::Hash;

/// Bit layout of a snowflake-style ID.
///
/// Implementors supply the raw value and the width of each field; every mask,
/// shift and field accessor is derived from those widths. Fields are packed
/// from the least significant bit upwards as sequence, process ID, worker ID
/// and timestamp.
pub trait Layout:
    Copy + Clone + PartialOrd + Ord + PartialEq + Eq + Hash + std::fmt::Debug
{
    /// Packs the four fields into an ID. Each part is truncated to its width.
    fn from_component_parts(
        timestamp_offset: u64,
        worker_id: u64,
        process_id: u64,
        sequence: u64,
    ) -> Self;

    fn raw(&self) -> u64;

    /// Milliseconds since the layout's epoch. This is NOT a Unix timestamp.
    fn timestamp(&self) -> u64 {
        (self.raw() >> Self::timestamp_shift()) & Self::timestamp_mask()
    }

    fn timestamp_with_epoch(&self, epoch: u64) -> u64 {
        self.timestamp().wrapping_add(epoch)
    }

    fn worker_id(&self) -> u64 {
        (self.raw() >> Self::worker_id_shift()) & Self::worker_id_mask()
    }

    fn process_id(&self) -> u64 {
        (self.raw() >> Self::process_id_shift()) & Self::process_id_mask()
    }

    fn sequence(&self) -> u64 {
        self.raw() & Self::sequence_mask()
    }

    fn timestamp_mask() -> u64 {
        low_bits(Self::timestamp_bits())
    }

    fn worker_id_mask() -> u64 {
        low_bits(Self::worker_id_bits())
    }

    fn process_id_mask() -> u64 {
        low_bits(Self::process_id_bits())
    }

    fn sequence_mask() -> u64 {
        low_bits(Self::sequence_bits())
    }

    fn timestamp_bits() -> u64;
    fn worker_id_bits() -> u64;
    fn process_id_bits() -> u64;
    fn sequence_bits() -> u64;

    fn process_id_shift() -> u64 {
        Self::sequence_bits()
    }

    fn worker_id_shift() -> u64 {
        Self::process_id_shift() + Self::process_id_bits()
    }

    fn timestamp_shift() -> u64 {
        Self::worker_id_shift() + Self::worker_id_bits()
    }

    fn max_timestamp() -> u64 {
        Self::timestamp_mask()
    }

    fn max_worker_id() -> u64 {
        Self::worker_id_mask()
    }

    fn max_process_id() -> u64 {
        Self::process_id_mask()
    }

    fn max_sequence() -> u64 {
        Self::sequence_mask()
    }
}

fn low_bits(width: u64) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}
