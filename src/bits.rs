use crate::defs::SNOWFLAKE_BITS;
use std::fmt;
use std::ops::Index;

/// One bit of a snowflake: `true` for 1, `false` for 0.
pub type Bit = bool;

/// All 64 bits of a snowflake, index 0 being the least significant bit.
///
/// A `Bitmap` is a snapshot produced by [`Snowflake::bitmap`](crate::Snowflake::bitmap);
/// it does not alias the value it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitmap([Bit; SNOWFLAKE_BITS]);

impl Bitmap {
    pub(crate) fn from_raw(value: u64) -> Self {
        let mut bits = [false; SNOWFLAKE_BITS];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = value & (1 << i) != 0;
        }
        Bitmap(bits)
    }

    /// Returns the bit at `index`, or `None` past the last bit.
    pub fn get(&self, index: usize) -> Option<Bit> {
        self.0.get(index).copied()
    }

    pub fn as_array(&self) -> &[Bit; SNOWFLAKE_BITS] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.0.iter().copied()
    }

    pub fn count_ones(&self) -> u32 {
        self.0.iter().filter(|bit| **bit).count() as u32
    }

    pub fn len(&self) -> usize {
        SNOWFLAKE_BITS
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Index<usize> for Bitmap {
    type Output = Bit;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Bitmap {
    type Item = Bit;
    type IntoIter = std::array::IntoIter<Bit, SNOWFLAKE_BITS>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Bitmap> for [Bit; SNOWFLAKE_BITS] {
    fn from(bitmap: Bitmap) -> Self {
        bitmap.0
    }
}

/// Renders the bits most significant first, matching `{:064b}` of the value.
impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.0.iter().rev() {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_orders_lsb_first() {
        let bitmap = Bitmap::from_raw(0b1011);

        assert!(bitmap[0]);
        assert!(bitmap[1]);
        assert!(!bitmap[2]);
        assert!(bitmap[3]);
        assert_eq!(bitmap.count_ones(), 3);
    }

    #[test]
    fn test_get_out_of_range() {
        let bitmap = Bitmap::from_raw(u64::MAX);

        assert_eq!(bitmap.get(63), Some(true));
        assert_eq!(bitmap.get(64), None);
        assert_eq!(bitmap.len(), 64);
    }

    #[test]
    fn test_display_matches_binary_format() {
        let value = 175928847299117209u64;
        let bitmap = Bitmap::from_raw(value);

        assert_eq!(bitmap.to_string(), format!("{:064b}", value));
    }

    #[test]
    fn test_into_iter_yields_every_bit() {
        let bits: Vec<Bit> = Bitmap::from_raw(1 << 63).into_iter().collect();

        assert_eq!(bits.len(), 64);
        assert!(bits[63]);
        assert!(bits[..63].iter().all(|bit| !bit));
    }
}
