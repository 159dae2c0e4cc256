//! Discord-style 64-bit snowflake IDs.
//!
//! A [`Snowflake`] packs four fields into one `u64`, least significant bit
//! first:
//!
//! ```text
//!  64                                          22     17     12             0
//!   [000000100111000100000110010110101100000100][00001][00000][000010011001]
//!              timestamp (ms since epoch)        worker process   sequence
//! ```
//!
//! This crate decodes and encodes such values; it does not generate them.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub mod bits;
pub mod codec;
pub mod config;
pub mod defs;
pub mod error;
pub mod layout;
pub mod serde_helpers;

#[cfg(feature = "sqlx")]
mod sql;

pub use bits::{Bit, Bitmap};
pub use codec::{
    must_parse_json, must_parse_str, parse_json, parse_json_with, parse_str, to_json,
};
pub use config::Config;
pub use defs::*;
pub use error::{SnowflakeError, UnquoteError};
pub use layout::Layout;

/// A 64-bit snowflake ID.
///
/// Field accessors are pure functions of the stored integer. Timestamp
/// accessors read the process-wide epoch at call time (see [`config`]); each
/// has a `*_with_epoch` form taking the epoch explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snowflake(u64);

// ---------------------------------------------------------------------------
// Layout trait implementation
// ---------------------------------------------------------------------------

impl Layout for Snowflake {
    fn from_component_parts(
        timestamp_offset: u64,
        worker_id: u64,
        process_id: u64,
        sequence: u64,
    ) -> Self {
        let id = ((timestamp_offset & Self::timestamp_mask()) << Self::timestamp_shift())
            | ((worker_id & Self::worker_id_mask()) << Self::worker_id_shift())
            | ((process_id & Self::process_id_mask()) << Self::process_id_shift())
            | (sequence & Self::sequence_mask());
        Snowflake(id)
    }

    fn raw(&self) -> u64 {
        self.0
    }

    fn timestamp_bits() -> u64 {
        TIMESTAMP_BITS
    }

    fn worker_id_bits() -> u64 {
        WORKER_ID_BITS
    }

    fn process_id_bits() -> u64 {
        PROCESS_ID_BITS
    }

    fn sequence_bits() -> u64 {
        SEQUENCE_BITS
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Snowflake {
    /// The empty snowflake: every field zero.
    pub const fn zero() -> Self {
        Snowflake(0)
    }

    pub const fn from_raw(value: u64) -> Self {
        Snowflake(value)
    }

    /// Builds a snowflake from its fields. Each part is truncated to its width.
    pub fn from_parts(
        timestamp_offset: u64,
        worker_id: u8,
        process_id: u8,
        sequence: u16,
    ) -> Self {
        <Self as Layout>::from_component_parts(
            timestamp_offset,
            worker_id as u64,
            process_id as u64,
            sequence as u64,
        )
    }

    /// Snowflake whose timestamp is `time`, under the process-wide epoch.
    /// Worker ID, process ID and sequence are zero.
    pub fn from_time<Tz: TimeZone>(time: &DateTime<Tz>) -> Self {
        Self::from_time_with_epoch(time, config::epoch())
    }

    /// Like [`from_time`](Self::from_time) with an explicit epoch.
    ///
    /// Times before `epoch` are not an error: the negative offset is shifted
    /// and kept as its two's complement bit pattern.
    pub fn from_time_with_epoch<Tz: TimeZone>(time: &DateTime<Tz>, epoch: u64) -> Self {
        let offset = time.timestamp_millis().wrapping_sub(epoch as i64);
        Snowflake((offset << TIMESTAMP_SHIFT) as u64)
    }

    /// Replaces this value with the snowflake decoded from `b`, using the
    /// process-wide [`Config`]. On error the value is left untouched.
    ///
    /// ```
    /// use discord_snowflake::Snowflake;
    ///
    /// let mut id = Snowflake::zero();
    /// id.update_from_json(br#""1363292549053284505""#).unwrap();
    /// assert_eq!(id.raw(), 1363292549053284505);
    ///
    /// assert!(id.update_from_json(b"not-a-number").is_err());
    /// assert_eq!(id.raw(), 1363292549053284505);
    /// ```
    pub fn update_from_json(&mut self, b: &[u8]) -> Result<(), SnowflakeError> {
        self.update_from_json_with(b, &Config::global())
    }

    pub fn update_from_json_with(
        &mut self,
        b: &[u8],
        config: &Config,
    ) -> Result<(), SnowflakeError> {
        *self = parse_json_with(b, config)?;
        Ok(())
    }

    /// Quoted JSON string form, e.g. `"175928847299117209"`.
    pub fn to_json(self) -> Vec<u8> {
        codec::to_json(self)
    }
}

// ---------------------------------------------------------------------------
// Inherent accessors (narrowed to each field's width)
// ---------------------------------------------------------------------------

impl Snowflake {
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Milliseconds since the configured epoch, as stored in the top 42 bits.
    /// This is NOT a Unix timestamp; see [`timestamp_millis`](Self::timestamp_millis).
    pub fn timestamp(&self) -> u64 {
        <Self as Layout>::timestamp(self)
    }

    /// Creation time in milliseconds since the Unix epoch:
    /// `(snowflake >> 22) + epoch`, wrapping on overflow.
    pub fn timestamp_millis(&self) -> u64 {
        self.timestamp_millis_with_epoch(config::epoch())
    }

    pub fn timestamp_millis_with_epoch(&self, epoch: u64) -> u64 {
        <Self as Layout>::timestamp_with_epoch(self, epoch)
    }

    /// Creation time in whole seconds since the Unix epoch.
    pub fn timestamp_seconds(&self) -> u64 {
        self.timestamp_seconds_with_epoch(config::epoch())
    }

    pub fn timestamp_seconds_with_epoch(&self, epoch: u64) -> u64 {
        self.timestamp_millis_with_epoch(epoch) / 1_000
    }

    /// Creation date and time.
    ///
    /// ```
    /// use chrono::Datelike;
    /// use discord_snowflake::{Snowflake, DISCORD_EPOCH};
    ///
    /// let id = Snowflake::from_raw(1363292549053284505);
    /// let created = id.creation_time_with_epoch(DISCORD_EPOCH);
    /// assert_eq!((created.year(), created.month()), (2025, 4));
    /// ```
    pub fn creation_time(&self) -> DateTime<Utc> {
        self.creation_time_with_epoch(config::epoch())
    }

    /// Like [`creation_time`](Self::creation_time) with an explicit epoch.
    ///
    /// The millisecond count is taken as signed. Values beyond what
    /// `DateTime<Utc>` can represent clamp to its minimum or maximum.
    pub fn creation_time_with_epoch(&self, epoch: u64) -> DateTime<Utc> {
        let millis = (self.timestamp() as i64).wrapping_add(epoch as i64);
        DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or(if millis < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
    }

    pub fn worker_id(&self) -> u8 {
        ((self.0 & WORKER_ID_MASK) >> WORKER_ID_SHIFT) as u8
    }

    pub fn process_id(&self) -> u8 {
        ((self.0 & PROCESS_ID_MASK) >> PROCESS_ID_SHIFT) as u8
    }

    /// Per-process counter (incremented for every ID the process generates).
    pub fn sequence(&self) -> u16 {
        (self.0 & SEQUENCE_MASK) as u16
    }

    /// Bit `index`, counting from the least significant bit. Indices 64 and
    /// above are out of range and always read as `false`.
    pub const fn bit(&self, index: u8) -> Bit {
        index < 64 && self.0 & (1 << index) != 0
    }

    pub fn bitmap(&self) -> Bitmap {
        Bitmap::from_raw(self.0)
    }
}

// ---------------------------------------------------------------------------
// FromStr
// ---------------------------------------------------------------------------

impl FromStr for Snowflake {
    type Err = SnowflakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}

// ---------------------------------------------------------------------------
// Display, From, Serde
// ---------------------------------------------------------------------------

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Binary for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl From<u64> for Snowflake {
    fn from(value: u64) -> Self {
        Snowflake(value)
    }
}

impl From<Snowflake> for u64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl From<DateTime<Utc>> for Snowflake {
    fn from(time: DateTime<Utc>) -> Self {
        Snowflake::from_time(&time)
    }
}

impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.0.to_string())
        } else {
            serializer.serialize_u64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    /// Bare integers are checked against the global `allow_unquoted` flag.
    /// See [`serde_helpers`] to choose per call or per field.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_helpers::deserialize_with_config(deserializer, &Config::global())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
