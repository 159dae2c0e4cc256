//! Process-wide tunables and their explicit, per-call counterpart.
//!
//! Every operation that depends on the epoch or on quoting strictness comes in
//! two forms: one reading the process-wide values below, and a `*_with` /
//! `*_with_epoch` form taking them explicitly. The globals are atomics, so
//! reads are never torn, but nothing orders a configuration change against a
//! parse running on another thread. Set them once at start-up, or pass a
//! [`Config`] around instead.

use crate::defs::DISCORD_EPOCH;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

static EPOCH: AtomicU64 = AtomicU64::new(DISCORD_EPOCH);
static ALLOW_UNQUOTED: AtomicBool = AtomicBool::new(true);

/// Current process-wide epoch in milliseconds since the Unix epoch.
pub fn epoch() -> u64 {
    EPOCH.load(Ordering::Relaxed)
}

pub fn set_epoch(epoch: u64) {
    EPOCH.store(epoch, Ordering::Relaxed);
}

/// Whether bare JSON integers are currently accepted by
/// [`parse_json`](crate::parse_json).
pub fn allow_unquoted() -> bool {
    ALLOW_UNQUOTED.load(Ordering::Relaxed)
}

pub fn set_allow_unquoted(allow: bool) {
    ALLOW_UNQUOTED.store(allow, Ordering::Relaxed);
}

/// Epoch and quoting strictness as a plain value.
///
/// Deserializes with every field optional, so it can sit in an application's
/// own configuration file:
///
/// ```
/// use discord_snowflake::Config;
///
/// let config: Config = serde_json::from_str(r#"{"allow_unquoted": false}"#).unwrap();
/// assert_eq!(config, Config::default().with_allow_unquoted(false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Milliseconds since the Unix epoch that snowflake timestamps count from.
    pub epoch: u64,
    /// Accept JSON integers that are not wrapped in quotes.
    pub allow_unquoted: bool,
}

impl Config {
    pub const fn new() -> Self {
        Config {
            epoch: DISCORD_EPOCH,
            allow_unquoted: true,
        }
    }

    pub const fn with_epoch(self, epoch: u64) -> Self {
        Config { epoch, ..self }
    }

    pub const fn with_allow_unquoted(self, allow_unquoted: bool) -> Self {
        Config {
            allow_unquoted,
            ..self
        }
    }

    /// Snapshot of the process-wide values.
    pub fn global() -> Self {
        Config {
            epoch: epoch(),
            allow_unquoted: allow_unquoted(),
        }
    }

    /// Makes this configuration the process-wide one.
    pub fn install(self) {
        set_epoch(self.epoch);
        set_allow_unquoted(self.allow_unquoted);
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
