//! Decimal and JSON text forms of a snowflake.
//!
//! Input is lenient: a JSON snowflake may be `null`, a quoted decimal string,
//! or (when [`Config::allow_unquoted`] is set) a bare integer. Output is
//! always the quoted string, since most JSON consumers cannot hold a full
//! 64-bit integer without losing precision.

use crate::config::Config;
use crate::defs::{JSON_NULL, JSON_ZERO, JSON_ZERO_QUOTED};
use crate::error::{SnowflakeError, UnquoteError};
use crate::Snowflake;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// Parses an unsigned base-10 integer (digits only, no sign or whitespace).
///
/// ```
/// use discord_snowflake::{parse_str, SnowflakeError};
///
/// assert_eq!(parse_str("1000").unwrap().raw(), 1000);
/// assert!(matches!(parse_str("-1"), Err(SnowflakeError::IntegerParse { .. })));
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn parse_str(s: &str) -> Result<Snowflake, SnowflakeError> {
    let value = match s.as_bytes().first() {
        // u64::from_str takes an optional '+'; a lone sign reports InvalidDigit.
        Some(b'+') => s[..1].parse::<u64>()?,
        _ => s.parse::<u64>()?,
    };
    Ok(Snowflake::from_raw(value))
}

/// Like [`parse_str`], but panics on malformed input.
pub fn must_parse_str(s: &str) -> Snowflake {
    match parse_str(s) {
        Ok(snowflake) => snowflake,
        Err(err) => panic!("{err} (original error: {})", err.original_error()),
    }
}

/// Parses a JSON-encoded snowflake using the process-wide [`Config`].
pub fn parse_json(b: &[u8]) -> Result<Snowflake, SnowflakeError> {
    parse_json_with(b, &Config::global())
}

/// Parses a JSON-encoded snowflake.
///
/// `null`, `0` and `"0"` always decode to zero. Anything else is unwrapped
/// from its double quotes; a token that is not a plain quoted string is
/// rejected with [`SnowflakeError::UnquotedInteger`] unless
/// `config.allow_unquoted` is set, in which case its bytes are parsed as-is.
///
/// ```
/// use discord_snowflake::{parse_json_with, Config, SnowflakeError};
///
/// let strict = Config::default().with_allow_unquoted(false);
/// assert_eq!(parse_json_with(br#""10""#, &strict).unwrap().raw(), 10);
/// assert!(matches!(
///     parse_json_with(b"10", &strict),
///     Err(SnowflakeError::UnquotedInteger { .. })
/// ));
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn parse_json_with(b: &[u8], config: &Config) -> Result<Snowflake, SnowflakeError> {
    if b == JSON_NULL || b == JSON_ZERO || b == JSON_ZERO_QUOTED {
        return Ok(Snowflake::zero());
    }

    let digits = match unquote(b) {
        Ok(inner) => inner,
        Err(source) if !config.allow_unquoted => {
            #[cfg(feature = "tracing")]
            tracing::debug!(reason = %source, "rejected unquoted snowflake");
            return Err(SnowflakeError::UnquotedInteger { source });
        }
        Err(_) => b,
    };

    parse_str(&String::from_utf8_lossy(digits))
}

/// Like [`parse_json`], but panics on malformed input.
pub fn must_parse_json(b: &[u8]) -> Snowflake {
    match parse_json(b) {
        Ok(snowflake) => snowflake,
        Err(err) => panic!("{err} (original error: {})", err.original_error()),
    }
}

/// Encodes a snowflake as a quoted JSON string, e.g. `"175928847299117209"`.
pub fn to_json(snowflake: Snowflake) -> Vec<u8> {
    format!("\"{}\"", snowflake.raw()).into_bytes()
}

/// Strips one pair of double quotes. Escapes are not decoded; a string that
/// needs them cannot hold a decimal integer anyway. Other control bytes are
/// kept and left for the integer parser to reject.
fn unquote(b: &[u8]) -> Result<&[u8], UnquoteError> {
    let inner = match b {
        [b'"', inner @ .., b'"'] => inner,
        _ => return Err(UnquoteError::MissingQuotes),
    };

    for &byte in inner {
        match byte {
            b'"' => return Err(UnquoteError::EmbeddedQuote),
            b'\\' => return Err(UnquoteError::EscapeSequence),
            b'\n' => return Err(UnquoteError::Newline),
            _ => {}
        }
    }

    Ok(inner)
}
