//! Serde entry points with an explicit [`Config`].
//!
//! The `Deserialize` impl on [`Snowflake`] reads the process-wide
//! `allow_unquoted` flag. Use [`SnowflakeSeed`], [`deserialize_with_config`]
//! or the `#[serde(with = "...")]` modules below to pick the strictness per
//! call or per field instead.
//!
//! ```
//! use discord_snowflake::serde_helpers::as_strict_snow;
//! use discord_snowflake::Snowflake;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Message {
//!     #[serde(with = "as_strict_snow")]
//!     id: Snowflake,
//! }
//!
//! assert!(serde_json::from_str::<Message>(r#"{"id":"10"}"#).is_ok());
//! assert!(serde_json::from_str::<Message>(r#"{"id":10}"#).is_err());
//! ```

use crate::{parse_str, Config, Snowflake, SnowflakeError, UnquoteError};
use serde::de::{self, DeserializeSeed, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Accepts a decimal string, an integer or null. Bare non-zero integers are
/// rejected unless `allow_unquoted` is set.
pub(crate) struct SnowflakeVisitor {
    pub(crate) allow_unquoted: bool,
}

impl<'de> Visitor<'de> for SnowflakeVisitor {
    type Value = Snowflake;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or integer representing a snowflake id")
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if value != 0 && !self.allow_unquoted {
            return Err(E::custom(SnowflakeError::UnquotedInteger {
                source: UnquoteError::MissingQuotes,
            }));
        }
        Ok(Snowflake::from_raw(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if value >= 0 {
            return self.visit_u64(value as u64);
        }
        parse_str(&value.to_string()).map_err(E::custom)
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse_str(value).map_err(E::custom)
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.visit_str(&value)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Snowflake::zero())
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Snowflake::zero())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

/// Deserializes a snowflake using `config.allow_unquoted` instead of the
/// global flag. Compact formats carry a plain `u64` and ignore it.
///
/// # Errors
///
/// Returns an error if the underlying deserializer fails, the string is not
/// a decimal `u64`, or a bare integer arrives while unquoted input is
/// disallowed.
pub fn deserialize_with_config<'de, D>(d: D, config: &Config) -> Result<Snowflake, D::Error>
where
    D: Deserializer<'de>,
{
    if d.is_human_readable() {
        d.deserialize_any(SnowflakeVisitor {
            allow_unquoted: config.allow_unquoted,
        })
    } else {
        u64::deserialize(d).map(Snowflake::from_raw)
    }
}

/// A [`DeserializeSeed`] carrying the [`Config`] to deserialize with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeSeed(pub Config);

impl<'de> DeserializeSeed<'de> for SnowflakeSeed {
    type Value = Snowflake;

    fn deserialize<D>(self, d: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_with_config(d, &self.0)
    }
}

/// Field helper that always rejects bare non-zero integers.
pub mod as_strict_snow {
    use super::deserialize_with_config;
    use crate::{Config, Snowflake};
    use serde::{Deserializer, Serialize, Serializer};

    pub fn serialize<S>(id: &Snowflake, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Snowflake, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_with_config(d, &Config::new().with_allow_unquoted(false))
    }
}

/// Field helper that always accepts bare integers.
pub mod as_lenient_snow {
    use super::deserialize_with_config;
    use crate::{Config, Snowflake};
    use serde::{Deserializer, Serialize, Serializer};

    pub fn serialize<S>(id: &Snowflake, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Snowflake, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_with_config(d, &Config::new().with_allow_unquoted(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    fn strict() -> Config {
        Config::new().with_allow_unquoted(false)
    }

    fn lenient() -> Config {
        Config::new().with_allow_unquoted(true)
    }

    fn seeded(seed: SnowflakeSeed, json: &str) -> Result<Snowflake, serde_json::Error> {
        let mut de = serde_json::Deserializer::from_str(json);
        seed.deserialize(&mut de)
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Record {
        #[serde(with = "as_strict_snow")]
        strict: Snowflake,
        #[serde(with = "as_lenient_snow")]
        lenient: Snowflake,
    }

    #[test]
    fn test_seed_uses_its_own_config() {
        let err = seeded(SnowflakeSeed(strict()), "10").unwrap_err();
        assert!(err
            .to_string()
            .contains("unquoted integer but unquoted integers are not allowed"));

        assert_eq!(seeded(SnowflakeSeed(lenient()), "10").unwrap().raw(), 10);
        assert_eq!(seeded(SnowflakeSeed(strict()), "\"10\"").unwrap().raw(), 10);
        assert_eq!(seeded(SnowflakeSeed(strict()), "0").unwrap(), Snowflake::zero());
        assert_eq!(seeded(SnowflakeSeed(strict()), "null").unwrap(), Snowflake::zero());
    }

    #[test]
    fn test_deserialize_with_config() {
        let mut de = serde_json::Deserializer::from_str("175928847299117209");
        assert!(deserialize_with_config(&mut de, &strict()).is_err());

        let mut de = serde_json::Deserializer::from_str("175928847299117209");
        assert_eq!(
            deserialize_with_config(&mut de, &lenient()).unwrap().raw(),
            175928847299117209
        );

        let mut de = serde_json::Deserializer::from_str("\"abc\"");
        assert!(deserialize_with_config(&mut de, &lenient()).is_err());
    }

    #[test]
    fn test_field_helpers() {
        let record: Record = serde_json::from_str(r#"{"strict":"10","lenient":11}"#).unwrap();
        assert_eq!(record.strict.raw(), 10);
        assert_eq!(record.lenient.raw(), 11);

        // The global flag is lenient by default, the field still refuses.
        assert!(serde_json::from_str::<Record>(r#"{"strict":10,"lenient":11}"#).is_err());

        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"strict":"10","lenient":"11"}"#
        );
    }
}
