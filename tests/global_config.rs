//! Exercises the process-wide configuration.
//!
//! Everything lives in one test function: the globals are shared by every
//! test in this binary, and cargo runs tests on parallel threads.

use chrono::DateTime;
use discord_snowflake::{config, parse_json, Config, Snowflake, SnowflakeError, DISCORD_EPOCH};

const EXAMPLE: u64 = 175928847299117209;

#[test]
fn test_process_wide_configuration() {
    // Defaults
    assert_eq!(Config::global(), Config::default());
    assert_eq!(config::epoch(), DISCORD_EPOCH);
    assert!(config::allow_unquoted());

    let id = Snowflake::from_raw(EXAMPLE);
    assert_eq!(id.timestamp_millis(), 1462015105796);
    assert_eq!(id.timestamp_seconds(), 1462015105);
    assert_eq!(id.creation_time().timestamp_millis(), 1462015105796);
    assert_eq!(parse_json(b"175928847299117209"), Ok(id));

    let from_int: Snowflake = serde_json::from_str("175928847299117209").unwrap();
    assert_eq!(from_int, id);

    // Epoch is read at call time, not captured by the value
    config::set_epoch(0);
    assert_eq!(id.timestamp_millis(), EXAMPLE >> 22);
    assert_eq!(id.creation_time().timestamp_millis(), (EXAMPLE >> 22) as i64);

    let time = DateTime::from_timestamp_millis(0b1111).unwrap();
    assert_eq!(Snowflake::from_time(&time).raw(), 0b1111 << 22);
    assert_eq!(Snowflake::from(time).raw(), 0b1111 << 22);

    // Strict quoting
    config::set_allow_unquoted(false);
    assert!(matches!(
        parse_json(b"10"),
        Err(SnowflakeError::UnquotedInteger { .. })
    ));
    assert_eq!(parse_json(b"\"10\"").unwrap().raw(), 10);
    assert_eq!(parse_json(b"null").unwrap(), Snowflake::zero());
    assert_eq!(parse_json(b"0").unwrap(), Snowflake::zero());

    let mut target = id;
    assert!(target.update_from_json(b"10").is_err());
    assert_eq!(target, id);
    target.update_from_json(b"\"10\"").unwrap();
    assert_eq!(target.raw(), 10);

    let err = serde_json::from_str::<Snowflake>("175928847299117209").unwrap_err();
    assert!(err
        .to_string()
        .contains("unquoted integer but unquoted integers are not allowed"));
    let zero: Snowflake = serde_json::from_str("0").unwrap();
    assert_eq!(zero, Snowflake::zero());
    let quoted: Snowflake = serde_json::from_str("\"175928847299117209\"").unwrap();
    assert_eq!(quoted, id);

    let panicked = std::panic::catch_unwind(|| discord_snowflake::must_parse_json(b"10"));
    assert!(panicked.is_err());

    // Install and restore as a unit
    let custom = Config::new().with_epoch(1704067200000);
    custom.install();
    assert_eq!(Config::global(), custom);
    assert_eq!(parse_json(b"10").unwrap().raw(), 10);

    Config::default().install();
    assert_eq!(Config::global(), Config::default());
}
