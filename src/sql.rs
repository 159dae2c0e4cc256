//! `BIGINT` column mapping.
//!
//! SQL has no unsigned 64-bit integer, so a snowflake is stored as the `i64`
//! with the same bit pattern. IDs with the top bit set come back unchanged but
//! sort as negative numbers inside the database.

use crate::Snowflake;
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::{Database, Decode, Encode, Type};

impl<DB: Database> Type<DB> for Snowflake
where
    i64: Type<DB>,
{
    fn type_info() -> DB::TypeInfo {
        <i64 as Type<DB>>::type_info()
    }

    fn compatible(ty: &DB::TypeInfo) -> bool {
        <i64 as Type<DB>>::compatible(ty)
    }
}

impl<'q, DB: Database> Encode<'q, DB> for Snowflake
where
    i64: Encode<'q, DB>,
{
    fn encode_by_ref(
        &self,
        buf: &mut <DB as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        <i64 as Encode<'q, DB>>::encode_by_ref(&(self.raw() as i64), buf)
    }
}

impl<'r, DB: Database> Decode<'r, DB> for Snowflake
where
    i64: Decode<'r, DB>,
{
    fn decode(value: <DB as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        let raw = <i64 as Decode<'r, DB>>::decode(value)?;
        Ok(Snowflake::from_raw(raw as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::{Connection, SqliteConnection};

    async fn memory_table() -> SqliteConnection {
        let mut conn = SqliteConnection::connect("sqlite::memory:").await.unwrap();
        sqlx::query("CREATE TABLE ids (id BIGINT NOT NULL)")
            .execute(&mut conn)
            .await
            .unwrap();
        conn
    }

    #[tokio::test]
    async fn test_bigint_round_trip() {
        let mut conn = memory_table().await;

        for raw in [u64::MAX, 1 << 63, 175928847299117209, 0] {
            let id = Snowflake::from_raw(raw);
            sqlx::query("DELETE FROM ids").execute(&mut conn).await.unwrap();
            sqlx::query("INSERT INTO ids (id) VALUES (?)")
                .bind(id)
                .execute(&mut conn)
                .await
                .unwrap();

            let back: Snowflake = sqlx::query_scalar("SELECT id FROM ids")
                .fetch_one(&mut conn)
                .await
                .unwrap();
            assert_eq!(back, id);
            assert_eq!(back.raw(), raw);
        }
    }

    #[tokio::test]
    async fn test_top_bit_is_negative_in_database() {
        let mut conn = memory_table().await;
        sqlx::query("INSERT INTO ids (id) VALUES (?)")
            .bind(Snowflake::from_raw(1 << 63))
            .execute(&mut conn)
            .await
            .unwrap();

        let stored: i64 = sqlx::query_scalar("SELECT id FROM ids")
            .fetch_one(&mut conn)
            .await
            .unwrap();
        assert_eq!(stored, i64::MIN);
    }
}
