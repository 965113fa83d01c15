// SQLite RecordStore Implementation

use crate::error::map_sqlx_error;
use crate::sql;
use async_trait::async_trait;
use rms_core::domain::{EntityDescriptor, KeyKind, RecordKey, RecordRow};
use rms_core::error::Result;
use rms_core::port::RecordStore;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite, SqlitePool};

type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

fn bind_key<'q>(query: SqliteQuery<'q>, key: &RecordKey) -> SqliteQuery<'q> {
    match key {
        RecordKey::Integer(n) => query.bind(*n),
        RecordKey::Text(s) => query.bind(s.clone()),
    }
}

/// Decode a row selected with `EntityDescriptor::columns()` order
fn decode_row(entity: &EntityDescriptor, row: &SqliteRow) -> Result<RecordRow> {
    let key = match entity.key_kind {
        KeyKind::Integer => RecordKey::Integer(row.try_get::<i64, _>(0).map_err(map_sqlx_error)?),
        KeyKind::Text => RecordKey::Text(row.try_get::<String, _>(0).map_err(map_sqlx_error)?),
    };

    let mut values = Vec::with_capacity(entity.fields.len());
    for idx in 1..=entity.fields.len() {
        let value: Option<String> = row.try_get(idx).map_err(map_sqlx_error)?;
        values.push(value.unwrap_or_default());
    }

    Ok(RecordRow { key, values })
}

/// RecordStore over one SQLite pool
///
/// The pool is the only shared state; sqlx hands each call its own
/// connection.
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn insert(
        &self,
        entity: &'static EntityDescriptor,
        row: &RecordRow,
        created_at: i64,
    ) -> Result<u64> {
        let statement = sql::insert(entity);

        let mut query = bind_key(sqlx::query(&statement), &row.key);
        for value in &row.values {
            query = query.bind(value.clone());
        }

        let result = query
            .bind(created_at)
            .bind(created_at)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn find_by_key(
        &self,
        entity: &'static EntityDescriptor,
        key: &RecordKey,
    ) -> Result<Option<RecordRow>> {
        let statement = sql::select_by_key(entity);

        let row = bind_key(sqlx::query(&statement), key)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(|r| decode_row(entity, &r)).transpose()
    }

    async fn list(&self, entity: &'static EntityDescriptor) -> Result<Vec<RecordRow>> {
        let statement = sql::select_all(entity);

        let rows = sqlx::query(&statement)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(|r| decode_row(entity, r)).collect()
    }

    async fn update(
        &self,
        entity: &'static EntityDescriptor,
        key: &RecordKey,
        changes: &[(&'static str, String)],
        updated_at: i64,
    ) -> Result<u64> {
        let columns: Vec<&str> = changes.iter().map(|(column, _)| *column).collect();
        let statement = sql::update(entity, &columns)?;

        let mut query = sqlx::query(&statement);
        for (_, value) in changes {
            query = query.bind(value.clone());
        }
        let query = bind_key(query.bind(updated_at), key);

        let result = query
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, entity: &'static EntityDescriptor, key: &RecordKey) -> Result<u64> {
        let statement = sql::delete(entity);

        let result = bind_key(sqlx::query(&statement), key)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn count(&self, entity: &'static EntityDescriptor) -> Result<i64> {
        let statement = sql::count(entity);

        let count: i64 = sqlx::query_scalar(&statement)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(count)
    }
}
