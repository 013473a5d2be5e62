//! Raw key-value operations.

use sqlx::SqlitePool;

use crate::models::KvEntry;
use crate::Result;

/// Create or replace the value stored under `key`.
pub async fn put_entry(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO kv_entries (key, value)
        VALUES (?, ?)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = datetime('now')
        "#,
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get an entry by key.
pub async fn get_entry(pool: &SqlitePool, key: &str) -> Result<Option<KvEntry>> {
    let record = sqlx::query_as::<_, KvEntry>(
        r#"
        SELECT key, value, updated_at
        FROM kv_entries
        WHERE key = ?
        "#,
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

/// Delete an entry. Returns whether a row was removed.
pub async fn delete_entry(pool: &SqlitePool, key: &str) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM kv_entries
        WHERE key = ?
        "#,
    )
    .bind(key)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete several entries in one transaction.
///
/// Either every key is removed or none is.
pub async fn delete_entries(pool: &SqlitePool, keys: &[&str]) -> Result<()> {
    let mut tx = pool.begin().await?;

    for key in keys {
        sqlx::query(
            r#"
            DELETE FROM kv_entries
            WHERE key = ?
            "#,
        )
        .bind(*key)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// List all stored keys in lexical order.
pub async fn list_keys(pool: &SqlitePool) -> Result<Vec<String>> {
    let keys = sqlx::query_scalar::<_, String>(
        r#"
        SELECT key
        FROM kv_entries
        ORDER BY key
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(keys)
}
