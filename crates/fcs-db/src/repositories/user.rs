use sqlx::{Executor, Sqlite};

use crate::models::User;

pub async fn insert<'e, E>(executor: E, id: &str, username: &str) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        // language=SQLite
        r#"
            INSERT INTO users (id, username)
            VALUES (?1, ?2)
        "#,
    )
    .bind(id)
    .bind(username)
    .execute(executor)
    .await?;
    Ok(())
}

/// Insert a user unless the id or username is already taken.
/// Returns whether a row was written.
pub async fn insert_if_absent<'e, E>(
    executor: E,
    id: &str,
    username: &str,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            INSERT OR IGNORE INTO users (id, username)
            VALUES (?1, ?2)
        "#,
    )
    .bind(id)
    .bind(username)
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// List users, optionally restricted to usernames matching a `LIKE` pattern.
pub async fn list<'e, E>(executor: E, pattern: Option<&str>) -> Result<Vec<User>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, username
            FROM users
            WHERE ?1 IS NULL OR username LIKE ?1 ESCAPE '\'
            ORDER BY rowid
        "#,
    )
    .bind(pattern)
    .fetch_all(executor)
    .await
}

pub async fn find_by_id<'e, E>(executor: E, user_id: &str) -> Result<Option<User>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, username
            FROM users
            WHERE id = ?1
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

/// Delete a user; its decks and their cards go with it through `ON DELETE CASCADE`.
pub async fn delete<'e, E>(executor: E, user_id: &str) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            DELETE FROM users WHERE id = ?1
        "#,
    )
    .bind(user_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
