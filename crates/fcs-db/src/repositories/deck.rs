use sqlx::{Executor, Sqlite};

use crate::models::{DeckPatch, DeckRow};

pub async fn insert<'e, E>(
    executor: E,
    deck_id: &str,
    name: &str,
    description: Option<&str>,
    user_id: &str,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        // language=SQLite
        r#"
            INSERT INTO decks (id, name, description, user_id)
            VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(deck_id)
    .bind(name)
    .bind(description)
    .bind(user_id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn find_by_id<'e, E>(executor: E, deck_id: &str) -> Result<Option<DeckRow>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, name, description, user_id
            FROM decks
            WHERE id = ?1
        "#,
    )
    .bind(deck_id)
    .fetch_optional(executor)
    .await
}

/// List deck rows, optionally restricted to names matching a `LIKE` pattern.
pub async fn list<'e, E>(executor: E, pattern: Option<&str>) -> Result<Vec<DeckRow>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, name, description, user_id
            FROM decks
            WHERE ?1 IS NULL OR name LIKE ?1 ESCAPE '\'
            ORDER BY rowid
        "#,
    )
    .bind(pattern)
    .fetch_all(executor)
    .await
}

pub async fn exists<'e, E>(executor: E, deck_id: &str) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_scalar(
        // language=SQLite
        r#"
            SELECT EXISTS(SELECT 1 FROM decks WHERE id = ?1)
        "#,
    )
    .bind(deck_id)
    .fetch_one(executor)
    .await
}

/// Apply the supplied fields of `patch`; absent fields keep their stored value.
/// Returns the number of matched rows (0 when the deck does not exist).
pub async fn update<'e, E>(executor: E, deck_id: &str, patch: &DeckPatch) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            UPDATE decks
            SET name = COALESCE(?1, name),
                description = COALESCE(?2, description)
            WHERE id = ?3
        "#,
    )
    .bind(patch.name.as_deref())
    .bind(patch.description.as_deref())
    .bind(deck_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

/// Delete a deck; its cards go with it through `ON DELETE CASCADE`.
pub async fn delete<'e, E>(executor: E, deck_id: &str) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            DELETE FROM decks WHERE id = ?1
        "#,
    )
    .bind(deck_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
