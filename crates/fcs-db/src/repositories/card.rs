use sqlx::{Executor, Sqlite};

use crate::models::{Card, CardPatch};

pub async fn insert<'e, E>(
    executor: E,
    card_id: &str,
    deck_id: &str,
    front: &str,
    back: &str,
) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        // language=SQLite
        r#"
            INSERT INTO cards (id, deck_id, front, back)
            VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(card_id)
    .bind(deck_id)
    .bind(front)
    .bind(back)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn find_by_id<'e, E>(executor: E, card_id: &str) -> Result<Option<Card>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, front, back, deck_id
            FROM cards
            WHERE id = ?1
        "#,
    )
    .bind(card_id)
    .fetch_optional(executor)
    .await
}

/// Cards of one deck in insertion order.
pub async fn list_by_deck<'e, E>(executor: E, deck_id: &str) -> Result<Vec<Card>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT id, front, back, deck_id
            FROM cards
            WHERE deck_id = ?1
            ORDER BY rowid
        "#,
    )
    .bind(deck_id)
    .fetch_all(executor)
    .await
}

/// Cards of every deck whose name matches `pattern` (all decks when `None`),
/// in insertion order. Lets a deck listing hydrate in one round trip.
pub async fn list_by_deck_name<'e, E>(
    executor: E,
    pattern: Option<&str>,
) -> Result<Vec<Card>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as(
        // language=SQLite
        r#"
            SELECT c.id, c.front, c.back, c.deck_id
            FROM cards c
            JOIN decks d ON d.id = c.deck_id
            WHERE ?1 IS NULL OR d.name LIKE ?1 ESCAPE '\'
            ORDER BY c.rowid
        "#,
    )
    .bind(pattern)
    .fetch_all(executor)
    .await
}

/// Apply the supplied fields of `patch`; absent fields keep their stored value.
/// Returns the number of matched rows (0 when the card does not exist).
pub async fn update<'e, E>(executor: E, card_id: &str, patch: &CardPatch) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            UPDATE cards
            SET front = COALESCE(?1, front),
                back = COALESCE(?2, back)
            WHERE id = ?3
        "#,
    )
    .bind(patch.front.as_deref())
    .bind(patch.back.as_deref())
    .bind(card_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete<'e, E>(executor: E, card_id: &str) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        // language=SQLite
        r#"
            DELETE FROM cards WHERE id = ?1
        "#,
    )
    .bind(card_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
