//! Store - the flashcard repository operations.
//!
//! Wraps the connection pool and exposes one method per entity operation. Raw
//! SQL lives in [`crate::repositories`]; this layer adds existence checks, the
//! deck creation transaction, and translation of driver errors into
//! [`StoreError`].

use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::{
    StoreError,
    models::{Card, CardPatch, Deck, DeckPatch, NewCard, NewDeck, User},
    new_id,
    repositories::{self, card as card_repo, deck as deck_repo, user as user_repo},
};

/// Handle to the flashcard database, cheap to clone.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database at `database_url`, migrate it and seed the
    /// initial user.
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = crate::create_pool(database_url, max_connections).await?;
        crate::migrate_and_seed(&pool).await?;
        Ok(Self::new(pool))
    }

    /// A migrated and seeded store on a private in-memory database.
    pub async fn in_memory() -> anyhow::Result<Self> {
        let pool = crate::create_in_memory_pool().await?;
        crate::migrate_and_seed(&pool).await?;
        Ok(Self::new(pool))
    }

    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check that the database answers a trivial query.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    // Users

    pub async fn create_user(&self, username: &str) -> Result<User, StoreError> {
        let id = new_id();
        user_repo::insert(&self.pool, &id, username)
            .await
            .map_err(|e| {
                StoreError::from_insert(e, "username already exists", "invalid user reference")
            })?;

        tracing::debug!(user_id = %id, "created user");
        Ok(User {
            id,
            username: username.to_string(),
        })
    }

    pub async fn list_users(&self, username_filter: Option<&str>) -> Result<Vec<User>, StoreError> {
        let pattern = repositories::contains_pattern(username_filter);
        Ok(user_repo::list(&self.pool, pattern.as_deref()).await?)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User, StoreError> {
        user_repo::find_by_id(&self.pool, user_id)
            .await?
            .ok_or(StoreError::not_found("user"))
    }

    /// Delete a user together with all of its decks and their cards.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), StoreError> {
        let deleted = user_repo::delete(&self.pool, user_id).await?;
        if deleted == 0 {
            return Err(StoreError::not_found("user"));
        }
        tracing::debug!(user_id, "deleted user");
        Ok(())
    }

    // Decks

    /// Create a deck and its initial cards as one atomic unit.
    ///
    /// Any failure rolls the whole transaction back, so neither the deck nor any
    /// of its cards become visible. The first statement is the deck insert, so
    /// the transaction takes the write lock before reading anything and
    /// concurrent creators wait on the busy timeout instead of failing. A
    /// missing user surfaces as the deck's foreign key violation.
    pub async fn create_deck(&self, new_deck: &NewDeck) -> Result<Deck, StoreError> {
        let mut tx = self.pool.begin().await?;

        let deck_id = new_id();
        deck_repo::insert(
            &mut *tx,
            &deck_id,
            &new_deck.name,
            new_deck.description.as_deref(),
            &new_deck.user_id,
        )
        .await
        .map_err(|e| StoreError::from_insert(e, "deck already exists", "user does not exist"))?;

        for sides in &new_deck.cards {
            card_repo::insert(&mut *tx, &new_id(), &deck_id, &sides.front, &sides.back)
                .await
                .map_err(|e| {
                    StoreError::from_insert(e, "card already exists", "deck does not exist")
                })?;
        }

        tx.commit().await?;
        tracing::debug!(
            deck_id = %deck_id,
            cards = new_deck.cards.len(),
            "created deck"
        );

        self.get_deck(&deck_id).await
    }

    /// Every deck whose name contains `name_filter` (all decks when `None`),
    /// hydrated with its cards.
    pub async fn list_decks(&self, name_filter: Option<&str>) -> Result<Vec<Deck>, StoreError> {
        let pattern = repositories::contains_pattern(name_filter);
        let rows = deck_repo::list(&self.pool, pattern.as_deref()).await?;
        let cards = card_repo::list_by_deck_name(&self.pool, pattern.as_deref()).await?;

        let mut cards_by_deck: HashMap<String, Vec<Card>> = HashMap::new();
        for card in cards {
            cards_by_deck
                .entry(card.deck_id.clone())
                .or_default()
                .push(card);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let cards = cards_by_deck.remove(&row.id).unwrap_or_default();
                Deck::from_row(row, cards)
            })
            .collect())
    }

    pub async fn get_deck(&self, deck_id: &str) -> Result<Deck, StoreError> {
        let row = deck_repo::find_by_id(&self.pool, deck_id)
            .await?
            .ok_or(StoreError::not_found("deck"))?;
        let cards = card_repo::list_by_deck(&self.pool, deck_id).await?;
        Ok(Deck::from_row(row, cards))
    }

    pub async fn patch_deck(&self, deck_id: &str, patch: &DeckPatch) -> Result<Deck, StoreError> {
        let updated = deck_repo::update(&self.pool, deck_id, patch).await?;
        if updated == 0 {
            return Err(StoreError::not_found("deck"));
        }
        self.get_deck(deck_id).await
    }

    /// Delete a deck together with its cards.
    pub async fn delete_deck(&self, deck_id: &str) -> Result<(), StoreError> {
        let deleted = deck_repo::delete(&self.pool, deck_id).await?;
        if deleted == 0 {
            return Err(StoreError::not_found("deck"));
        }
        tracing::debug!(deck_id, "deleted deck");
        Ok(())
    }

    // Cards

    pub async fn create_card(&self, new_card: &NewCard) -> Result<Card, StoreError> {
        if !deck_repo::exists(&self.pool, &new_card.deck_id).await? {
            return Err(StoreError::InvalidReference(
                "deck does not exist".to_string(),
            ));
        }

        let id = new_id();
        card_repo::insert(
            &self.pool,
            &id,
            &new_card.deck_id,
            &new_card.front,
            &new_card.back,
        )
        .await
        // The deck can vanish between the check and the insert
        .map_err(|e| StoreError::from_insert(e, "card already exists", "deck does not exist"))?;

        Ok(Card {
            id,
            front: new_card.front.clone(),
            back: new_card.back.clone(),
            deck_id: new_card.deck_id.clone(),
        })
    }

    pub async fn get_card(&self, card_id: &str) -> Result<Card, StoreError> {
        card_repo::find_by_id(&self.pool, card_id)
            .await?
            .ok_or(StoreError::not_found("card"))
    }

    pub async fn patch_card(&self, card_id: &str, patch: &CardPatch) -> Result<Card, StoreError> {
        let updated = card_repo::update(&self.pool, card_id, patch).await?;
        if updated == 0 {
            return Err(StoreError::not_found("card"));
        }
        self.get_card(card_id).await
    }

    pub async fn delete_card(&self, card_id: &str) -> Result<(), StoreError> {
        let deleted = card_repo::delete(&self.pool, card_id).await?;
        if deleted == 0 {
            return Err(StoreError::not_found("card"));
        }
        Ok(())
    }
}
