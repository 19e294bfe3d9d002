use axum::http::StatusCode;
use fcs_db::models::Deck;
use serde_json::json;

use crate::common::{db, setup};

#[tokio::test]
async fn test_create_deck_with_cards() {
    let (_, client) = setup().await;
    let user_id = client.create_user("alice").await;

    let response = client
        .post_json(
            "/decks",
            &json!({
                "name": "Spanish",
                "description": "basics",
                "userId": user_id,
                "cards": [
                    { "front": "hola", "back": "hello" },
                    { "front": "adios", "back": "goodbye" }
                ]
            }),
        )
        .await;
    response.assert_status(StatusCode::CREATED);

    let deck: Deck = response.json();
    assert_eq!(deck.name, "Spanish");
    assert_eq!(deck.description.as_deref(), Some("basics"));
    assert_eq!(deck.user_id, user_id);
    assert_eq!(deck.cards.len(), 2);
    assert_eq!(deck.cards[0].front, "hola");
    assert_eq!(deck.cards[1].front, "adios");
    assert!(deck.cards.iter().all(|c| c.deck_id == deck.id));
}

#[tokio::test]
async fn test_create_deck_without_cards_or_description() {
    let (_, client) = setup().await;

    let body = client.create_deck("0", "Empty", json!([])).await;
    assert!(body.get("description").is_none());
    assert_eq!(body["cards"], json!([]));
}

#[tokio::test]
async fn test_create_deck_for_missing_user() {
    let (state, client) = setup().await;

    let response = client
        .post_json(
            "/decks",
            &json!({
                "name": "Orphan",
                "userId": "nobody",
                "cards": [{ "front": "a", "back": "b" }]
            }),
        )
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "user does not exist");

    assert_eq!(db::count_rows(state.store.pool(), "decks").await, 0);
    assert_eq!(db::count_rows(state.store.pool(), "cards").await, 0);
}

#[tokio::test]
async fn test_create_deck_with_one_invalid_card_writes_nothing() {
    let (state, client) = setup().await;
    let user_id = client.create_user("alice").await;

    let response = client
        .post_json(
            "/decks",
            &json!({
                "name": "Spanish",
                "userId": user_id,
                "cards": [
                    { "front": "hola", "back": "hello" },
                    { "front": "", "back": "blank" },
                    { "front": "gracias", "back": "thanks" }
                ]
            }),
        )
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "card front/back required");

    assert_eq!(db::count_rows(state.store.pool(), "decks").await, 0);
    assert_eq!(db::count_rows(state.store.pool(), "cards").await, 0);
}

#[tokio::test]
async fn test_create_deck_requires_name_and_user() {
    let (_, client) = setup().await;

    let response = client.post_json("/decks", &json!({ "userId": "0" })).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "name and userId required");

    let response = client.post_json("/decks", &json!({ "name": "Spanish" })).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_deck_includes_cards() {
    let (_, client) = setup().await;
    let created = client
        .create_deck("0", "French", json!([{ "front": "bonjour", "back": "hello" }]))
        .await;
    let deck_id = created["id"].as_str().unwrap();

    let response = client.get(&format!("/decks/{deck_id}")).await;
    response.assert_status(StatusCode::OK);

    let deck: Deck = response.json();
    assert_eq!(deck.cards.len(), 1);
    assert_eq!(deck.cards[0].back, "hello");
}

#[tokio::test]
async fn test_list_decks_with_name_filter() {
    let (_, client) = setup().await;
    client
        .create_deck("0", "Spanish verbs", json!([{ "front": "ser", "back": "to be" }]))
        .await;
    client.create_deck("0", "Spanish nouns", json!([])).await;
    client.create_deck("0", "German", json!([])).await;

    let all: Vec<Deck> = client.get("/decks").await.json();
    assert_eq!(all.len(), 3);

    let spanish: Vec<Deck> = client.get("/decks?name=Spanish").await.json();
    assert_eq!(spanish.len(), 2);
    assert_eq!(spanish[0].name, "Spanish verbs");
    assert_eq!(spanish[0].cards.len(), 1);
    assert!(spanish[1].cards.is_empty());
}

#[tokio::test]
async fn test_patch_deck_description_to_empty() {
    let (state, client) = setup().await;
    let created = client.create_deck("0", "Spanish", json!([])).await;
    let deck_id = created["id"].as_str().unwrap();

    let response = client
        .patch_json(&format!("/decks/{deck_id}"), &json!({ "description": "" }))
        .await;
    response.assert_status(StatusCode::OK);

    let deck: Deck = response.json();
    assert_eq!(deck.name, "Spanish");
    assert_eq!(deck.description.as_deref(), Some(""));
    assert_eq!(
        db::deck_description(state.store.pool(), deck_id).await.as_deref(),
        Some("")
    );
}

#[tokio::test]
async fn test_empty_deck_patch_is_rejected() {
    let (_, client) = setup().await;
    let created = client.create_deck("0", "Spanish", json!([])).await;
    let deck_id = created["id"].as_str().unwrap();

    let response = client
        .patch_json(&format!("/decks/{deck_id}"), &json!({}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "no fields to update");

    let deck: Deck = client.get(&format!("/decks/{deck_id}")).await.json();
    assert_eq!(deck.name, "Spanish");
    assert!(deck.description.is_none());
}

#[tokio::test]
async fn test_patch_missing_deck() {
    let (_, client) = setup().await;

    client
        .patch_json("/decks/missing", &json!({ "name": "x" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_deck_cascades_to_cards() {
    let (state, client) = setup().await;
    let created = client
        .create_deck("0", "Spanish", json!([{ "front": "hola", "back": "hello" }]))
        .await;
    let deck_id = created["id"].as_str().unwrap();
    let card_id = created["cards"][0]["id"].as_str().unwrap();

    client
        .delete(&format!("/decks/{deck_id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    client
        .get(&format!("/cards/{card_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(db::count_rows(state.store.pool(), "cards").await, 0);

    client
        .delete(&format!("/decks/{deck_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_undecodable_query_returns_json_error() {
    let (_, client) = setup().await;

    let response = client.get("/decks?name=a&name=b").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(
        response.headers["content-type"]
            .to_str()
            .unwrap()
            .starts_with("application/json")
    );
    assert_eq!(response.error(), "invalid query");
}
