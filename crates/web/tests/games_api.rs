//! Integration tests for the game endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_bytes, body_json, build_broken_app, build_test_app, get, send_json};
use serde_json::json;

#[tokio::test]
async fn list_games_on_empty_store_returns_empty_array() {
    let app = build_test_app().await;
    let response = get(app, "/api/games").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn create_and_fetch_game() {
    let app = build_test_app().await;
    let response = send_json(app.clone(), Method::POST, "/api/game", json!({ "name": "Chess" })).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, json!({ "id": 1, "name": "Chess" }));

    let response = get(app.clone(), "/api/game/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "id": 1, "name": "Chess" }));

    let response = get(app, "/api/games").await;
    assert_eq!(body_json(response).await, json!([{ "id": 1, "name": "Chess" }]));
}

#[tokio::test]
async fn blank_game_name_is_rejected() {
    let app = build_broken_app().await;

    for body in [json!({ "name": "" }), json!({ "name": null }), json!({})] {
        let response = send_json(app.clone(), Method::POST, "/api/game", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Game name can not be blank" })
        );
    }
}

#[tokio::test]
async fn insert_failure_is_a_client_error() {
    let app = build_broken_app().await;
    let response = send_json(app, Method::POST, "/api/game", json!({ "name": "Go" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Error while adding a game: "));
}

#[tokio::test]
async fn unknown_game_returns_no_content() {
    let app = build_test_app().await;
    let response = get(app, "/api/game/7").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn non_numeric_game_id_is_rejected() {
    let app = build_test_app().await;
    let response = get(app, "/api/game/1.5").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Error while attempting to convert game id: "));
}

#[tokio::test]
async fn lookup_failure_is_a_client_error() {
    let app = build_broken_app().await;
    let response = get(app, "/api/game/1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Error while looking up a game: "));
}

#[tokio::test]
async fn list_failure_is_a_server_error() {
    let app = build_broken_app().await;
    let response = get(app, "/api/games").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "An internal error occurred" })
    );
}
