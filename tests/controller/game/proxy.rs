use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use gamestats::{
    controller::game::{game_info, game_token, GameInfoQuery, GameTokenDto},
    error::Error,
};
use mockito::Matcher;

use crate::util::setup::{body_json, fresh_session, register_user, test_setup, TEST_CLIENT_ID};

#[tokio::test]
/// Expect the lite token exchange to relay the gateway's body untouched
async fn relays_lite_token_response() -> Result<(), Error> {
    let mut test = test_setup().await;
    register_user(&test.state, &test.session, "alice").await?;

    let mock = test
        .server
        .mock("POST", "/tgs/gateway2/character/litetoken")
        .match_query(Matcher::UrlEncoded(
            "client_id".into(),
            TEST_CLIENT_ID.into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"lite_token":"tok-123","expires_in":300}"#)
        .create_async()
        .await;

    let result = game_token(
        State(test.state.clone()),
        HeaderMap::new(),
        test.session.clone(),
        Ok(Json(GameTokenDto {
            encoded_payload: "eyJjaWQiOjF9".to_string(),
            sign: "deadbeef".to_string(),
        })),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["lite_token"], "tok-123");

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
/// Expect the character info fetch to pass both query parameters along
async fn relays_character_info_response() -> Result<(), Error> {
    let mut test = test_setup().await;
    register_user(&test.state, &test.session, "alice").await?;

    let mock = test
        .server
        .mock("GET", "/tgs/gateway2/oap/character/info")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("lite_token".into(), "tok-123".into()),
            Matcher::UrlEncoded("client_id".into(), TEST_CLIENT_ID.into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"nickname":"Alice","power":1000}"#)
        .create_async()
        .await;

    let result = game_info(
        State(test.state.clone()),
        HeaderMap::new(),
        test.session.clone(),
        Query(GameInfoQuery {
            lite_token: "tok-123".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["nickname"], "Alice");

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
/// Expect an upstream error status and body to pass through unchanged
async fn passes_upstream_error_through() -> Result<(), Error> {
    let mut test = test_setup().await;
    register_user(&test.state, &test.session, "alice").await?;

    test.server
        .mock("POST", "/tgs/gateway2/character/litetoken")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"error":"signature mismatch"}"#)
        .create_async()
        .await;

    let result = game_token(
        State(test.state.clone()),
        HeaderMap::new(),
        test.session.clone(),
        Ok(Json(GameTokenDto {
            encoded_payload: "eyJjaWQiOjF9".to_string(),
            sign: "bad".to_string(),
        })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "signature mismatch");

    Ok(())
}

#[tokio::test]
/// Expect 401 before any gateway call is made
async fn returns_unauthorized_without_credentials() -> Result<(), Error> {
    let test = test_setup().await;

    // No mock is registered; an unauthorized request must not reach the
    // gateway at all.
    let result = game_token(
        State(test.state.clone()),
        HeaderMap::new(),
        fresh_session(),
        Ok(Json(GameTokenDto {
            encoded_payload: "eyJjaWQiOjF9".to_string(),
            sign: "deadbeef".to_string(),
        })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
