use axum::{
    extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json,
};
use gamestats::{
    controller::profile::submit_game_data,
    data::alliance::AllianceRepository,
    error::Error,
    model::profile::GameDataDto,
};

use crate::util::setup::{body_json, fresh_session, register_user, test_setup};

fn snapshot(power_now: Option<i64>, alliance: Option<&str>) -> GameDataDto {
    GameDataDto {
        character_id: "char-1".to_string(),
        nickname: "Alice".to_string(),
        server: Some("s1".to_string()),
        alliance: alliance.map(str::to_string),
        level: Some(30),
        power_now,
        power_max: Some(1200),
        hidden_power: None,
    }
}

#[tokio::test]
/// Expect 200 and a created profile plus alliance aggregates on first submit
async fn creates_profile_and_alliance_stats() -> Result<(), Error> {
    let test = test_setup().await;
    register_user(&test.state, &test.session, "alice").await?;

    let result = submit_game_data(
        State(test.state.clone()),
        HeaderMap::new(),
        test.session.clone(),
        Ok(Json(snapshot(Some(1000), Some("Guild")))),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["alliance"], "Guild");

    let alliance = AllianceRepository::new(&test.state.storage)
        .get_by_name_and_server("Guild", "s1")
        .await
        .expect("alliance row should exist");
    assert_eq!(alliance.member_count, 1);
    assert_eq!(alliance.total_power, 1000);

    Ok(())
}

#[tokio::test]
/// Expect a second submission to merge fields and move the power delta
async fn merges_resubmission_into_existing_profile() -> Result<(), Error> {
    let test = test_setup().await;
    register_user(&test.state, &test.session, "alice").await?;

    submit_game_data(
        State(test.state.clone()),
        HeaderMap::new(),
        test.session.clone(),
        Ok(Json(snapshot(Some(1000), Some("Guild")))),
    )
    .await?;

    let resp = submit_game_data(
        State(test.state.clone()),
        HeaderMap::new(),
        test.session.clone(),
        Ok(Json(snapshot(Some(1500), Some("Guild")))),
    )
    .await?
    .into_response();

    let body = body_json(resp).await;
    assert_eq!(body["powerNow"], 1500);

    // Same member, higher power: count stays, total follows the delta.
    let alliance = AllianceRepository::new(&test.state.storage)
        .get_by_name_and_server("Guild", "s1")
        .await
        .expect("alliance row should exist");
    assert_eq!(alliance.member_count, 1);
    assert_eq!(alliance.total_power, 1500);

    Ok(())
}

#[tokio::test]
/// Expect fields absent from a resubmission to keep their stored values
async fn absent_fields_are_left_untouched() -> Result<(), Error> {
    let test = test_setup().await;
    register_user(&test.state, &test.session, "alice").await?;

    submit_game_data(
        State(test.state.clone()),
        HeaderMap::new(),
        test.session.clone(),
        Ok(Json(snapshot(Some(1000), Some("Guild")))),
    )
    .await?;

    let resp = submit_game_data(
        State(test.state.clone()),
        HeaderMap::new(),
        test.session.clone(),
        Ok(Json(GameDataDto {
            character_id: "char-1".to_string(),
            nickname: "Alice".to_string(),
            server: None,
            alliance: None,
            level: None,
            power_now: None,
            power_max: None,
            hidden_power: None,
        })),
    )
    .await?
    .into_response();

    let body = body_json(resp).await;
    assert_eq!(body["powerNow"], 1000);
    assert_eq!(body["alliance"], "Guild");
    assert_eq!(body["level"], 30);

    Ok(())
}

#[tokio::test]
/// Expect 401 before any body handling
async fn returns_unauthorized_without_credentials() -> Result<(), Error> {
    let test = test_setup().await;

    let result = submit_game_data(
        State(test.state.clone()),
        HeaderMap::new(),
        fresh_session(),
        Ok(Json(snapshot(Some(1000), None))),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
