use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use gamestats::{
    controller::{
        profile::{submit_game_data, update_alliance},
        ranking::alliances,
    },
    error::Error,
    model::{
        profile::{GameDataDto, UpdateAllianceDto},
        ranking::{AllianceQuery, AllianceSortKey, SortOrder},
    },
};
use tower_sessions::Session;

use crate::util::setup::{body_json, fresh_session, register_user, test_setup, TestSetup};

async fn seed_member(
    test: &TestSetup,
    username: &str,
    alliance: &str,
    power_now: i64,
) -> Result<Session, Error> {
    let session = fresh_session();
    register_user(&test.state, &session, username).await?;

    submit_game_data(
        State(test.state.clone()),
        HeaderMap::new(),
        session.clone(),
        Ok(Json(GameDataDto {
            character_id: format!("char-{}", username),
            nickname: username.to_string(),
            server: Some("s1".to_string()),
            alliance: Some(alliance.to_string()),
            level: Some(10),
            power_now: Some(power_now),
            power_max: None,
            hidden_power: None,
        })),
    )
    .await?;

    Ok(session)
}

#[tokio::test]
/// Expect descending totalPower order with averagePower computed per row
async fn orders_by_total_power_with_average() -> Result<(), Error> {
    let test = test_setup().await;
    seed_member(&test, "alice", "Guild", 1000).await?;
    seed_member(&test, "bob", "Guild", 1501).await?;
    seed_member(&test, "carol", "Guild2", 4000).await?;

    let resp = alliances(State(test.state.clone()), Query(AllianceQuery::default()))
        .await
        .into_response();

    let body = body_json(resp).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);

    assert_eq!(list[0]["name"], "Guild2");
    assert_eq!(list[0]["totalPower"], 4000);
    assert_eq!(list[0]["averagePower"], 4000);

    // 2501 over 2 members floors to 1250.
    assert_eq!(list[1]["name"], "Guild");
    assert_eq!(list[1]["memberCount"], 2);
    assert_eq!(list[1]["averagePower"], 1250);

    Ok(())
}

#[tokio::test]
/// Expect sorting by averagePower ascending
async fn sorts_by_average_power_ascending() -> Result<(), Error> {
    let test = test_setup().await;
    seed_member(&test, "alice", "Guild", 1000).await?;
    seed_member(&test, "bob", "Guild", 2000).await?;
    seed_member(&test, "carol", "Guild2", 1200).await?;

    let resp = alliances(
        State(test.state.clone()),
        Query(AllianceQuery {
            sort_by: AllianceSortKey::AveragePower,
            sort_order: SortOrder::Asc,
            ..Default::default()
        }),
    )
    .await
    .into_response();

    let body = body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    // Guild2 averages 1200, Guild averages 1500.
    assert_eq!(names, vec!["Guild2", "Guild"]);

    Ok(())
}

#[tokio::test]
/// Expect an abandoned alliance to stay listed at zero with averagePower 0
async fn keeps_emptied_alliance_listed() -> Result<(), Error> {
    let test = test_setup().await;
    let session = seed_member(&test, "alice", "Guild", 1000).await?;

    update_alliance(
        State(test.state.clone()),
        HeaderMap::new(),
        session,
        Ok(Json(UpdateAllianceDto {
            alliance: Some("Guild2".to_string()),
        })),
    )
    .await?;

    let resp = alliances(State(test.state.clone()), Query(AllianceQuery::default()))
        .await
        .into_response();

    let body = body_json(resp).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);

    let empty = list
        .iter()
        .find(|a| a["name"] == "Guild")
        .expect("emptied alliance should stay listed");
    assert_eq!(empty["memberCount"], 0);
    assert_eq!(empty["totalPower"], 0);
    assert_eq!(empty["averagePower"], 0);

    let target = list.iter().find(|a| a["name"] == "Guild2").unwrap();
    assert_eq!(target["memberCount"], 1);
    assert_eq!(target["totalPower"], 1000);

    Ok(())
}

#[tokio::test]
/// Expect the server filter to drop alliances on other servers
async fn filters_by_server() -> Result<(), Error> {
    let test = test_setup().await;
    seed_member(&test, "alice", "Guild", 1000).await?;

    let resp = alliances(
        State(test.state.clone()),
        Query(AllianceQuery {
            server: Some("s2".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    let body = body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    Ok(())
}
