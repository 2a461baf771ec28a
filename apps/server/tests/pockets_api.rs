use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use pocketbank_core::settings::LedgerSettings;
use pocketbank_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn build_test_router(seed_demo: bool) -> Router {
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
        ledger: LedgerSettings::default(),
        seed_demo,
    };
    let state = build_state(&config).await.unwrap();
    app_router(state, &config)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn healthz_works() {
    let app = build_test_router(false).await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn demo_pockets_are_listed() {
    let app = build_test_router(true).await;
    let (status, body) = send(&app, Method::GET, "/api/v1/pockets", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Main Account", "Savings", "Emergency Fund"]);

    let (status, summary) = send(&app, Method::GET, "/api/v1/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["pocketCount"], 3);
    assert_eq!(summary["totalBalance"].as_f64(), Some(475000.0));
    assert_eq!(summary["currency"], "THB");
}

#[tokio::test]
async fn create_deposit_and_spend() {
    let app = build_test_router(false).await;
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/pockets",
        Some(json!({ "name": "Travel" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["balance"].as_f64(), Some(0.0));

    let (status, pocket) = send(
        &app,
        Method::POST,
        &format!("/api/v1/pockets/{}/deposit", id),
        Some(json!({ "amount": 500 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pocket["balance"].as_f64(), Some(500.0));

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/v1/pockets/{}/spend", id),
        Some(json!({ "amount": 600 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "INSUFFICIENT_FUNDS");

    let (status, activities) = send(
        &app,
        Method::GET,
        &format!("/api/v1/activities?pocketId={}", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(activities.as_array().unwrap().len(), 1);
    assert_eq!(activities[0]["kind"], "DEPOSIT");
}

#[tokio::test]
async fn unknown_pocket_is_not_found() {
    let app = build_test_router(false).await;
    let (status, _) = send(&app, Method::GET, "/api/v1/pockets/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/pockets/nope/deposit",
        Some(json!({ "amount": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "POCKET_NOT_FOUND");
}

#[tokio::test]
async fn invalid_amount_is_bad_request() {
    let app = build_test_router(true).await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/pockets/main/deposit",
        Some(json!({ "amount": -5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn locked_pocket_rejects_spend_and_unlock() {
    let app = build_test_router(true).await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/pockets/emergency/spend",
        Some(json!({ "amount": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::LOCKED);
    assert_eq!(body["kind"], "POCKET_LOCKED");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/pockets/emergency/lock/toggle",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "LOCK_DENIED");
}

#[tokio::test]
async fn daily_pocket_mode_restricts_other_pockets() {
    let app = build_test_router(true).await;
    let (status, mode) = send(
        &app,
        Method::PUT,
        "/api/v1/daily-pocket-mode",
        Some(json!({ "pocketId": "main" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mode["isDailyPocketMode"], true);
    assert_eq!(mode["dailyPocketId"], "main");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/pockets/savings/deposit",
        Some(json!({ "amount": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["kind"], "MODE_RESTRICTED");

    let (status, mode) = send(&app, Method::POST, "/api/v1/daily-pocket-mode/toggle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mode["isDailyPocketMode"], false);
    assert!(mode["dailyPocketId"].is_null());
}

#[tokio::test]
async fn daily_goal_streak_over_http() {
    let app = build_test_router(true).await;
    let (status, pocket) = send(
        &app,
        Method::PUT,
        "/api/v1/pockets/main/daily-goal",
        Some(json!({ "goal": 200 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pocket["dailyGoalEnabled"], true);

    let (_, pocket) = send(
        &app,
        Method::POST,
        "/api/v1/pockets/main/deposit",
        Some(json!({ "amount": 200 })),
    )
    .await;
    assert_eq!(pocket["streak"], 1);
    assert_eq!(pocket["dailyGoalProgress"].as_f64(), Some(200.0));

    let (_, pocket) = send(
        &app,
        Method::POST,
        "/api/v1/pockets/main/daily-goal/toggle",
        None,
    )
    .await;
    assert_eq!(pocket["dailyGoalEnabled"], false);
    assert_eq!(pocket["streak"], 0);
}

#[tokio::test]
async fn withdraw_returns_ticket() {
    let app = build_test_router(true).await;
    let (status, ticket) = send(
        &app,
        Method::POST,
        "/api/v1/transfers/withdraw",
        Some(json!({ "pocketId": "main", "amount": 1000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ticket["receipt"]["pocket"]["balance"].as_f64(), Some(249000.0));
    let payload: Value = serde_json::from_str(ticket["qrPayload"].as_str().unwrap()).unwrap();
    assert_eq!(payload["action"], "withdraw");
    assert_eq!(payload["pocket"], "Main Account");
}

#[tokio::test]
async fn send_money_to_bank_account() {
    let app = build_test_router(true).await;
    let (status, receipt) = send(
        &app,
        Method::POST,
        "/api/v1/transfers/send",
        Some(json!({
            "pocketId": "main",
            "recipient": { "type": "bankAccount", "bank": "Bangkok Bank", "accountNumber": "123" },
            "amount": 50.25
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(receipt["activity"]["kind"], "TRANSFER");
    assert_eq!(receipt["activity"]["counterparty"], "Bangkok Bank - 123");

    let (status, options) = send(&app, Method::GET, "/api/v1/transfers/options", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(options["banks"].as_array().unwrap().len(), 9);
    assert_eq!(options["quickAmounts"][0], 500);
}
