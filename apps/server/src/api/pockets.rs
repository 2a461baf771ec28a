use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use pocketbank_core::pockets::{DailyPocketMode, Pocket, PocketActivity, PocketSummary};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Deserialize)]
struct NameBody {
    name: String,
}

#[derive(Deserialize)]
struct AmountBody {
    amount: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TargetBody {
    target: Decimal,
    #[serde(default)]
    lock_on_target: bool,
}

#[derive(Deserialize)]
struct DailyGoalBody {
    goal: Decimal,
}

#[derive(Deserialize)]
struct ShareBody {
    recipient: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyPocketBody {
    pocket_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivitiesQuery {
    pocket_id: Option<String>,
}

async fn list_pockets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Pocket>>> {
    let pockets = state.pocket_service.list_pockets()?;
    Ok(Json(pockets))
}

async fn create_pocket(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NameBody>,
) -> ApiResult<(StatusCode, Json<Pocket>)> {
    let id = state.pocket_service.create_pocket(&body.name)?;
    let pocket = state
        .pocket_service
        .get_pocket(&id)?
        .ok_or(ApiError::NotFound)?;
    Ok((StatusCode::CREATED, Json(pocket)))
}

async fn get_pocket(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Pocket>> {
    let pocket = state
        .pocket_service
        .get_pocket(&id)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(pocket))
}

async fn rename_pocket(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<NameBody>,
) -> ApiResult<Json<Pocket>> {
    let pocket = state.pocket_service.rename_pocket(&id, &body.name)?;
    Ok(Json(pocket))
}

async fn deposit(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<AmountBody>,
) -> ApiResult<Json<Pocket>> {
    let pocket = state.pocket_service.deposit(&id, body.amount)?;
    Ok(Json(pocket))
}

async fn spend(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<AmountBody>,
) -> ApiResult<Json<Pocket>> {
    let pocket = state.pocket_service.spend(&id, body.amount)?;
    Ok(Json(pocket))
}

async fn set_target(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<TargetBody>,
) -> ApiResult<Json<Pocket>> {
    let pocket = state
        .pocket_service
        .set_target(&id, body.target, body.lock_on_target)?;
    Ok(Json(pocket))
}

async fn toggle_lock(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Pocket>> {
    let pocket = state.pocket_service.toggle_lock(&id)?;
    Ok(Json(pocket))
}

async fn set_daily_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<DailyGoalBody>,
) -> ApiResult<Json<Pocket>> {
    let pocket = state.pocket_service.set_daily_goal(&id, body.goal)?;
    Ok(Json(pocket))
}

async fn toggle_daily_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Pocket>> {
    let pocket = state.pocket_service.toggle_daily_goal(&id)?;
    Ok(Json(pocket))
}

async fn share_pocket(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(body): Json<ShareBody>,
) -> ApiResult<Json<Pocket>> {
    let pocket = state.pocket_service.share_pocket(&id, &body.recipient)?;
    Ok(Json(pocket))
}

async fn get_daily_pocket_mode(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DailyPocketMode>> {
    Ok(Json(state.pocket_service.daily_pocket_mode()?))
}

async fn set_daily_pocket(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DailyPocketBody>,
) -> ApiResult<Json<DailyPocketMode>> {
    let mode = state.pocket_service.set_daily_pocket(&body.pocket_id)?;
    Ok(Json(mode))
}

async fn toggle_daily_pocket_mode(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DailyPocketMode>> {
    Ok(Json(state.pocket_service.toggle_daily_pocket_mode()?))
}

async fn get_summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<PocketSummary>> {
    Ok(Json(state.pocket_service.summary()?))
}

async fn list_activities(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ActivitiesQuery>,
) -> ApiResult<Json<Vec<PocketActivity>>> {
    let activities = state
        .pocket_service
        .list_activities(query.pocket_id.as_deref())?;
    Ok(Json(activities))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pockets", get(list_pockets).post(create_pocket))
        .route("/pockets/{id}", get(get_pocket).put(rename_pocket))
        .route("/pockets/{id}/deposit", post(deposit))
        .route("/pockets/{id}/spend", post(spend))
        .route("/pockets/{id}/target", put(set_target))
        .route("/pockets/{id}/lock/toggle", post(toggle_lock))
        .route("/pockets/{id}/daily-goal", put(set_daily_goal))
        .route("/pockets/{id}/daily-goal/toggle", post(toggle_daily_goal))
        .route("/pockets/{id}/share", post(share_pocket))
        .route(
            "/daily-pocket-mode",
            get(get_daily_pocket_mode).put(set_daily_pocket),
        )
        .route("/daily-pocket-mode/toggle", post(toggle_daily_pocket_mode))
        .route("/summary", get(get_summary))
        .route("/activities", get(list_activities))
}
