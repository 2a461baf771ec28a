use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use pocketbank_core::constants::QUICK_AMOUNTS;
use pocketbank_core::pockets::MovementReceipt;
use pocketbank_core::transfers::{
    BillPaymentRequest, BillType, SendMoneyRequest, TopUpMethod, TopUpRequest, WithdrawRequest,
    WithdrawalTicket, SUPPORTED_BANKS,
};
use serde::Serialize;

/// Choices the transfer screens offer.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TransferOptions {
    currency: String,
    banks: Vec<&'static str>,
    bill_types: Vec<BillType>,
    top_up_methods: Vec<TopUpMethod>,
    quick_amounts: Vec<u32>,
}

async fn get_options(State(state): State<Arc<AppState>>) -> Json<TransferOptions> {
    Json(TransferOptions {
        currency: state.settings.currency.clone(),
        banks: SUPPORTED_BANKS.to_vec(),
        bill_types: vec![
            BillType::Electricity,
            BillType::Water,
            BillType::Internet,
            BillType::Phone,
        ],
        top_up_methods: vec![TopUpMethod::BankTransfer, TopUpMethod::Card],
        quick_amounts: QUICK_AMOUNTS.to_vec(),
    })
}

async fn send_money(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SendMoneyRequest>,
) -> ApiResult<Json<MovementReceipt>> {
    Ok(Json(state.transfer_service.send_money(request)?))
}

async fn pay_bill(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BillPaymentRequest>,
) -> ApiResult<Json<MovementReceipt>> {
    Ok(Json(state.transfer_service.pay_bill(request)?))
}

async fn top_up(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TopUpRequest>,
) -> ApiResult<Json<MovementReceipt>> {
    Ok(Json(state.transfer_service.top_up(request)?))
}

async fn withdraw(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WithdrawRequest>,
) -> ApiResult<Json<WithdrawalTicket>> {
    Ok(Json(state.transfer_service.withdraw(request)?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transfers/options", get(get_options))
        .route("/transfers/send", post(send_money))
        .route("/transfers/bill-payment", post(pay_bill))
        .route("/transfers/top-up", post(top_up))
        .route("/transfers/withdraw", post(withdraw))
}
