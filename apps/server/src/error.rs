use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pocketbank_core::errors::Error as CoreError;
use pocketbank_core::pockets::PocketError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Not Found")]
    NotFound,
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    kind: &'static str,
    message: String,
}

fn pocket_status(err: &PocketError) -> StatusCode {
    match err {
        PocketError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        PocketError::PocketNotFound(_) => StatusCode::NOT_FOUND,
        PocketError::ModeRestricted { .. } => StatusCode::FORBIDDEN,
        PocketError::PocketLocked(_) => StatusCode::LOCKED,
        PocketError::InsufficientFunds { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        PocketError::LockDenied { .. } => StatusCode::CONFLICT,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            ApiError::Core(e) => match e {
                CoreError::Pocket(p) => (pocket_status(p), p.kind()),
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION"),
                CoreError::InvalidConfigValue(_) | CoreError::Unexpected(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL")
                }
            },
            ApiError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        };
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            kind,
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
