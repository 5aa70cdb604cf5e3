use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{GameError, log_warn};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

#[derive(Debug)]
pub struct ApiError(pub GameError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            GameError::NotFound(_) => StatusCode::NOT_FOUND,
            GameError::InvalidInput(_) | GameError::InvalidRound { .. } => StatusCode::BAD_REQUEST,
            GameError::SessionCompleted(_) => StatusCode::CONFLICT,
        }
    }
}

impl From<GameError> for ApiError {
    fn from(error: GameError) -> Self {
        ApiError(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(GameError::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        log_warn!("Request rejected ({}): {}", status.as_u16(), self.0);
        let body = ErrorBody {
            error: self.0.to_string(),
            code: self.0.code(),
        };
        (status, Json(body)).into_response()
    }
}
