//! Router for the pass API

use axum::{Json, Router, extract::State};

use super::public;
use crate::api::public::{ApiError, JsonBody, StatusResponse};
use crate::api::state::SharedState;

/// Check a submitted pass against the configured shared secret
async fn check_pass(
    State(state): State<SharedState>,
    JsonBody(data): JsonBody<public::PassRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    if data.pass != state.config.pass {
        return Err(ApiError::Unauthorized);
    }

    Ok(Json(StatusResponse::success()))
}

/// Create the pass router
pub fn router() -> Router<SharedState> {
    Router::new().route("/pass", axum::routing::post(check_pass))
}
