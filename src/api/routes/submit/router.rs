//! Router for the RSVP submit API

use axum::{Json, Router, extract::State};

use super::public;
use crate::api::public::{ApiError, JsonBody, StatusResponse};
use crate::api::state::SharedState;

async fn submit_rsvp(
    State(state): State<SharedState>,
    JsonBody(data): JsonBody<public::RsvpEntry>,
) -> Result<Json<StatusResponse>, ApiError> {
    let spreadsheet_id = state.config.rsvp_spreadsheet_id()?;
    tracing::debug!("Recording RSVP with attendance {:?}", data.attendance);
    state
        .store
        .append_rows(spreadsheet_id, &state.config.sheet_name, vec![data.into_row()])
        .await?;

    Ok(Json(StatusResponse::success()))
}

/// Create the submit router
pub fn router() -> Router<SharedState> {
    Router::new().route("/submit", axum::routing::post(submit_rsvp))
}
