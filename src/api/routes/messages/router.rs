//! Router for the guestbook messages API

use axum::{Json, Router, extract::State};

use super::public;
use crate::api::public::{ApiError, JsonBody, StatusResponse};
use crate::api::state::SharedState;
use crate::core::{AppConfig, StoreError, TabularStore};

/// Read every guestbook message in sheet order
pub async fn fetch_messages(
    config: &AppConfig,
    store: &dyn TabularStore,
) -> Result<Vec<public::MessageRow>, StoreError> {
    let spreadsheet_id = config.messages_spreadsheet_id()?;
    let rows = store
        .read_rows(spreadsheet_id, &config.messages_range)
        .await?;

    Ok(rows
        .iter()
        .map(|row| public::MessageRow::from_row(row))
        .collect())
}

async fn list_messages(
    State(state): State<SharedState>,
) -> Result<Json<Vec<public::MessageRow>>, ApiError> {
    let messages = fetch_messages(&state.config, state.store.as_ref()).await?;
    Ok(Json(messages))
}

async fn create_message(
    State(state): State<SharedState>,
    JsonBody(data): JsonBody<public::MessageRow>,
) -> Result<Json<StatusResponse>, ApiError> {
    let spreadsheet_id = state.config.messages_spreadsheet_id()?;
    state
        .store
        .append_rows(spreadsheet_id, &state.config.sheet_name, vec![data.into_row()])
        .await?;

    Ok(Json(StatusResponse::success()))
}

/// Create the messages router
pub fn router() -> Router<SharedState> {
    Router::new().route(
        "/messages",
        axum::routing::get(list_messages).post(create_message),
    )
}
