//! API routes module

pub mod messages;
pub mod pass;
pub mod submit;

use axum::Router;

use crate::api::state::SharedState;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Shared secret check
        .merge(pass::router())
        // Guestbook routes
        .merge(messages::router())
        // RSVP routes
        .merge(submit::router())
}
