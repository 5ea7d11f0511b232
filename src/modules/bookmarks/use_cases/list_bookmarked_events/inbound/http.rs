use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::modules::session::core::identity::session_user;
use crate::shared::core::primitives::UserId;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, jar: SignedCookieJar) -> impl IntoResponse {
    let user_id = session_user(&jar).unwrap_or_else(UserId::anonymous);

    match state.list_bookmarked_events_handler.handle(&user_id).await {
        Ok(events) => Json(events).into_response(),
        Err(err) => {
            tracing::error!(error = %err, %user_id, "failed to list bookmarked events");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
