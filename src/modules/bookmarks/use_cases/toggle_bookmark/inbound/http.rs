use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::Serialize;

use crate::modules::bookmarks::core::bookmark::ToggleOutcome;
use crate::modules::session::core::identity::session_user;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::UserId;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ToggleBookmarkResponse {
    pub status: ToggleOutcome,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn handle(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(event_id): Path<String>,
) -> Response {
    let user_id = session_user(&jar).unwrap_or_else(UserId::anonymous);

    match state.toggle_bookmark_handler.handle(&user_id, &event_id).await {
        Ok(status) => Json(ToggleBookmarkResponse { status }).into_response(),
        Err(ApplicationError::InvalidId(err)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, %event_id, "failed to toggle bookmark");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
