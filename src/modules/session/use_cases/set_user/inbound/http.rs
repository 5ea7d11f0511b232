use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::modules::session::core::identity::with_session_user;
use crate::shared::core::primitives::UserId;

pub async fn handle(jar: SignedCookieJar, Path(user_id): Path<String>) -> Response {
    let Some(user_id) = UserId::new(user_id) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    tracing::debug!(%user_id, "session identity assigned");
    (with_session_user(jar, &user_id), Redirect::to("/")).into_response()
}
