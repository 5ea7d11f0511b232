// Session identity held in a signed cookie.
//
// This is identity assignment, not authentication: whatever a visitor sets
// through /set_user is trusted as-is.

use crate::shared::core::primitives::UserId;
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};

pub const USER_COOKIE: &str = "user_id";

/// The identity stored in the session, if any. Callers resolve the default.
pub fn session_user(jar: &SignedCookieJar) -> Option<UserId> {
    jar.get(USER_COOKIE)
        .and_then(|cookie| UserId::new(cookie.value()))
}

pub fn with_session_user(jar: SignedCookieJar, user_id: &UserId) -> SignedCookieJar {
    jar.add(
        Cookie::build((USER_COOKIE, user_id.as_str().to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}
