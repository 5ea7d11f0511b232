use async_graphql::{Context, Object, Result as GqlResult};

use crate::shared::core::primitives::UserId;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ToggleBookmarkMutation;

#[Object]
impl ToggleBookmarkMutation {
    /// Returns "bookmarked" or "unbookmarked". `user_id` defaults to anonymous.
    async fn toggle_bookmark(
        &self,
        context: &Context<'_>,
        event_id: String,
        user_id: Option<String>,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let user_id = user_id.and_then(UserId::new).unwrap_or_else(UserId::anonymous);
        let outcome = state
            .toggle_bookmark_handler
            .handle(&user_id, &event_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(outcome.as_str().to_string())
    }
}
