use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::events::use_cases::list_events::inbound::graphql::GqlEvent;
use crate::shared::core::primitives::UserId;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct BookmarkedEventsQuery;

#[Object]
impl BookmarkedEventsQuery {
    async fn bookmarked_events(
        &self,
        context: &Context<'_>,
        user_id: Option<String>,
    ) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let user_id = user_id.and_then(UserId::new).unwrap_or_else(UserId::anonymous);
        let events = state
            .list_bookmarked_events_handler
            .handle(&user_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(events.into_iter().map(Into::into).collect())
    }
}
