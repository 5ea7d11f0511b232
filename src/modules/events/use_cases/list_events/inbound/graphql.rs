use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::events::core::event::Event;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlEvent {
    pub id: ID,
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub category: String,
}

impl From<Event> for GqlEvent {
    fn from(e: Event) -> Self {
        Self {
            id: ID(e.id.to_string()),
            name: e.name,
            date: e.date,
            location: e.location,
            description: e.description,
            category: e.category,
        }
    }
}

#[derive(Default)]
pub struct ListEventsQuery;

#[Object]
impl ListEventsQuery {
    /// All events, date ascending.
    async fn events(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let events = state
            .events
            .list_by_date()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(events.into_iter().map(Into::into).collect())
    }
}
