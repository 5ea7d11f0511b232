use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::events::core::event::NewEvent;
use crate::modules::events::use_cases::list_events::inbound::graphql::GqlEvent;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AddEventMutation;

#[Object]
impl AddEventMutation {
    async fn add_event(
        &self,
        context: &Context<'_>,
        name: String,
        date: String,
        location: String,
        description: String,
        category: String,
    ) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        let command = NewEvent {
            name,
            date,
            location,
            description,
            category,
        };
        let event = state
            .add_event_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(event.into())
    }
}
