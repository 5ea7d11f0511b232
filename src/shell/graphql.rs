use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::bookmarks::use_cases::list_bookmarked_events::inbound::graphql::BookmarkedEventsQuery;
use crate::modules::bookmarks::use_cases::toggle_bookmark::inbound::graphql::ToggleBookmarkMutation;
use crate::modules::events::use_cases::add_event::inbound::graphql::AddEventMutation;
use crate::modules::events::use_cases::list_events::inbound::graphql::ListEventsQuery;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListEventsQuery, BookmarkedEventsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(AddEventMutation, ToggleBookmarkMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
