use axum::{Extension, Router, routing::get};

use crate::modules::bookmarks::use_cases::list_bookmarked_events::inbound::http as list_bookmarked_http;
use crate::modules::bookmarks::use_cases::toggle_bookmark::inbound::http as toggle_bookmark_http;
use crate::modules::events::use_cases::add_event::inbound::http as add_event_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_events_http;
use crate::modules::session::use_cases::set_user::inbound::http as set_user_http;
use crate::shell::graphql::{graphiql, graphql, schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_events_http::handle))
        .route(
            "/add_event",
            get(add_event_http::form).post(add_event_http::handle),
        )
        .route("/bookmark/{event_id}", get(toggle_bookmark_http::handle))
        .route("/my_bookmarks", get(list_bookmarked_http::handle))
        .route("/set_user/{user_id}", get(set_user_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema(state.clone())))
        .with_state(state)
}
