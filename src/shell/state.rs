use crate::modules::bookmarks::adapters::outbound::bookmark_repository::BookmarkRepository;
use crate::modules::bookmarks::use_cases::list_bookmarked_events::handler::ListBookmarkedEventsHandler;
use crate::modules::bookmarks::use_cases::toggle_bookmark::handler::ToggleBookmarkHandler;
use crate::modules::events::adapters::outbound::event_repository::EventRepository;
use crate::modules::events::use_cases::add_event::handler::AddEventHandler;
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventRepository>,
    pub add_event_handler: Arc<AddEventHandler>,
    pub toggle_bookmark_handler: Arc<ToggleBookmarkHandler>,
    pub list_bookmarked_events_handler: Arc<ListBookmarkedEventsHandler>,
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(
        events: Arc<dyn EventRepository>,
        bookmarks: Arc<dyn BookmarkRepository>,
        cookie_key: Key,
    ) -> Self {
        Self {
            add_event_handler: Arc::new(AddEventHandler::new(events.clone())),
            toggle_bookmark_handler: Arc::new(ToggleBookmarkHandler::new(bookmarks.clone())),
            list_bookmarked_events_handler: Arc::new(ListBookmarkedEventsHandler::new(
                bookmarks,
                events.clone(),
            )),
            events,
            cookie_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
