use crate::modules::bookmarks::adapters::outbound::bookmark_repository_in_memory::InMemoryBookmarkRepository;
use crate::modules::events::adapters::outbound::event_repository_in_memory::InMemoryEventRepository;
use crate::shell::state::AppState;
use axum_extra::extract::cookie::Key;
use std::sync::Arc;

pub fn make_state(
    events: InMemoryEventRepository,
    bookmarks: InMemoryBookmarkRepository,
) -> AppState {
    AppState::new(Arc::new(events), Arc::new(bookmarks), Key::generate())
}

/// State over fresh in-memory stores, with handles on the stores for assertions.
pub fn make_test_state() -> (
    AppState,
    Arc<InMemoryEventRepository>,
    Arc<InMemoryBookmarkRepository>,
) {
    let events = Arc::new(InMemoryEventRepository::new());
    let bookmarks = Arc::new(InMemoryBookmarkRepository::new());
    let state = AppState::new(events.clone(), bookmarks.clone(), Key::generate());
    (state, events, bookmarks)
}
