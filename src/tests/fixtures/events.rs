// Shared test fixture for NewEvent.

use crate::modules::events::core::event::NewEvent;

const NEW_EVENT_JSON: &str = include_str!("json/new_event.json");

pub struct NewEventBuilder {
    inner: NewEvent,
}

impl Default for NewEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(NEW_EVENT_JSON).unwrap(),
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn category(mut self, v: impl Into<String>) -> Self {
        self.inner.category = v.into();
        self
    }

    pub fn build(self) -> NewEvent {
        self.inner
    }
}

#[cfg(test)]
mod new_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = NewEventBuilder::default().build();
        assert_eq!(built.name, "Jazz Night");
        assert_eq!(built.date, "2025-07-01");
        assert_eq!(built.location, "Blue Note");
        assert_eq!(built.description, "Live jazz");
        assert_eq!(built.category, "Music");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = NewEventBuilder::new()
            .name("Book Fair")
            .date("2026-03-14")
            .location("City Library")
            .description("Second-hand books")
            .category("Art")
            .build();

        assert_eq!(custom.name, "Book Fair");
        assert_eq!(custom.date, "2026-03-14");
        assert_eq!(custom.location, "City Library");
        assert_eq!(custom.description, "Second-hand books");
        assert_eq!(custom.category, "Art");
    }
}
