use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::modules::events::core::event::NewEvent;
use crate::shell::state::AppState;

const ADD_EVENT_FORM: &str = r#"<!doctype html>
<html>
<head><title>Add Event</title></head>
<body>
<h1>Add Event</h1>
<form method="post" action="/add_event">
  <label>Name <input name="name" required></label>
  <label>Date <input name="date" type="date" required></label>
  <label>Location <input name="location" required></label>
  <label>Description <textarea name="description" required></textarea></label>
  <label>Category
    <select name="category" required>
      <option>Music</option>
      <option>Food</option>
      <option>Art</option>
      <option>Technology</option>
      <option>Holiday</option>
    </select>
  </label>
  <button type="submit">Add</button>
</form>
</body>
</html>
"#;

#[derive(Deserialize)]
pub struct AddEventForm {
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub category: String,
}

impl From<AddEventForm> for NewEvent {
    fn from(form: AddEventForm) -> Self {
        NewEvent {
            name: form.name,
            date: form.date,
            location: form.location,
            description: form.description,
            category: form.category,
        }
    }
}

pub async fn form() -> Html<&'static str> {
    Html(ADD_EVENT_FORM)
}

pub async fn handle(
    State(state): State<AppState>,
    form: Result<Form<AddEventForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(f) => f,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    match state.add_event_handler.handle(form.into()).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to add event");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
