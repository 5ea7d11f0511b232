use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::modules::events::adapters::outbound::event_repository::EventRepository;
use crate::modules::events::use_cases::seed_events::handler::seed_sample_events;
use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;

async fn send(app: &Router, request: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn get_json(app: &Router, uri: &str, cookie: Option<&str>) -> serde_json::Value {
    let mut request = Request::get(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    let response = send(app, request.body(Body::empty()).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Visits /set_user/{user_id} and returns the cookie pair to send back.
async fn login_as(app: &Router, user_id: &str) -> String {
    let response = send(
        app,
        Request::get(format!("/set_user/{user_id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

async fn add_event(app: &Router, body: &'static str) {
    let response = send(
        app,
        Request::post("/add_event")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

fn names(list: &serde_json::Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn it_should_list_a_new_event_at_its_date_position_among_the_samples() {
    let (state, events, _) = make_test_state();
    seed_sample_events(events.as_ref()).await.unwrap();
    let app = router(state);

    add_event(
        &app,
        "name=Jazz+Night&date=2025-07-01&location=Blue+Note&description=Live+jazz&category=Music",
    )
    .await;
    add_event(
        &app,
        "name=Harvest+Fair&date=2025-09-30&location=Town+Square&description=Local+produce&category=Food",
    )
    .await;

    let list = get_json(&app, "/", None).await;
    assert_eq!(
        names(&list),
        vec![
            "Jazz Night",
            "Summer Music Festival",
            "Food & Wine Festival",
            "Harvest Fair",
            "Art & Culture Festival",
            "Tech Innovation Summit",
            "Holiday Light Festival",
        ]
    );
    let dates: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert!(dates.windows(2).all(|w| w[0] <= w[1]));

    let jazz = &list[0];
    assert_eq!(jazz["location"], "Blue Note");
    assert_eq!(jazz["description"], "Live jazz");
    assert_eq!(jazz["category"], "Music");
    assert!(jazz["id"].is_string());
}

#[tokio::test]
async fn it_should_keep_bookmarks_per_session_identity() {
    let (state, events, _) = make_test_state();
    seed_sample_events(events.as_ref()).await.unwrap();
    let app = router(state);
    let list = get_json(&app, "/", None).await;
    let event_id = list[0]["id"].as_str().unwrap().to_string();

    let alice = login_as(&app, "alice").await;
    let bob = login_as(&app, "bob").await;

    let toggled = get_json(&app, &format!("/bookmark/{event_id}"), Some(&alice)).await;
    assert_eq!(toggled, serde_json::json!({ "status": "bookmarked" }));

    let alice_list = get_json(&app, "/my_bookmarks", Some(&alice)).await;
    assert_eq!(alice_list.as_array().unwrap().len(), 1);
    assert_eq!(alice_list[0]["id"], event_id.as_str());
    assert_eq!(get_json(&app, "/my_bookmarks", Some(&bob)).await, serde_json::json!([]));
    assert_eq!(get_json(&app, "/my_bookmarks", None).await, serde_json::json!([]));

    let toggled = get_json(&app, &format!("/bookmark/{event_id}"), Some(&alice)).await;
    assert_eq!(toggled, serde_json::json!({ "status": "unbookmarked" }));
    assert_eq!(get_json(&app, "/my_bookmarks", Some(&alice)).await, serde_json::json!([]));
}

#[tokio::test]
async fn it_should_ignore_a_tampered_session_cookie() {
    let (state, events, _) = make_test_state();
    seed_sample_events(events.as_ref()).await.unwrap();
    let app = router(state);
    let event_id = get_json(&app, "/", None).await[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    get_json(&app, &format!("/bookmark/{event_id}"), Some("user_id=alice")).await;

    // Unsigned cookie falls back to anonymous.
    assert_eq!(
        get_json(&app, "/my_bookmarks", None).await.as_array().unwrap().len(),
        1
    );
    let alice = login_as(&app, "alice").await;
    assert_eq!(get_json(&app, "/my_bookmarks", Some(&alice)).await, serde_json::json!([]));
}

#[tokio::test]
async fn it_should_drop_bookmarks_of_events_removed_from_the_store() {
    let (state, events, _) = make_test_state();
    seed_sample_events(events.as_ref()).await.unwrap();
    let app = router(state);
    let all = events.list_by_date().await.unwrap();
    let (kept, removed) = (all[0].id, all[1].id);

    get_json(&app, &format!("/bookmark/{kept}"), None).await;
    get_json(&app, &format!("/bookmark/{removed}"), None).await;
    assert!(events.remove(removed).await);

    let list = get_json(&app, "/my_bookmarks", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["id"], kept.to_string());
}
