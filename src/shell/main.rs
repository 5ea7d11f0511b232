use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use festival_planner::modules::events::use_cases::seed_events::handler::seed_sample_events;
use festival_planner::shell::config::AppConfig;
use festival_planner::shell::http::router;
use festival_planner::shell::state::AppState;
use festival_planner::shell::store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let (events, bookmarks) = store::connect(&config.store).await?;
    seed_sample_events(events.as_ref()).await?;

    let state = AppState::new(events, bookmarks, config.cookie_key());
    let app = router(state).layer(TraceLayer::new_for_http());

    tracing::info!("listening on http://{}", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
