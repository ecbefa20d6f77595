use crate::app_context::AppContext;
use crate::cli::Args;
use crate::{dashboard, health, http};
use axum::routing::{any, get};
use axum::Router;

pub fn new(args: &Args, app_context: AppContext) -> Router {
    let cors_policy = http::cors(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let dashboard_routes = Router::new()
        .route("/markers", get(dashboard::handlers::markers))
        .route("/ws", any(dashboard::handlers::ws));

    Router::new()
        .nest("/health", health_routes)
        .nest("/dashboard", dashboard_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(http::middleware::tracing))
}
