use std::time::Duration;

use axum::{
    Router,
    http::StatusCode,
    middleware,
    routing::{get, post},
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::modules::projects::use_cases::create_project::inbound::http as create_http;
use crate::modules::projects::use_cases::delete_project::inbound::http as delete_http;
use crate::modules::projects::use_cases::get_project::inbound::http as get_http;
use crate::modules::projects::use_cases::list_projects::inbound::http as list_http;
use crate::modules::projects::use_cases::update_project::inbound::http as update_http;
use crate::modules::theme::inbound::http as theme_http;
use crate::shell::admin_gate;
use crate::shell::config::AppConfig;
use crate::shell::pages;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/admin", get(pages::admin))
        .route("/admin/{*rest}", get(pages::admin))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin_gate::enforce,
        ));

    Router::new()
        .route("/", get(pages::home))
        .route("/health", get(pages::health))
        .route(
            "/projects",
            get(list_http::handle).post(create_http::handle),
        )
        .route(
            "/projects/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .route("/theme", get(theme_http::current))
        .route("/theme/toggle", post(theme_http::toggle))
        .merge(admin)
        .with_state(state)
}

/// The router wrapped in the request tracing and timeout layers.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    router(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(TraceLayer::new_for_http())
}
