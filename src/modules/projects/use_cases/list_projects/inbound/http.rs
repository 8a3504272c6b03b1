use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::projects::adapters::inbound::http_response::ProjectsResponse;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.projects.list_projects().await {
        Ok(projects) => (StatusCode::OK, Json(ProjectsResponse { projects })).into_response(),
        Err(error) => error.into_response(),
    }
}
