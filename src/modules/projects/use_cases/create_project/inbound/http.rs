use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::projects::adapters::inbound::http_response::{ProjectResponse, invalid_body};
use crate::modules::projects::core::validation::ProjectInput;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ProjectInput>, JsonRejection>,
) -> impl IntoResponse {
    let Json(input) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    match state.projects.create_project(input).await {
        Ok(project) => (
            StatusCode::CREATED,
            Json(ProjectResponse {
                project,
                message: Some("Project created successfully"),
            }),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
