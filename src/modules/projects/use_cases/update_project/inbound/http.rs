use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::projects::adapters::inbound::http_response::{ProjectResponse, invalid_body};
use crate::modules::projects::core::project::ProjectId;
use crate::modules::projects::core::validation::ProjectInput;
use crate::modules::projects::service::ServiceError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ProjectInput>, JsonRejection>,
) -> impl IntoResponse {
    // The id is checked before the body so a bad id always reads as such.
    if ProjectId::parse(&id).is_none() {
        return ServiceError::InvalidIdentifier.into_response();
    }
    let Json(input) = match body {
        Ok(b) => b,
        Err(rejection) => return invalid_body(rejection),
    };

    match state.projects.update_project(&id, input).await {
        Ok(project) => (
            StatusCode::OK,
            Json(ProjectResponse {
                project,
                message: Some("Project updated successfully"),
            }),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
