use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::projects::adapters::inbound::http_response::MessageResponse;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.projects.delete_project(&id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Project deleted successfully",
            }),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
