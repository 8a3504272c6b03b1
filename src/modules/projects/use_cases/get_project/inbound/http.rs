use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::projects::adapters::inbound::http_response::ProjectResponse;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.projects.get_project(&id).await {
        Ok(project) => (
            StatusCode::OK,
            Json(ProjectResponse {
                project,
                message: None,
            }),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod get_project_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::projects::core::project::ProjectId;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app_state::{make_offline_state, make_test_state};
    use crate::tests::fixtures::project_input::ProjectInputBuilder;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/projects/{id}", get(handle))
            .with_state(state)
    }

    fn get_request(id: &str) -> Request<Body> {
        Request::get(format!("/projects/{id}"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_project() {
        let state = make_test_state();
        let created = state
            .projects
            .create_project(ProjectInputBuilder::new().build())
            .await
            .unwrap();

        let response = app(state)
            .oneshot(get_request(&created.id.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["project"]["_id"], created.id.to_string());
        assert_eq!(json["project"]["title"], created.title);
        assert!(json.get("message").is_none());
    }

    #[tokio::test]
    async fn it_should_return_400_for_a_malformed_id() {
        let response = app(make_offline_state())
            .oneshot(get_request("123"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Invalid project ID");
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_id() {
        let response = app(make_test_state())
            .oneshot(get_request(&ProjectId::generate().to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let response = app(make_offline_state())
            .oneshot(get_request(&ProjectId::generate().to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
