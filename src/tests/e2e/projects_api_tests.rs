use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::app_state::make_test_state;
use crate::tests::fixtures::project_input::ProjectInputBuilder;

async fn send(app: &Router, method: &str, uri: &str, body: Option<String>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    app.clone()
        .oneshot(builder.body(body.map(Body::from).unwrap_or_default()).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn manages_a_project_through_its_whole_lifecycle() {
    let app = router(make_test_state());

    let created = send(
        &app,
        "POST",
        "/projects",
        Some(
            ProjectInputBuilder::new()
                .title("Site")
                .description("A site")
                .tags(&["a", " b ", ""])
                .to_json(),
        ),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = json_body(created).await["project"].clone();
    let id = created["_id"].as_str().unwrap().to_string();

    let fetched = send(&app, "GET", &format!("/projects/{id}"), None).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(json_body(fetched).await["project"], created);

    let updated = send(
        &app,
        "PUT",
        &format!("/projects/{id}"),
        Some(r#"{"tags":["rust"]}"#.to_string()),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = json_body(updated).await["project"].clone();
    assert_eq!(updated["tags"], serde_json::json!(["rust"]));
    assert_eq!(updated["title"], "Site");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let listed = send(&app, "GET", "/projects", None).await;
    let listed = json_body(listed).await;
    assert_eq!(listed["projects"].as_array().unwrap().len(), 1);
    assert_eq!(listed["projects"][0], updated);

    let deleted = send(&app, "DELETE", &format!("/projects/{id}"), None).await;
    assert_eq!(deleted.status(), StatusCode::OK);
    let deleted_again = send(&app, "DELETE", &format!("/projects/{id}"), None).await;
    assert_eq!(deleted_again.status(), StatusCode::NOT_FOUND);

    let listed = send(&app, "GET", "/projects", None).await;
    assert_eq!(json_body(listed).await, serde_json::json!({ "projects": [] }));
}

#[tokio::test]
async fn rejected_creates_leave_the_collection_untouched() {
    let app = router(make_test_state());

    let bodies = [
        r#"{"description":"no title"}"#.to_string(),
        r#"{"title":"Site","description":"A site","appType":"web","appUrl":"not-a-url"}"#
            .to_string(),
        r#"{"title":"App","description":"An app","appType":"mobile","appStoreUrl":"bad"}"#
            .to_string(),
        r#"{"title":"Site","description":"A site","tags":{"a":1}}"#.to_string(),
    ];
    for body in bodies {
        let response = send(&app, "POST", "/projects", Some(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    let listed = send(&app, "GET", "/projects", None).await;
    assert_eq!(json_body(listed).await, serde_json::json!({ "projects": [] }));
}

#[tokio::test]
async fn switching_a_project_to_mobile_keeps_links_valid() {
    let app = router(make_test_state());
    let created = send(
        &app,
        "POST",
        "/projects",
        Some(ProjectInputBuilder::new().to_json()),
    )
    .await;
    let id = json_body(created).await["project"]["_id"]
        .as_str()
        .unwrap()
        .to_string();

    let updated = send(
        &app,
        "PUT",
        &format!("/projects/{id}"),
        Some(
            r#"{"appType":"mobile","appUrl":"not-a-url","playStoreUrl":"https://play.google.com/store/apps/details?id=x"}"#
                .to_string(),
        ),
    )
    .await;

    assert_eq!(updated.status(), StatusCode::OK);
    let project = json_body(updated).await["project"].clone();
    assert_eq!(project["appType"], "mobile");
    assert_eq!(project["appUrl"], "https://portfolio.example.com");
    assert_eq!(
        project["playStoreUrl"],
        "https://play.google.com/store/apps/details?id=x"
    );
}
