// Placeholder pages. The rendered site is served by the front end; these keep the
// routes the admin gate protects and redirects to.

use axum::{Json, response::Html};
use serde_json::{Value, json};

pub async fn home() -> Html<&'static str> {
    Html("<!doctype html><title>Portfolio</title><main id=\"home\"></main>")
}

pub async fn admin() -> Html<&'static str> {
    Html("<!doctype html><title>Portfolio admin</title><main id=\"admin\"></main>")
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
