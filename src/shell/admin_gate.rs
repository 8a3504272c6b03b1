// Access policy for the admin pages.
//
// In production the admin pages are only served to requests addressed to a loopback host.
// Everyone else is sent back to the home page. Other environments are unrestricted.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::shell::config::Environment;
use crate::shell::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAccess {
    Allow,
    RedirectHome,
}

pub fn admin_access(environment: Environment, host: &str) -> AdminAccess {
    match environment {
        Environment::Development => AdminAccess::Allow,
        Environment::Production if is_loopback_host(host) => AdminAccess::Allow,
        Environment::Production => AdminAccess::RedirectHome,
    }
}

pub fn is_loopback_host(host: &str) -> bool {
    ["localhost", "127.0.0.1", "[::1]"].iter().any(|loopback| {
        host == *loopback
            || host
                .strip_prefix(loopback)
                .is_some_and(|rest| rest.starts_with(':'))
    })
}

pub async fn enforce(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| request.uri().authority().map(|a| a.as_str()))
        .unwrap_or_default()
        .to_string();

    match admin_access(state.environment, &host) {
        AdminAccess::Allow => next.run(request).await,
        AdminAccess::RedirectHome => {
            tracing::warn!(%host, path = %request.uri().path(), "Refused admin access");
            Redirect::to("/").into_response()
        }
    }
}
