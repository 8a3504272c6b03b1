// Theme endpoints. The `theme` cookie plays the part of persisted storage.

use axum::{
    Json,
    http::{HeaderMap, HeaderValue, header},
    response::IntoResponse,
};
use chrono::Timelike;
use serde::Serialize;

use crate::modules::theme::core::mode::ThemeMode;
use crate::modules::theme::core::palette::Palette;
use crate::modules::theme::core::state::ThemeState;

pub const THEME_COOKIE: &str = "theme";
const PREFERS_COLOR_SCHEME: &str = "sec-ch-prefers-color-scheme";
const ONE_YEAR_SECS: u32 = 31_536_000;

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub mode: ThemeMode,
    pub palette: &'static Palette,
}

impl From<ThemeState> for ThemeResponse {
    fn from(state: ThemeState) -> Self {
        Self {
            mode: state.mode(),
            palette: state.palette(),
        }
    }
}

pub fn state_from_headers(headers: &HeaderMap, local_hour: u32) -> ThemeState {
    let persisted = cookie_value(headers, THEME_COOKIE);
    let system_prefers_dark = headers
        .get(PREFERS_COLOR_SCHEME)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| match v.trim().trim_matches('"') {
            "dark" => Some(true),
            "light" => Some(false),
            _ => None,
        });
    ThemeState::init(persisted.as_deref(), system_prefers_dark, local_hour)
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

fn local_hour() -> u32 {
    chrono::Local::now().hour()
}

pub async fn current(headers: HeaderMap) -> impl IntoResponse {
    Json(ThemeResponse::from(state_from_headers(&headers, local_hour())))
}

pub async fn toggle(headers: HeaderMap) -> impl IntoResponse {
    let mut state = state_from_headers(&headers, local_hour());
    let mode = state.toggle_theme();
    let cookie = format!(
        "{THEME_COOKIE}={}; Path=/; Max-Age={ONE_YEAR_SECS}; SameSite=Lax",
        mode.as_str()
    );

    let mut response = Json(ThemeResponse::from(state)).into_response();
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    response
}
