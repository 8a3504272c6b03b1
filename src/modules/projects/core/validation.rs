// Validation of inbound project payloads.
//
// Purpose
// - Turn an untrusted request body into a `NewProject` or a `ProjectPatch`.
//
// Boundaries
// - Pure functions, no input or output. Checks run in a fixed order and the first failure wins:
//   required text, app links, GitHub link, tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::Url;

use crate::modules::projects::core::project::{AppLinks, AppType, NewProject, ProjectPatch};

/// Request body accepted by create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_store_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagsInput>,
}

/// Tags as received. Anything that is not a list of strings is kept so it can be rejected
/// with a precise error instead of a generic body rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<String>),
    Malformed(serde_json::Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlField {
    App,
    AppStore,
    PlayStore,
    GitHub,
}

impl fmt::Display for UrlField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UrlField::App => "app URL",
            UrlField::AppStore => "App Store URL",
            UrlField::PlayStore => "Play Store URL",
            UrlField::GitHub => "GitHub URL",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title and description are required")]
    MissingField(&'static str),

    #[error("Invalid {0} format")]
    InvalidUrl(UrlField),

    #[error("Tags must be an array")]
    InvalidTagList,
}

pub fn validate_create(input: ProjectInput) -> Result<NewProject, ValidationError> {
    let title = required_text(input.title, "title")?;
    let description = required_text(input.description, "description")?;

    let links = match AppType::coerce(input.app_type.as_deref()) {
        AppType::Web => AppLinks::Web {
            app_url: optional_url(input.app_url, UrlField::App)?,
        },
        AppType::Mobile => AppLinks::Mobile {
            app_store_url: optional_url(input.app_store_url, UrlField::AppStore)?,
            play_store_url: optional_url(input.play_store_url, UrlField::PlayStore)?,
        },
    };
    let github_url = optional_url(input.github_url, UrlField::GitHub)?;
    let tags = input.tags.map(normalize_tags).transpose()?.unwrap_or_default();

    Ok(NewProject {
        title,
        description,
        links,
        github_url,
        tags,
    })
}

/// Absent fields stay absent. When the app type is supplied, links belonging to the
/// other type are ignored rather than stored unchecked.
pub fn validate_update(input: ProjectInput) -> Result<ProjectPatch, ValidationError> {
    let title = input
        .title
        .map(|title| required_text(Some(title), "title"))
        .transpose()?;
    let description = input
        .description
        .map(|description| required_text(Some(description), "description"))
        .transpose()?;

    let app_type = input.app_type.as_deref().map(|raw| AppType::coerce(Some(raw)));
    let (app_url, app_store_url, play_store_url) = match app_type {
        Some(AppType::Web) => (patch_url(input.app_url, UrlField::App)?, None, None),
        Some(AppType::Mobile) => (
            None,
            patch_url(input.app_store_url, UrlField::AppStore)?,
            patch_url(input.play_store_url, UrlField::PlayStore)?,
        ),
        None => (
            patch_url(input.app_url, UrlField::App)?,
            patch_url(input.app_store_url, UrlField::AppStore)?,
            patch_url(input.play_store_url, UrlField::PlayStore)?,
        ),
    };
    let github_url = patch_url(input.github_url, UrlField::GitHub)?;
    let tags = input.tags.map(normalize_tags).transpose()?;

    Ok(ProjectPatch {
        title,
        description,
        app_type,
        app_url,
        app_store_url,
        play_store_url,
        github_url,
        tags,
    })
}

/// Absolute means a scheme and a host.
pub fn is_absolute_url(raw: &str) -> bool {
    Url::parse(raw)
        .map(|url| url.host_str().is_some_and(|host| !host.is_empty()))
        .unwrap_or(false)
}

fn required_text(raw: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match raw.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn optional_url(raw: Option<String>, field: UrlField) -> Result<String, ValidationError> {
    Ok(patch_url(raw, field)?.unwrap_or_default())
}

// Some("") clears the stored link.
fn patch_url(raw: Option<String>, field: UrlField) -> Result<Option<String>, ValidationError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Some(String::new()));
    }
    if !is_absolute_url(trimmed) {
        return Err(ValidationError::InvalidUrl(field));
    }
    Ok(Some(trimmed.to_string()))
}

fn normalize_tags(tags: TagsInput) -> Result<Vec<String>, ValidationError> {
    match tags {
        TagsInput::List(tags) => Ok(tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()),
        TagsInput::Malformed(_) => Err(ValidationError::InvalidTagList),
    }
}
