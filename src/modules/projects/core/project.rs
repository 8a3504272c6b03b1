// The portfolio project record and the normalized payloads that produce or modify it.
//
// Responsibilities
// - Define the persisted shape of a project (wire names follow the document collection).
// - Keep the app type specific links consistent: a new project only carries the links of its type.
// - Apply partial updates field by field.

use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a stored project, a 24 character hexadecimal ObjectId.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(ObjectId);

impl ProjectId {
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Returns `None` unless `raw` is exactly 24 hexadecimal characters.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() != 24 {
            return None;
        }
        ObjectId::parse_str(raw).ok().map(Self)
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl From<ObjectId> for ProjectId {
    fn from(value: ObjectId) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl Serialize for ProjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for ProjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ProjectId::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid project id: {raw}")))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppType {
    #[default]
    Web,
    Mobile,
}

impl AppType {
    /// Anything other than exactly `mobile` is a web project.
    pub fn coerce(raw: Option<&str>) -> Self {
        match raw {
            Some("mobile") => AppType::Mobile,
            _ => AppType::Web,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppType::Web => "web",
            AppType::Mobile => "mobile",
        }
    }
}

/// Links that only make sense for one app type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppLinks {
    Web {
        app_url: String,
    },
    Mobile {
        app_store_url: String,
        play_store_url: String,
    },
}

impl AppLinks {
    pub fn app_type(&self) -> AppType {
        match self {
            AppLinks::Web { .. } => AppType::Web,
            AppLinks::Mobile { .. } => AppType::Mobile,
        }
    }
}

/// A validated project that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub links: AppLinks,
    pub github_url: String,
    pub tags: Vec<String>,
}

impl NewProject {
    pub fn into_project(self, id: ProjectId, now: DateTime<Utc>) -> Project {
        let app_type = self.links.app_type();
        let (app_url, app_store_url, play_store_url) = match self.links {
            AppLinks::Web { app_url } => (app_url, String::new(), String::new()),
            AppLinks::Mobile {
                app_store_url,
                play_store_url,
            } => (String::new(), app_store_url, play_store_url),
        };

        Project {
            id,
            title: self.title,
            description: self.description,
            app_type,
            app_url,
            app_store_url,
            play_store_url,
            github_url: self.github_url,
            tags: self.tags,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub app_type: Option<AppType>,
    pub app_url: Option<String>,
    pub app_store_url: Option<String>,
    pub play_store_url: Option<String>,
    pub github_url: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ProjectPatch {
    pub fn apply_to(self, project: &mut Project, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(app_type) = self.app_type {
            project.app_type = app_type;
        }
        if let Some(app_url) = self.app_url {
            project.app_url = app_url;
        }
        if let Some(app_store_url) = self.app_store_url {
            project.app_store_url = app_store_url;
        }
        if let Some(play_store_url) = self.play_store_url {
            project.play_store_url = play_store_url;
        }
        if let Some(github_url) = self.github_url {
            project.github_url = github_url;
        }
        if let Some(tags) = self.tags {
            project.tags = tags;
        }
        project.updated_at = now;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub app_type: AppType,
    pub app_url: String,
    pub app_store_url: String,
    pub play_store_url: String,
    pub github_url: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Current time at millisecond precision, the resolution the document store keeps.
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
