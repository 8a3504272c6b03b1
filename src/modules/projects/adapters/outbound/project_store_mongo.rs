// MongoDB implementation of the ProjectStore port.
//
// Responsibilities
// - Map projects to documents in the `projects` collection (camelCase fields, BSON datetimes).
// - Connect on first use and reuse the same client for the life of the process.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, Document, doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::modules::projects::adapters::outbound::project_store::{ProjectStore, StoreError};
use crate::modules::projects::core::project::{
    AppType, NewProject, Project, ProjectId, ProjectPatch, timestamp_now,
};

pub const PROJECTS_COLLECTION: &str = "projects";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    description: String,
    #[serde(default)]
    app_type: AppType,
    #[serde(default)]
    app_url: String,
    #[serde(default)]
    app_store_url: String,
    #[serde(default)]
    play_store_url: String,
    #[serde(default)]
    github_url: String,
    #[serde(default)]
    tags: Vec<String>,
    created_at: bson::DateTime,
    updated_at: bson::DateTime,
}

impl From<&Project> for ProjectDocument {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.as_object_id(),
            title: project.title.clone(),
            description: project.description.clone(),
            app_type: project.app_type,
            app_url: project.app_url.clone(),
            app_store_url: project.app_store_url.clone(),
            play_store_url: project.play_store_url.clone(),
            github_url: project.github_url.clone(),
            tags: project.tags.clone(),
            created_at: bson::DateTime::from_millis(project.created_at.timestamp_millis()),
            updated_at: bson::DateTime::from_millis(project.updated_at.timestamp_millis()),
        }
    }
}

impl From<ProjectDocument> for Project {
    fn from(document: ProjectDocument) -> Self {
        Self {
            id: ProjectId::from(document.id),
            title: document.title,
            description: document.description,
            app_type: document.app_type,
            app_url: document.app_url,
            app_store_url: document.app_store_url,
            play_store_url: document.play_store_url,
            github_url: document.github_url,
            tags: document.tags,
            created_at: to_utc(document.created_at),
            updated_at: to_utc(document.updated_at),
        }
    }
}

fn to_utc(value: bson::DateTime) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

fn by_id(id: ProjectId) -> Document {
    doc! { "_id": id.as_object_id() }
}

fn backend(error: mongodb::error::Error) -> StoreError {
    StoreError::Backend(error.to_string())
}

/// `$set` document for a patch. `updatedAt` is always refreshed.
fn set_document(patch: ProjectPatch, now: bson::DateTime) -> Document {
    let mut set = doc! { "updatedAt": now };
    let text_fields = [
        ("title", patch.title),
        ("description", patch.description),
        ("appUrl", patch.app_url),
        ("appStoreUrl", patch.app_store_url),
        ("playStoreUrl", patch.play_store_url),
        ("githubUrl", patch.github_url),
    ];
    for (key, value) in text_fields {
        if let Some(value) = value {
            set.insert(key, value);
        }
    }
    if let Some(app_type) = patch.app_type {
        set.insert("appType", app_type.as_str());
    }
    if let Some(tags) = patch.tags {
        set.insert("tags", tags);
    }
    set
}

pub struct MongoProjectStore {
    uri: String,
    database: String,
    client: OnceCell<Client>,
}

impl MongoProjectStore {
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            client: OnceCell::new(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.client.initialized()
    }

    async fn collection(&self) -> Result<Collection<ProjectDocument>, StoreError> {
        let client = self
            .client
            .get_or_try_init(|| async {
                let client = Client::with_uri_str(&self.uri).await.map_err(backend)?;
                tracing::info!(database = %self.database, "Connected to MongoDB");
                Ok::<_, StoreError>(client)
            })
            .await?;
        Ok(client
            .database(&self.database)
            .collection(PROJECTS_COLLECTION))
    }
}

#[async_trait]
impl ProjectStore for MongoProjectStore {
    async fn create(&self, project: NewProject) -> Result<Project, StoreError> {
        let collection = self.collection().await?;
        let project = project.into_project(ProjectId::generate(), timestamp_now());

        collection
            .insert_one(ProjectDocument::from(&project))
            .await
            .map_err(backend)?;
        Ok(project)
    }

    async fn get_all(&self) -> Result<Vec<Project>, StoreError> {
        let collection = self.collection().await?;
        let documents: Vec<ProjectDocument> = collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .await
            .map_err(backend)?
            .try_collect()
            .await
            .map_err(backend)?;
        Ok(documents.into_iter().map(Project::from).collect())
    }

    async fn get_by_id(&self, id: ProjectId) -> Result<Project, StoreError> {
        let collection = self.collection().await?;
        collection
            .find_one(by_id(id))
            .await
            .map_err(backend)?
            .map(Project::from)
            .ok_or(StoreError::NotFound)
    }

    async fn update(&self, id: ProjectId, patch: ProjectPatch) -> Result<Project, StoreError> {
        let collection = self.collection().await?;
        let now = bson::DateTime::from_millis(timestamp_now().timestamp_millis());

        collection
            .find_one_and_update(by_id(id), doc! { "$set": set_document(patch, now) })
            .return_document(ReturnDocument::After)
            .await
            .map_err(backend)?
            .map(Project::from)
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: ProjectId) -> Result<(), StoreError> {
        let collection = self.collection().await?;
        let result = collection.delete_one(by_id(id)).await.map_err(backend)?;
        if result.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
