// Port for project persistence.
//
// Responsibilities
// - Describe the CRUD capabilities the service needs from a document collection.
// - Implementations assign ids and timestamps, and must be safe to share between requests.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::projects::core::project::{NewProject, Project, ProjectId, ProjectPatch};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("project not found")]
    NotFound,

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn create(&self, project: NewProject) -> Result<Project, StoreError>;

    /// Newest first.
    async fn get_all(&self) -> Result<Vec<Project>, StoreError>;

    async fn get_by_id(&self, id: ProjectId) -> Result<Project, StoreError>;

    async fn update(&self, id: ProjectId, patch: ProjectPatch) -> Result<Project, StoreError>;

    async fn delete(&self, id: ProjectId) -> Result<(), StoreError>;
}
