// Projects service, the single entry point for project consumers.
//
// Responsibilities
// - Validate input before any storage access.
// - Delegate to the store and translate its outcome into a ServiceError.
// - Log storage failures here; callers only see a generic message.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::modules::projects::adapters::outbound::project_store::{ProjectStore, StoreError};
use crate::modules::projects::core::project::{Project, ProjectId};
use crate::modules::projects::core::validation::{
    ProjectInput, ValidationError, validate_create, validate_update,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Get,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Operation::List => "Failed to fetch projects",
            Operation::Create => "Failed to create project",
            Operation::Get => "Failed to fetch project",
            Operation::Update => "Failed to update project",
            Operation::Delete => "Failed to delete project",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid project ID")]
    InvalidIdentifier,

    #[error("Project not found")]
    NotFound,

    #[error("{0}")]
    Storage(Operation),
}

impl ServiceError {
    fn from_store(operation: Operation, error: StoreError) -> Self {
        match error {
            StoreError::NotFound => ServiceError::NotFound,
            StoreError::Backend(cause) => {
                tracing::error!(error = %cause, operation = ?operation, "Project store failure");
                ServiceError::Storage(operation)
            }
        }
    }
}

pub struct ProjectsService<TStore>
where
    TStore: ProjectStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> ProjectsService<TStore>
where
    TStore: ProjectStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub fn parse_id(raw: &str) -> Result<ProjectId, ServiceError> {
        ProjectId::parse(raw).ok_or(ServiceError::InvalidIdentifier)
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, ServiceError> {
        self.store
            .get_all()
            .await
            .map_err(|e| ServiceError::from_store(Operation::List, e))
    }

    pub async fn create_project(&self, input: ProjectInput) -> Result<Project, ServiceError> {
        let new_project = validate_create(input)?;
        let project = self
            .store
            .create(new_project)
            .await
            .map_err(|e| ServiceError::from_store(Operation::Create, e))?;
        tracing::info!(project_id = %project.id, "Project created");
        Ok(project)
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, ServiceError> {
        let id = Self::parse_id(id)?;
        self.store
            .get_by_id(id)
            .await
            .map_err(|e| ServiceError::from_store(Operation::Get, e))
    }

    pub async fn update_project(
        &self,
        id: &str,
        input: ProjectInput,
    ) -> Result<Project, ServiceError> {
        let id = Self::parse_id(id)?;
        let patch = validate_update(input)?;
        let project = self
            .store
            .update(id, patch)
            .await
            .map_err(|e| ServiceError::from_store(Operation::Update, e))?;
        tracing::info!(project_id = %project.id, "Project updated");
        Ok(project)
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), ServiceError> {
        let id = Self::parse_id(id)?;
        self.store
            .delete(id)
            .await
            .map_err(|e| ServiceError::from_store(Operation::Delete, e))?;
        tracing::info!(project_id = %id, "Project deleted");
        Ok(())
    }
}
