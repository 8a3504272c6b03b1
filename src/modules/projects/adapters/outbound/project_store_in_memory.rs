// In memory implementation of the ProjectStore port.
//
// Purpose
// - Serve tests and local development without a database.
//
// Responsibilities
// - Keep projects in a map keyed by id.
// - Simulate a backend outage when toggled offline.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::projects::adapters::outbound::project_store::{ProjectStore, StoreError};
use crate::modules::projects::core::project::{
    NewProject, Project, ProjectId, ProjectPatch, timestamp_now,
};

#[derive(Default)]
pub struct InMemoryProjectStore {
    projects: RwLock<HashMap<ProjectId, Project>>,
    is_offline: bool,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Project store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn create(&self, project: NewProject) -> Result<Project, StoreError> {
        self.ensure_online()?;

        let project = project.into_project(ProjectId::generate(), timestamp_now());
        self.projects
            .write()
            .await
            .insert(project.id, project.clone());
        Ok(project)
    }

    async fn get_all(&self) -> Result<Vec<Project>, StoreError> {
        self.ensure_online()?;

        let mut projects: Vec<Project> = self.projects.read().await.values().cloned().collect();
        // ObjectIds grow within a process, so they order projects created in the same millisecond.
        projects.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(projects)
    }

    async fn get_by_id(&self, id: ProjectId) -> Result<Project, StoreError> {
        self.ensure_online()?;

        self.projects
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn update(&self, id: ProjectId, patch: ProjectPatch) -> Result<Project, StoreError> {
        self.ensure_online()?;

        let mut guard = self.projects.write().await;
        let project = guard.get_mut(&id).ok_or(StoreError::NotFound)?;
        patch.apply_to(project, timestamp_now());
        Ok(project.clone())
    }

    async fn delete(&self, id: ProjectId) -> Result<(), StoreError> {
        self.ensure_online()?;

        self.projects
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}
