// Shared test fixture for project request bodies.
// The defaults come from `json/project_input.json`, a valid web project.

use crate::modules::projects::core::validation::{ProjectInput, TagsInput};

pub struct ProjectInputBuilder {
    inner: ProjectInput,
}

impl Default for ProjectInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ProjectInputBuilder {
    pub fn new() -> Self {
        let inner: ProjectInput = serde_json::from_str(include_str!("json/project_input.json"))
            .expect("project_input.json is a valid ProjectInput");
        Self { inner }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = Some(v.into());
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn app_type(mut self, v: impl Into<String>) -> Self {
        self.inner.app_type = Some(v.into());
        self
    }

    pub fn app_url(mut self, v: impl Into<String>) -> Self {
        self.inner.app_url = Some(v.into());
        self
    }

    pub fn app_store_url(mut self, v: impl Into<String>) -> Self {
        self.inner.app_store_url = Some(v.into());
        self
    }

    pub fn play_store_url(mut self, v: impl Into<String>) -> Self {
        self.inner.play_store_url = Some(v.into());
        self
    }

    pub fn github_url(mut self, v: impl Into<String>) -> Self {
        self.inner.github_url = Some(v.into());
        self
    }

    pub fn tags(mut self, v: &[&str]) -> Self {
        self.inner.tags = Some(TagsInput::List(v.iter().map(|t| t.to_string()).collect()));
        self
    }

    pub fn without_tags(mut self) -> Self {
        self.inner.tags = None;
        self
    }

    pub fn build(self) -> ProjectInput {
        self.inner
    }

    pub fn to_json(self) -> String {
        serde_json::to_string(&self.inner).expect("ProjectInput serializes")
    }
}

#[cfg(test)]
mod project_input_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ProjectInputBuilder::default().build();
        assert_eq!(built.title.as_deref(), Some("Portfolio"));
        assert_eq!(built.app_type.as_deref(), Some("web"));
        assert_eq!(
            built.tags,
            Some(TagsInput::List(vec!["Rust".to_string(), "Axum".to_string()]))
        );
        assert_eq!(built.app_store_url, None);
    }

    #[rstest]
    fn setters_override_fields_and_serialize_in_camel_case() {
        let json = ProjectInputBuilder::new()
            .title("App")
            .app_type("mobile")
            .play_store_url("https://play.google.com/store/apps/details?id=x")
            .to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "App");
        assert_eq!(value["appType"], "mobile");
        assert_eq!(
            value["playStoreUrl"],
            "https://play.google.com/store/apps/details?id=x"
        );
        assert!(value.get("appStoreUrl").is_none());
    }
}
