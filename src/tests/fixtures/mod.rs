pub mod app_state;
pub mod project_input;
