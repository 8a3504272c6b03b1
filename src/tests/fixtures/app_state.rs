// Application state wired to in memory stores, for handler and router tests.

use std::sync::Arc;

use crate::modules::projects::adapters::outbound::project_store_in_memory::InMemoryProjectStore;
use crate::shell::config::Environment;
use crate::shell::state::AppState;

pub fn make_test_state() -> AppState {
    make_state_for(Environment::Development)
}

pub fn make_state_for(environment: Environment) -> AppState {
    AppState::new(Arc::new(InMemoryProjectStore::new()), environment)
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryProjectStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(store), Environment::Development)
}
