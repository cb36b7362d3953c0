use crate::store::MotdStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: MotdStore,
}

impl AppState {
    pub fn new(store: MotdStore) -> Self {
        Self { store }
    }
}
