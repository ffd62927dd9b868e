//! Shared application state for all routes.

use crate::service::SchoolRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub schools: Arc<dyn SchoolRepository>,
}

impl AppState {
    pub fn new(schools: impl SchoolRepository + 'static) -> Self {
        AppState {
            schools: Arc::new(schools),
        }
    }
}
