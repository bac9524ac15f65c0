use std::sync::Arc;

use crate::{config::AppConfig, services::ServiceContext};

/// Process-wide dependencies, built once at startup and shared read-only.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub services: ServiceContext,
}

impl AppState {
    pub fn new(config: AppConfig, services: ServiceContext) -> Arc<Self> {
        Arc::new(Self { config, services })
    }
}
