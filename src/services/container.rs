//! Service Container - Centralized service access.
//!
//! Wires repositories into services once, then hands out shared
//! trait objects to the API layer.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{UserManager, UserService};
use crate::infra::{UserRepository, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a service container from already built services
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create a service container backed by the given repository
    pub fn from_repository(repo: Arc<dyn UserRepository>) -> Self {
        Self::new(Arc::new(UserManager::new(repo)))
    }

    /// Create a service container backed by a SeaORM connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self::from_repository(Arc::new(UserStore::new(db)))
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
