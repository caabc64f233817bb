use crate::{di::DependenciesInject, repository::order::OrderRepository};
use shared::config::ConnectionPool;
use std::fmt;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            di_container: DependenciesInject::new(pool),
        }
    }

    pub fn from_repository(repository: OrderRepository) -> Self {
        Self {
            di_container: DependenciesInject::with_repository(repository),
        }
    }
}
