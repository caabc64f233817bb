use crate::{
    abstract_trait::order::service::{DynOrderCommandService, DynOrderQueryService},
    repository::order::OrderRepository,
    service::order::{OrderCommandService, OrderQueryService},
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_query", &"OrderQueryService")
            .field("order_command", &"OrderCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        Self::with_repository(OrderRepository::new(pool))
    }

    pub fn with_repository(repository: OrderRepository) -> Self {
        let OrderRepository { query, command } = repository;

        let order_query = Arc::new(OrderQueryService::new(query)) as DynOrderQueryService;
        let order_command = Arc::new(OrderCommandService::new(command)) as DynOrderCommandService;

        Self {
            order_query,
            order_command,
        }
    }
}
