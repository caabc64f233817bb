mod command;
mod query;

pub use self::command::OrderCommandRepository;
pub use self::query::OrderQueryRepository;

use crate::abstract_trait::order::repository::{
    DynOrderCommandRepository, DynOrderQueryRepository,
};
use shared::config::ConnectionPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct OrderRepository {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
}

impl OrderRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        let query = Arc::new(OrderQueryRepository::new(pool.clone())) as DynOrderQueryRepository;

        let command = Arc::new(OrderCommandRepository::new(pool)) as DynOrderCommandRepository;

        Self { query, command }
    }
}
