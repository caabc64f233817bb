use crate::domain::order::Order;
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Inserts the header, delivery, payment and every item atomically.
    async fn create_order(&self, order: &Order) -> Result<(), RepositoryError>;
    /// Overwrites the stored rows keyed by the order's own identifiers.
    async fn update_order(&self, order: &Order) -> Result<(), RepositoryError>;
    /// Returns the number of `orders` rows removed.
    async fn delete_order(&self, order_uid: &str) -> Result<u64, RepositoryError>;
}
