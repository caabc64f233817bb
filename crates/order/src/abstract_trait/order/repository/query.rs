use crate::model::{OrderItemModel, OrderModel};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError>;
    async fn find_by_id(&self, order_uid: &str) -> Result<Option<OrderModel>, RepositoryError>;
    async fn find_items_by_track_number(
        &self,
        track_number: &str,
    ) -> Result<Vec<OrderItemModel>, RepositoryError>;
}
