use crate::domain::order::Order;
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(&self, req: &Order) -> Result<(), ServiceError>;
    async fn update_order(&self, path_id: &str, req: &Order) -> Result<(), ServiceError>;
    async fn delete_order(&self, order_uid: &str) -> Result<(), ServiceError>;
}
