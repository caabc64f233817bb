use crate::domain::order::Order;
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<Order>, ServiceError>;
    async fn find_by_id(&self, order_uid: &str) -> Result<Order, ServiceError>;
}
