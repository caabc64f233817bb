use crate::{
    abstract_trait::order::{repository::DynOrderQueryRepository, service::OrderQueryServiceTrait},
    domain::order::{Item, Order},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }

    async fn with_items(&self, mut order: Order) -> Result<Order, RepositoryError> {
        order.items = self
            .query
            .find_items_by_track_number(&order.track_number)
            .await?
            .into_iter()
            .map(Item::from)
            .collect();

        Ok(order)
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self) -> Result<Vec<Order>, ServiceError> {
        info!("📦 Finding all orders");

        let rows = match self.query.find_all().await {
            Ok(rows) => rows,
            Err(e) => {
                error!("❌ Failed to find orders: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        let mut orders = Vec::with_capacity(rows.len());

        for row in rows {
            let order = self.with_items(Order::from(row)).await.map_err(|e| {
                error!("❌ Failed to load order items: {e:?}");
                ServiceError::Repo(e)
            })?;

            orders.push(order);
        }

        info!("✅ Found {} orders", orders.len());

        Ok(orders)
    }

    async fn find_by_id(&self, order_uid: &str) -> Result<Order, ServiceError> {
        info!("🆔 Finding order by ID: {order_uid}");

        let row = match self.query.find_by_id(order_uid).await {
            Ok(row) => row,
            Err(e) => {
                error!("❌ Database error while finding order {order_uid}: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        // An unknown id answers with an empty record rather than an error.
        let Some(row) = row else {
            info!("Order {order_uid} not found, returning empty record");
            return Ok(Order::default());
        };

        let order = self.with_items(Order::from(row)).await.map_err(|e| {
            error!("❌ Failed to load items for order {order_uid}: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!(
            "✅ Found order: ID={order_uid}, items={}",
            order.items.len()
        );

        Ok(order)
    }
}
