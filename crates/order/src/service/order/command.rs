use crate::{
    abstract_trait::order::{
        repository::DynOrderCommandRepository, service::OrderCommandServiceTrait,
    },
    domain::order::Order,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct OrderCommandService {
    command: DynOrderCommandRepository,
}

impl OrderCommandService {
    pub fn new(command: DynOrderCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(&self, req: &Order) -> Result<(), ServiceError> {
        info!(
            "🏗️ Creating order {} with {} items",
            req.order_uid,
            req.items.len()
        );

        if let Err(e) = self.command.create_order(req).await {
            error!("❌ Failed to create order {}: {e:?}", req.order_uid);
            return Err(ServiceError::Repo(e));
        }

        info!("✅ Order {} created", req.order_uid);
        Ok(())
    }

    async fn update_order(&self, path_id: &str, req: &Order) -> Result<(), ServiceError> {
        info!("🔄 Updating order {}", req.order_uid);

        // The body's own keys select the rows; the path id is informational.
        if path_id != req.order_uid {
            warn!(
                "Path id {path_id} differs from body order_uid {}; updating by body",
                req.order_uid
            );
        }

        if let Err(e) = self.command.update_order(req).await {
            error!("❌ Failed to update order {}: {e:?}", req.order_uid);
            return Err(ServiceError::Repo(e));
        }

        info!("✅ Order {} updated", req.order_uid);
        Ok(())
    }

    async fn delete_order(&self, order_uid: &str) -> Result<(), ServiceError> {
        info!("🗑️ Deleting order {order_uid}");

        match self.command.delete_order(order_uid).await {
            Ok(0) => {
                info!("Order {order_uid} did not exist, nothing deleted");
                Ok(())
            }
            Ok(_) => {
                info!("✅ Order {order_uid} deleted");
                Ok(())
            }
            Err(e) => {
                error!("❌ Failed to delete order {order_uid}: {e:?}");
                Err(ServiceError::Repo(e))
            }
        }
    }
}
