use crate::{
    abstract_trait::order::repository::OrderQueryRepositoryTrait,
    model::{OrderItemModel, OrderModel},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

// DISTINCT ON keeps one row per order even if a related table holds duplicates.
const SELECT_ORDER_AGGREGATE: &str = r#"
    SELECT DISTINCT ON (o.order_uid)
        o.order_uid,
        o.track_number,
        o.entry,
        o.locale,
        o.internal_signature,
        o.customer_id,
        o.delivery_service,
        o.shardkey,
        o.sm_id,
        o.date_created,
        o.oof_shard,
        d.name          AS delivery_name,
        d.phone         AS delivery_phone,
        d.zip           AS delivery_zip,
        d.city          AS delivery_city,
        d.address       AS delivery_address,
        d.region        AS delivery_region,
        d.email         AS delivery_email,
        p."transaction" AS payment_transaction,
        p.request_id    AS payment_request_id,
        p.currency      AS payment_currency,
        p.provider      AS payment_provider,
        p.amount        AS payment_amount,
        p.payment_dt    AS payment_dt,
        p.bank          AS payment_bank,
        p.delivery_cost AS payment_delivery_cost,
        p.goods_total   AS payment_goods_total,
        p.custom_fee    AS payment_custom_fee
    FROM orders o
    LEFT JOIN deliveries d ON d.order_uid = o.order_uid
    LEFT JOIN payments p ON p."transaction" = o.order_uid
"#;

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError> {
        info!("🔍 Fetching all orders");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::unavailable(e)
        })?;

        let sql = format!("{SELECT_ORDER_AGGREGATE} ORDER BY o.order_uid");

        let orders = sqlx::query_as::<_, OrderModel>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch orders: {:?}", e);
                RepositoryError::from(e)
            })?;

        info!("✅ Fetched {} orders", orders.len());
        Ok(orders)
    }

    async fn find_by_id(&self, order_uid: &str) -> Result<Option<OrderModel>, RepositoryError> {
        info!("🆔 Fetching order by ID: {}", order_uid);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::unavailable(e)
        })?;

        let sql = format!("{SELECT_ORDER_AGGREGATE} WHERE o.order_uid = $1 ORDER BY o.order_uid");

        let order = sqlx::query_as::<_, OrderModel>(&sql)
            .bind(order_uid)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch order {}: {:?}", order_uid, e);
                RepositoryError::from(e)
            })?;

        Ok(order)
    }

    async fn find_items_by_track_number(
        &self,
        track_number: &str,
    ) -> Result<Vec<OrderItemModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::unavailable(e)
        })?;

        let items = sqlx::query_as::<_, OrderItemModel>(
            r#"
            SELECT chrt_id, track_number, price, rid, name, sale, size,
                   total_price, nm_id, brand, status
            FROM items
            WHERE track_number = $1
            ORDER BY id
            "#,
        )
        .bind(track_number)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to fetch items for track number {}: {:?}",
                track_number, e
            );
            RepositoryError::from(e)
        })?;

        Ok(items)
    }
}
