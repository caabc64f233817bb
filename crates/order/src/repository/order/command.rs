use crate::{abstract_trait::order::repository::OrderCommandRepositoryTrait, domain::order::Order};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, order: &Order) -> Result<(), RepositoryError> {
        // Dropping `tx` on any early return rolls the whole insert back.
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {:?}", e);
            RepositoryError::unavailable(e)
        })?;

        sqlx::query(
            r#"
            INSERT INTO orders (
                order_uid, track_number, entry, locale, internal_signature, customer_id,
                delivery_service, shardkey, sm_id, date_created, oof_shard
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(&order.order_uid)
        .bind(&order.track_number)
        .bind(&order.entry)
        .bind(&order.locale)
        .bind(&order.internal_signature)
        .bind(&order.customer_id)
        .bind(&order.delivery_service)
        .bind(&order.shardkey)
        .bind(order.sm_id)
        .bind(order.date_created)
        .bind(&order.oof_shard)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to insert order {}: {:?}", order.order_uid, err);
            RepositoryError::from(err)
        })?;

        let delivery = &order.delivery;

        sqlx::query(
            r#"
            INSERT INTO deliveries (order_uid, name, phone, zip, city, address, region, email)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&order.order_uid)
        .bind(&delivery.name)
        .bind(&delivery.phone)
        .bind(&delivery.zip)
        .bind(&delivery.city)
        .bind(&delivery.address)
        .bind(&delivery.region)
        .bind(&delivery.email)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to insert delivery for order {}: {:?}",
                order.order_uid, err
            );
            RepositoryError::from(err)
        })?;

        let payment = &order.payment;

        sqlx::query(
            r#"
            INSERT INTO payments (
                "transaction", request_id, currency, provider, amount, payment_dt,
                bank, delivery_cost, goods_total, custom_fee
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(&payment.transaction)
        .bind(&payment.request_id)
        .bind(&payment.currency)
        .bind(&payment.provider)
        .bind(payment.amount)
        .bind(payment.payment_dt)
        .bind(&payment.bank)
        .bind(payment.delivery_cost)
        .bind(payment.goods_total)
        .bind(payment.custom_fee)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to insert payment {} for order {}: {:?}",
                payment.transaction, order.order_uid, err
            );
            RepositoryError::from(err)
        })?;

        for item in &order.items {
            sqlx::query(
                r#"
                INSERT INTO items (
                    chrt_id, track_number, price, rid, name, sale, size,
                    total_price, nm_id, brand, status
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                "#,
            )
            .bind(item.chrt_id)
            .bind(&item.track_number)
            .bind(item.price)
            .bind(&item.rid)
            .bind(&item.name)
            .bind(item.sale)
            .bind(&item.size)
            .bind(item.total_price)
            .bind(item.nm_id)
            .bind(&item.brand)
            .bind(item.status)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to insert item {} for order {}: {:?}",
                    item.chrt_id, order.order_uid, err
                );
                RepositoryError::from(err)
            })?;
        }

        tx.commit().await.map_err(|err| {
            error!("❌ Failed to commit order {}: {:?}", order.order_uid, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created order {} with {} items",
            order.order_uid,
            order.items.len()
        );
        Ok(())
    }

    async fn update_order(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {:?}", e);
            RepositoryError::unavailable(e)
        })?;

        sqlx::query(
            r#"
            UPDATE orders
            SET track_number       = $2,
                entry              = $3,
                locale             = $4,
                internal_signature = $5,
                customer_id        = $6,
                delivery_service   = $7,
                shardkey           = $8,
                sm_id              = $9,
                date_created       = $10,
                oof_shard          = $11
            WHERE order_uid = $1
            "#,
        )
        .bind(&order.order_uid)
        .bind(&order.track_number)
        .bind(&order.entry)
        .bind(&order.locale)
        .bind(&order.internal_signature)
        .bind(&order.customer_id)
        .bind(&order.delivery_service)
        .bind(&order.shardkey)
        .bind(order.sm_id)
        .bind(order.date_created)
        .bind(&order.oof_shard)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update order {}: {:?}", order.order_uid, err);
            RepositoryError::from(err)
        })?;

        let delivery = &order.delivery;

        sqlx::query(
            r#"
            UPDATE deliveries
            SET name    = $2,
                phone   = $3,
                zip     = $4,
                city    = $5,
                address = $6,
                region  = $7,
                email   = $8
            WHERE order_uid = $1
            "#,
        )
        .bind(&order.order_uid)
        .bind(&delivery.name)
        .bind(&delivery.phone)
        .bind(&delivery.zip)
        .bind(&delivery.city)
        .bind(&delivery.address)
        .bind(&delivery.region)
        .bind(&delivery.email)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to update delivery for order {}: {:?}",
                order.order_uid, err
            );
            RepositoryError::from(err)
        })?;

        let payment = &order.payment;

        sqlx::query(
            r#"
            UPDATE payments
            SET request_id    = $2,
                currency      = $3,
                provider      = $4,
                amount        = $5,
                payment_dt    = $6,
                bank          = $7,
                delivery_cost = $8,
                goods_total   = $9,
                custom_fee    = $10
            WHERE "transaction" = $1
            "#,
        )
        .bind(&payment.transaction)
        .bind(&payment.request_id)
        .bind(&payment.currency)
        .bind(&payment.provider)
        .bind(payment.amount)
        .bind(payment.payment_dt)
        .bind(&payment.bank)
        .bind(payment.delivery_cost)
        .bind(payment.goods_total)
        .bind(payment.custom_fee)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to update payment {}: {:?}",
                payment.transaction, err
            );
            RepositoryError::from(err)
        })?;

        // Items carry no key of their own: every row sharing the track number
        // is overwritten, so with several items the last one wins.
        for item in &order.items {
            sqlx::query(
                r#"
                UPDATE items
                SET chrt_id     = $2,
                    price       = $3,
                    rid         = $4,
                    name        = $5,
                    sale        = $6,
                    size        = $7,
                    total_price = $8,
                    nm_id       = $9,
                    brand       = $10,
                    status      = $11
                WHERE track_number = $1
                "#,
            )
            .bind(&item.track_number)
            .bind(item.chrt_id)
            .bind(item.price)
            .bind(&item.rid)
            .bind(&item.name)
            .bind(item.sale)
            .bind(&item.size)
            .bind(item.total_price)
            .bind(item.nm_id)
            .bind(&item.brand)
            .bind(item.status)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to update items with track number {}: {:?}",
                    item.track_number, err
                );
                RepositoryError::from(err)
            })?;
        }

        tx.commit().await.map_err(|err| {
            error!(
                "❌ Failed to commit update of order {}: {:?}",
                order.order_uid, err
            );
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated order {}", order.order_uid);
        Ok(())
    }

    async fn delete_order(&self, order_uid: &str) -> Result<u64, RepositoryError> {
        info!("❌ Hard deleting order: {}", order_uid);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::unavailable(e)
        })?;

        let result = sqlx::query(
            r#"
            DELETE FROM orders
            WHERE order_uid = $1
            "#,
        )
        .bind(order_uid)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete order {}: {:?}", order_uid, e);
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected())
    }
}
