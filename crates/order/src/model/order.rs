use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One `orders` row left-joined with its `deliveries` and `payments` rows.
/// Joined columns are nullable because the related row may be missing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderModel {
    pub order_uid: String,
    pub track_number: String,
    pub entry: String,
    pub locale: String,
    pub internal_signature: String,
    pub customer_id: String,
    pub delivery_service: String,
    pub shardkey: String,
    pub sm_id: i32,
    pub date_created: DateTime<Utc>,
    pub oof_shard: String,

    pub delivery_name: Option<String>,
    pub delivery_phone: Option<String>,
    pub delivery_zip: Option<String>,
    pub delivery_city: Option<String>,
    pub delivery_address: Option<String>,
    pub delivery_region: Option<String>,
    pub delivery_email: Option<String>,

    pub payment_transaction: Option<String>,
    pub payment_request_id: Option<String>,
    pub payment_currency: Option<String>,
    pub payment_provider: Option<String>,
    pub payment_amount: Option<i32>,
    pub payment_dt: Option<i64>,
    pub payment_bank: Option<String>,
    pub payment_delivery_cost: Option<i32>,
    pub payment_goods_total: Option<i32>,
    pub payment_custom_fee: Option<i32>,
}
