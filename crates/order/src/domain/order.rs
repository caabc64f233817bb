use crate::model::{OrderItemModel, OrderModel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The order aggregate: header, one delivery, one payment and its items.
///
/// Every field is optional on input and takes its zero value when omitted,
/// so an update with a partial body still overwrites every column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Order {
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
    pub delivery: Delivery,
    pub payment: Payment,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Delivery {
    pub name: String,
    pub phone: String,
    pub zip: String,
    pub city: String,
    pub address: String,
    pub region: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Payment {
    /// Equal to the owning order's `order_uid`.
    pub transaction: String,
    pub request_id: String,
    pub currency: String,
    pub provider: String,
    pub amount: i32,
    /// Unix seconds.
    pub payment_dt: i64,
    pub bank: String,
    pub delivery_cost: i32,
    pub goods_total: i32,
    pub custom_fee: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Item {
    pub chrt_id: i64,
    /// Joins the item to the order with the same `track_number`.
    pub track_number: String,
    pub price: i32,
    pub rid: String,
    pub name: String,
    pub sale: i32,
    pub size: String,
    pub total_price: i32,
    pub nm_id: i64,
    pub brand: String,
    pub status: i32,
}

// model to response, items are loaded separately
impl From<OrderModel> for Order {
    fn from(value: OrderModel) -> Self {
        Order {
            order_uid: value.order_uid,
            track_number: value.track_number,
            entry: value.entry,
            locale: value.locale,
            internal_signature: value.internal_signature,
            customer_id: value.customer_id,
            delivery_service: value.delivery_service,
            shardkey: value.shardkey,
            sm_id: value.sm_id,
            date_created: value.date_created,
            oof_shard: value.oof_shard,
            delivery: Delivery {
                name: value.delivery_name.unwrap_or_default(),
                phone: value.delivery_phone.unwrap_or_default(),
                zip: value.delivery_zip.unwrap_or_default(),
                city: value.delivery_city.unwrap_or_default(),
                address: value.delivery_address.unwrap_or_default(),
                region: value.delivery_region.unwrap_or_default(),
                email: value.delivery_email.unwrap_or_default(),
            },
            payment: Payment {
                transaction: value.payment_transaction.unwrap_or_default(),
                request_id: value.payment_request_id.unwrap_or_default(),
                currency: value.payment_currency.unwrap_or_default(),
                provider: value.payment_provider.unwrap_or_default(),
                amount: value.payment_amount.unwrap_or_default(),
                payment_dt: value.payment_dt.unwrap_or_default(),
                bank: value.payment_bank.unwrap_or_default(),
                delivery_cost: value.payment_delivery_cost.unwrap_or_default(),
                goods_total: value.payment_goods_total.unwrap_or_default(),
                custom_fee: value.payment_custom_fee.unwrap_or_default(),
            },
            items: Vec::new(),
        }
    }
}

impl From<OrderItemModel> for Item {
    fn from(value: OrderItemModel) -> Self {
        Item {
            chrt_id: value.chrt_id,
            track_number: value.track_number,
            price: value.price,
            rid: value.rid,
            name: value.name,
            sale: value.sale,
            size: value.size,
            total_price: value.total_price,
            nm_id: value.nm_id,
            brand: value.brand,
            status: value.status,
        }
    }
}
