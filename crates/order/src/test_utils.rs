//! In-memory stand-in for the order tables, shared by the service and handler
//! tests. Writes are staged on a copy and only published when every step
//! succeeds, which mirrors the transactional repository.

use crate::{
    abstract_trait::order::repository::{
        DynOrderCommandRepository, DynOrderQueryRepository, OrderCommandRepositoryTrait,
        OrderQueryRepositoryTrait,
    },
    domain::order::{Delivery, Item, Order, Payment},
    model::{OrderItemModel, OrderModel},
    repository::order::OrderRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::errors::RepositoryError;
use std::{
    collections::BTreeMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

#[derive(Debug, Default, Clone)]
struct Tables {
    orders: BTreeMap<String, Order>,
    deliveries: Vec<(String, Delivery)>,
    payments: Vec<Payment>,
    items: Vec<Item>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RowCounts {
    pub orders: usize,
    pub deliveries: usize,
    pub payments: usize,
    pub items: usize,
}

#[derive(Default)]
pub struct InMemoryOrderStore {
    tables: Mutex<Tables>,
    unavailable: AtomicBool,
    fail_item_insert_at: Mutex<Option<usize>>,
    fail_item_update_at: Mutex<Option<usize>>,
    item_queries: AtomicUsize,
}

impl InMemoryOrderStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn repository(self: &Arc<Self>) -> OrderRepository {
        OrderRepository {
            query: self.clone() as DynOrderQueryRepository,
            command: self.clone() as DynOrderCommandRepository,
        }
    }

    /// Inserts an aggregate directly, bypassing failure injection.
    pub fn seed(&self, order: Order) {
        let mut tables = self.tables.lock().unwrap();
        insert_all(&mut tables, &order, None).unwrap();
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Makes the insert of the item at `index` (zero based) fail.
    pub fn fail_item_insert_at(&self, index: usize) {
        *self.fail_item_insert_at.lock().unwrap() = Some(index);
    }

    /// Makes the update of the item at `index` (zero based) fail, after the
    /// header, delivery and payment have already been staged.
    pub fn fail_item_update_at(&self, index: usize) {
        *self.fail_item_update_at.lock().unwrap() = Some(index);
    }

    pub fn item_queries(&self) -> usize {
        self.item_queries.load(Ordering::SeqCst)
    }

    pub fn row_counts(&self) -> RowCounts {
        let tables = self.tables.lock().unwrap();
        RowCounts {
            orders: tables.orders.len(),
            deliveries: tables.deliveries.len(),
            payments: tables.payments.len(),
            items: tables.items.len(),
        }
    }

    pub fn header(&self, order_uid: &str) -> Option<Order> {
        self.tables.lock().unwrap().orders.get(order_uid).cloned()
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::unavailable(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

fn header_only(order: &Order) -> Order {
    Order {
        delivery: Delivery::default(),
        payment: Payment::default(),
        items: Vec::new(),
        ..order.clone()
    }
}

fn constraint_violation(msg: &str) -> RepositoryError {
    RepositoryError::from(sqlx::Error::Protocol(msg.to_string()))
}

fn insert_all(
    tables: &mut Tables,
    order: &Order,
    fail_item_at: Option<usize>,
) -> Result<(), RepositoryError> {
    if tables.orders.contains_key(&order.order_uid) {
        return Err(constraint_violation(
            "duplicate key value violates unique constraint \"orders_pkey\"",
        ));
    }

    tables
        .orders
        .insert(order.order_uid.clone(), header_only(order));
    tables
        .deliveries
        .push((order.order_uid.clone(), order.delivery.clone()));
    tables.payments.push(order.payment.clone());

    for (index, item) in order.items.iter().enumerate() {
        if fail_item_at == Some(index) {
            return Err(constraint_violation("value too long for type character varying"));
        }
        tables.items.push(item.clone());
    }

    Ok(())
}

fn joined_row(tables: &Tables, header: &Order) -> OrderModel {
    let delivery = tables
        .deliveries
        .iter()
        .find(|(uid, _)| *uid == header.order_uid)
        .map(|(_, d)| d);
    let payment = tables
        .payments
        .iter()
        .find(|p| p.transaction == header.order_uid);

    OrderModel {
        order_uid: header.order_uid.clone(),
        track_number: header.track_number.clone(),
        entry: header.entry.clone(),
        locale: header.locale.clone(),
        internal_signature: header.internal_signature.clone(),
        customer_id: header.customer_id.clone(),
        delivery_service: header.delivery_service.clone(),
        shardkey: header.shardkey.clone(),
        sm_id: header.sm_id,
        date_created: header.date_created,
        oof_shard: header.oof_shard.clone(),
        delivery_name: delivery.map(|d| d.name.clone()),
        delivery_phone: delivery.map(|d| d.phone.clone()),
        delivery_zip: delivery.map(|d| d.zip.clone()),
        delivery_city: delivery.map(|d| d.city.clone()),
        delivery_address: delivery.map(|d| d.address.clone()),
        delivery_region: delivery.map(|d| d.region.clone()),
        delivery_email: delivery.map(|d| d.email.clone()),
        payment_transaction: payment.map(|p| p.transaction.clone()),
        payment_request_id: payment.map(|p| p.request_id.clone()),
        payment_currency: payment.map(|p| p.currency.clone()),
        payment_provider: payment.map(|p| p.provider.clone()),
        payment_amount: payment.map(|p| p.amount),
        payment_dt: payment.map(|p| p.payment_dt),
        payment_bank: payment.map(|p| p.bank.clone()),
        payment_delivery_cost: payment.map(|p| p.delivery_cost),
        payment_goods_total: payment.map(|p| p.goods_total),
        payment_custom_fee: payment.map(|p| p.custom_fee),
    }
}

fn item_row(item: &Item) -> OrderItemModel {
    OrderItemModel {
        chrt_id: item.chrt_id,
        track_number: item.track_number.clone(),
        price: item.price,
        rid: item.rid.clone(),
        name: item.name.clone(),
        sale: item.sale,
        size: item.size.clone(),
        total_price: item.total_price,
        nm_id: item.nm_id,
        brand: item.brand.clone(),
        status: item.status,
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for InMemoryOrderStore {
    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError> {
        self.check_available()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .orders
            .values()
            .map(|header| joined_row(&tables, header))
            .collect())
    }

    async fn find_by_id(&self, order_uid: &str) -> Result<Option<OrderModel>, RepositoryError> {
        self.check_available()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .orders
            .get(order_uid)
            .map(|header| joined_row(&tables, header)))
    }

    async fn find_items_by_track_number(
        &self,
        track_number: &str,
    ) -> Result<Vec<OrderItemModel>, RepositoryError> {
        self.check_available()?;
        self.item_queries.fetch_add(1, Ordering::SeqCst);
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .items
            .iter()
            .filter(|item| item.track_number == track_number)
            .map(item_row)
            .collect())
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for InMemoryOrderStore {
    async fn create_order(&self, order: &Order) -> Result<(), RepositoryError> {
        self.check_available()?;
        let fail_at = *self.fail_item_insert_at.lock().unwrap();
        let mut tables = self.tables.lock().unwrap();

        let mut staged = tables.clone();
        insert_all(&mut staged, order, fail_at)?;
        *tables = staged;

        Ok(())
    }

    async fn update_order(&self, order: &Order) -> Result<(), RepositoryError> {
        self.check_available()?;
        let fail_at = *self.fail_item_update_at.lock().unwrap();
        let mut tables = self.tables.lock().unwrap();

        let mut staged = tables.clone();

        if let Some(header) = staged.orders.get_mut(&order.order_uid) {
            *header = header_only(order);
        }
        for (uid, delivery) in staged.deliveries.iter_mut() {
            if *uid == order.order_uid {
                *delivery = order.delivery.clone();
            }
        }
        for payment in staged.payments.iter_mut() {
            if payment.transaction == order.payment.transaction {
                *payment = order.payment.clone();
            }
        }
        for (index, item) in order.items.iter().enumerate() {
            if fail_at == Some(index) {
                return Err(constraint_violation(
                    "new row for relation \"items\" violates check constraint",
                ));
            }
            for stored in staged.items.iter_mut() {
                if stored.track_number == item.track_number {
                    *stored = item.clone();
                }
            }
        }

        *tables = staged;
        Ok(())
    }

    async fn delete_order(&self, order_uid: &str) -> Result<u64, RepositoryError> {
        self.check_available()?;
        let mut tables = self.tables.lock().unwrap();

        let removed = tables.orders.remove(order_uid).is_some();
        if removed {
            // ON DELETE CASCADE covers deliveries and payments only.
            tables.deliveries.retain(|(uid, _)| uid != order_uid);
            tables.payments.retain(|p| p.transaction != order_uid);
        }

        Ok(u64::from(removed))
    }
}

/// A fully populated order whose items all carry `track_number`.
pub fn sample_order(order_uid: &str, track_number: &str, item_count: usize) -> Order {
    Order {
        order_uid: order_uid.to_string(),
        track_number: track_number.to_string(),
        entry: "WBIL".into(),
        locale: "en".into(),
        internal_signature: String::new(),
        customer_id: "test".into(),
        delivery_service: "meest".into(),
        shardkey: "9".into(),
        sm_id: 99,
        date_created: DateTime::parse_from_rfc3339("2021-11-26T06:22:19Z")
            .unwrap()
            .with_timezone(&Utc),
        oof_shard: "1".into(),
        delivery: Delivery {
            name: "Test Testov".into(),
            phone: "+9720000000".into(),
            zip: "2639809".into(),
            city: "Kiryat Mozkin".into(),
            address: "Ploshad Mira 15".into(),
            region: "Kraiot".into(),
            email: "test@gmail.com".into(),
        },
        payment: Payment {
            transaction: order_uid.to_string(),
            request_id: String::new(),
            currency: "USD".into(),
            provider: "wbpay".into(),
            amount: 1817,
            payment_dt: 1637907727,
            bank: "alpha".into(),
            delivery_cost: 1500,
            goods_total: 317,
            custom_fee: 0,
        },
        items: (0..item_count)
            .map(|i| Item {
                chrt_id: 9934930 + i as i64,
                track_number: track_number.to_string(),
                price: 453,
                rid: format!("ab4219087a764ae0btest{i}"),
                name: "Mascaras".into(),
                sale: 30,
                size: "0".into(),
                total_price: 317,
                nm_id: 2389212,
                brand: "Vivienne Sabo".into(),
                status: 202,
            })
            .collect(),
    }
}
