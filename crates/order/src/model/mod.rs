mod order;
mod order_item;

pub use self::order::OrderModel;
pub use self::order_item::OrderItemModel;
