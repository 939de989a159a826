pub mod order;
pub mod order_item;

pub use order::{Order, OrderStatus};
pub use order_item::{OrderItem, OrderItemOption};
