pub mod create_order;
pub mod edit_order;
pub mod get_order;
pub mod get_orders;
pub mod take_order;
