pub mod auth;
pub mod notification;
pub mod order;
pub mod payment;
pub mod restaurant;
pub mod user;

mod schema;
pub use schema::{build_schema, AppSchema};
