pub mod user;
pub mod verification;

pub use user::{Role, User};
