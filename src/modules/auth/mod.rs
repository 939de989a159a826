pub mod guard;
pub mod middleware;
pub mod service;

pub use guard::Auth;
