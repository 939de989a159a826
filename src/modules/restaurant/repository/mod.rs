pub mod category;
pub mod dish;
pub mod restaurant;

pub use category::Category;
pub use dish::{Dish, DishChoice, DishOption};
pub use restaurant::Restaurant;
