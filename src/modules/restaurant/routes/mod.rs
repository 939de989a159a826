pub mod all_categories;
pub mod all_restaurants;
pub mod category;
pub mod create_dish;
pub mod create_restaurant;
pub mod delete_dish;
pub mod delete_restaurant;
pub mod edit_dish;
pub mod edit_restaurant;
pub mod my_restaurant;
pub mod my_restaurants;
pub mod restaurant;
pub mod search_restaurant;
