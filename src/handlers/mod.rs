mod dishes;
mod health;
mod restaurants;

pub use dishes::{dish_details, filter_dishes, list_dishes, sort_dishes_by_price};
pub use health::health_check;
pub use restaurants::{
    filter_restaurants, list_restaurants, restaurant_details, restaurants_by_cuisine,
    sort_restaurants_by_rating,
};
