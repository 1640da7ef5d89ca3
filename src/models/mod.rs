mod dish;
mod restaurant;

pub use dish::Dish;
pub use restaurant::Restaurant;
