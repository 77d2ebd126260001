pub mod category;
pub mod price;
