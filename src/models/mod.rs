pub mod cart;
pub mod payment;
pub mod product;
