pub mod inventory;
pub mod products;
