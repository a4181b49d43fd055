pub mod brands;
pub mod catalog;
pub mod compatibility;
pub mod config;
pub mod errors;
pub mod showcase;
pub mod tablet;
pub mod types;
