pub mod cache;
pub mod data_loader;
pub mod error;
pub mod table;
