pub mod app;
pub mod narrative;
pub mod page;
pub mod selector;
