pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod page;
pub mod route;
pub mod search;
pub mod store;
pub mod ui;
