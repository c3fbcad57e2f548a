pub mod config;
pub mod logging;
pub mod module;
pub mod page;
pub mod server;
pub mod service;
