//! Command Handlers 实现

mod data_handlers;

pub use data_handlers::*;
