//! Query Handlers 实现

mod health_handlers;

pub use health_handlers::*;
