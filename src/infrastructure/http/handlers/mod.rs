//! HTTP Handlers

mod data;
mod fallback;
mod health;

pub use data::*;
pub use fallback::*;
pub use health::*;
