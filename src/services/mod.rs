pub mod api;
pub mod flag_service;

pub use flag_service::*;
