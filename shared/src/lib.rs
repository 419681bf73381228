pub mod api;
pub mod config;
pub mod entity;
pub mod errors;
pub mod form;
pub mod tracer;
pub mod utils;
