pub mod config;
pub mod data;
pub mod error;
pub mod request_log;
