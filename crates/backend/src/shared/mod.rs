pub mod config;
pub mod format;
pub mod remote_api;
pub mod request_logger;
