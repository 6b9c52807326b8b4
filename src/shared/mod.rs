pub mod config;
pub mod cors;
pub mod database;
pub mod http_error;
pub mod rto;
