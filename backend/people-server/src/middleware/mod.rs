pub mod access_guard;
pub mod auth;
pub mod request_logging;
