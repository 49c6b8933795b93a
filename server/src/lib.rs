//! Proglog HTTP gateway.
//!
//! Adapts JSON requests to calls against a shared [`Log`](proglog_kernel::log::Log).

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod http;

pub use config::{CliArgs, ServerConfig};
pub use http::LogServer;
