//! Shared plumbing for the capture reconciler
//!
//! Configuration loading, error types and tracing setup used by the
//! reconciler library and its binary.

pub mod config;
pub mod errors;
pub mod logging;

pub use config::{AppConfig, GatewayConfig, PlatformConfig};
pub use errors::*;
