//! Diagnostic tracing setup and contextual logging helpers
//!
//! Diagnostics are written to stderr. Stdout is reserved for the
//! single-line JSON result records emitted by the reconciler.

use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Build the crate-scoped filter directive for a base level
pub fn filter_directive(log_level: &str) -> String {
    format!("reconciler={log_level},shared={log_level},reqwest=warn,hyper=warn")
}

/// Initialize the tracing subscriber with the given base level
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    fmt()
        .with_env_filter(EnvFilter::new(filter_directive(log_level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: &str, details: &str) {
    info!(
        component = component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: &str, context: &str, error: &dyn std::fmt::Display) {
    error!(
        component = component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for a completed run
pub fn log_outcome(component: &str, message: &str) {
    info!(
        component = component,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
