//! Reconciler service implementations

pub mod authorize_net;
pub mod event_logger;
pub mod http_transport;
pub mod shopify;

#[cfg(test)]
pub mod tests;

pub use authorize_net::*;
pub use event_logger::*;
pub use http_transport::*;
pub use shopify::*;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ReconcileError, ReconcileResult};

/// Decode a JSON body into a typed response; failures are shape errors
pub(crate) fn decode_body<T: DeserializeOwned>(url: &str, body: Value) -> ReconcileResult<T> {
    serde_json::from_value(body)
        .map_err(|e| ReconcileError::data_shape(format!("{url}: {e}")))
}
