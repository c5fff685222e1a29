//! Prior-authorization capture reconciler
//!
//! Captures a stored Authorize.net authorization for a Shopify order and,
//! when the gateway approves and the order is not yet paid, records a manual
//! capture transaction back on the order.

pub mod core;
pub mod error;
pub mod reconciler_impl;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use error::{ReconcileError, ReconcileResult};
pub use reconciler_impl::{ReconcileOutcome, Reconciler};
pub use services::{AuthorizeNetGateway, JsonLinesLogger, ReqwestTransport, ShopifyOrderPlatform};
pub use traits::*;
pub use types::*;
