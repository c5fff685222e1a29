//! Reconciler trait definitions for dependency injection

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ReconcileResult;
use crate::types::{
    CaptureRequest, CaptureResult, GatewayResultRecord, Metafield, Order, OrderLocator,
    OrderTransaction, PaymentRecord, PlatformResultRecord,
};

/// Request headers as ordered name/value pairs
pub type Headers = Vec<(String, String)>;

/// HTTP transport returning parsed JSON bodies
#[mockall::automock]
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET a JSON resource
    async fn get(&self, url: &str, headers: &Headers) -> ReconcileResult<Value>;

    /// POST a JSON body and parse the JSON reply
    async fn post(&self, url: &str, headers: &Headers, body: &Value) -> ReconcileResult<Value>;
}

/// Order platform operations the reconciler depends on
#[mockall::automock]
#[async_trait]
pub trait OrderPlatform: Send + Sync {
    /// Fetch the order resource
    async fn fetch_order(&self, order: &OrderLocator) -> ReconcileResult<Order>;

    /// Fetch the order's transactions in platform order
    async fn fetch_transactions(&self, order: &OrderLocator) -> ReconcileResult<Vec<OrderTransaction>>;

    /// Fetch the order's metafields
    async fn fetch_metafields(&self, order: &OrderLocator) -> ReconcileResult<Vec<Metafield>>;

    /// Record a payment transaction and return what the platform stored
    async fn record_payment(
        &self,
        order: &OrderLocator,
        payment: &PaymentRecord,
    ) -> ReconcileResult<OrderTransaction>;
}

/// Payment gateway operations
#[mockall::automock]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Capture funds against a prior authorization
    async fn capture_prior_authorization(&self, capture: &CaptureRequest) -> ReconcileResult<CaptureResult>;
}

/// Sink for the structured result records
#[mockall::automock]
pub trait EventLogger: Send + Sync {
    fn gateway_result(&self, record: &GatewayResultRecord);

    fn platform_result(&self, record: &PlatformResultRecord);
}
