//! Authorize.net implementation of the payment gateway

use async_trait::async_trait;

use shared::GatewayConfig;

use super::decode_body;
use crate::error::ReconcileResult;
use crate::traits::{Headers, PaymentGateway, Transport};
use crate::types::{CaptureRequest, CaptureResult, CreateTransactionEnvelope, MerchantAuthentication};

/// Gateway client over an injected transport
pub struct AuthorizeNetGateway<T: Transport> {
    transport: T,
    config: GatewayConfig,
}

impl<T: Transport> AuthorizeNetGateway<T> {
    pub fn new(transport: T, config: GatewayConfig) -> Self {
        Self { transport, config }
    }

    fn merchant(&self) -> MerchantAuthentication {
        MerchantAuthentication {
            name: self.config.merchant_name.clone(),
            transaction_key: self.config.transaction_key.clone(),
        }
    }
}

#[async_trait]
impl<T: Transport> PaymentGateway for AuthorizeNetGateway<T> {
    async fn capture_prior_authorization(&self, capture: &CaptureRequest) -> ReconcileResult<CaptureResult> {
        let envelope = CreateTransactionEnvelope::prior_auth_capture(self.merchant(), capture);
        let request = serde_json::to_value(&envelope)?;
        let headers: Headers = vec![("Content-Type".to_string(), "application/json".to_string())];

        tracing::debug!(ref_trans_id = %capture.ref_trans_id, amount = %capture.amount, "Requesting prior-auth capture");
        let body = self.transport.post(&self.config.endpoint, &headers, &request).await?;
        decode_body(&self.config.endpoint, body)
    }
}
