//! Shopify Admin REST implementation of the order platform

use async_trait::async_trait;

use shared::PlatformConfig;

use super::decode_body;
use crate::error::ReconcileResult;
use crate::traits::{Headers, OrderPlatform, Transport};
use crate::types::{
    Metafield, MetafieldsEnvelope, Order, OrderEnvelope, OrderLocator, OrderTransaction,
    PaymentEnvelope, PaymentRecord, TransactionEnvelope, TransactionsEnvelope,
};

pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Order platform client over an injected transport
pub struct ShopifyOrderPlatform<T: Transport> {
    transport: T,
    config: PlatformConfig,
}

impl<T: Transport> ShopifyOrderPlatform<T> {
    pub fn new(transport: T, config: PlatformConfig) -> Self {
        Self { transport, config }
    }

    fn headers(&self) -> Headers {
        vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            (ACCESS_TOKEN_HEADER.to_string(), self.config.access_token.clone()),
        ]
    }
}

#[async_trait]
impl<T: Transport> OrderPlatform for ShopifyOrderPlatform<T> {
    async fn fetch_order(&self, order: &OrderLocator) -> ReconcileResult<Order> {
        let url = order.order_url(&self.config.api_version);
        let body = self.transport.get(&url, &self.headers()).await?;
        let envelope: OrderEnvelope = decode_body(&url, body)?;
        Ok(envelope.order)
    }

    async fn fetch_transactions(&self, order: &OrderLocator) -> ReconcileResult<Vec<OrderTransaction>> {
        let url = order.transactions_url(&self.config.api_version);
        let body = self.transport.get(&url, &self.headers()).await?;
        let envelope: TransactionsEnvelope = decode_body(&url, body)?;
        Ok(envelope.transactions)
    }

    async fn fetch_metafields(&self, order: &OrderLocator) -> ReconcileResult<Vec<Metafield>> {
        let url = order.metafields_url(&self.config.api_version);
        let body = self.transport.get(&url, &self.headers()).await?;
        let envelope: MetafieldsEnvelope = decode_body(&url, body)?;
        Ok(envelope.metafields)
    }

    async fn record_payment(
        &self,
        order: &OrderLocator,
        payment: &PaymentRecord,
    ) -> ReconcileResult<OrderTransaction> {
        let url = order.transactions_url(&self.config.api_version);
        let request = serde_json::to_value(PaymentEnvelope { transaction: payment })?;
        let body = self.transport.post(&url, &self.headers(), &request).await?;
        let envelope: TransactionEnvelope = decode_body(&url, body)?;
        Ok(envelope.transaction)
    }
}
