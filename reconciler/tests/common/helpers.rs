//! Test helpers and builder patterns for reconciler tests
//!
//! `ReconcilerBuilder` wires mock collaborators for unit tests. `MockStore`
//! stands up local HTTP servers for the platform and the gateway so the real
//! clients can be driven end to end.

#![allow(dead_code)] // Each suite uses a different subset

use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use reconciler::services::ACCESS_TOKEN_HEADER;
use reconciler::*;
use serde_json::Value;
use shared::AppConfig;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::TestFixtures;

/// Type alias for a reconciler built from mocks
pub type TestReconciler = Reconciler<MockOrderPlatform, MockPaymentGateway, MockEventLogger>;

/// Builder for reconcilers over mocks
///
/// No default expectations are set: any collaborator call a test did not
/// configure fails the test.
pub struct ReconcilerBuilder {
    platform: MockOrderPlatform,
    gateway: MockPaymentGateway,
    logger: MockEventLogger,
}

impl ReconcilerBuilder {
    pub fn new() -> Self {
        Self {
            platform: MockOrderPlatform::new(),
            gateway: MockPaymentGateway::new(),
            logger: MockEventLogger::new(),
        }
    }

    /// Configure the platform mock with a setup function
    pub fn with_platform<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockOrderPlatform),
    {
        setup(&mut self.platform);
        self
    }

    /// Configure the gateway mock with a setup function
    pub fn with_gateway<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockPaymentGateway),
    {
        setup(&mut self.gateway);
        self
    }

    /// Configure the result logger mock with a setup function
    pub fn with_logger<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockEventLogger),
    {
        setup(&mut self.logger);
        self
    }

    pub fn build(self) -> TestReconciler {
        Reconciler::new(self.platform, self.gateway, self.logger)
    }
}

impl Default for ReconcilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Event for the fixture order, amount taken from the order total
    pub fn order_event() -> InvocationEvent {
        InvocationEvent::new(
            TestFixtures::SHOP_DOMAIN,
            TestFixtures::ORDER_ID,
            TestFixtures::ORDER_NUMBER,
        )
    }

    /// Event for the fixture order, amount taken from the last capture
    pub fn capture_event() -> InvocationEvent {
        Self::order_event().with_action_source(CAPTURE_ACTION_SOURCE)
    }

    pub fn decimal(amount: &str) -> rust_decimal::Decimal {
        amount.parse().expect("valid decimal literal")
    }
}

/// Cloneable in-memory writer for capturing result records
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Parse every captured line as JSON
    pub fn records(&self) -> Vec<Value> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reconciler over the real HTTP clients
pub type HttpReconciler = Reconciler<
    ShopifyOrderPlatform<ReqwestTransport>,
    AuthorizeNetGateway<ReqwestTransport>,
    JsonLinesLogger<SharedBuffer>,
>;

pub const GATEWAY_PATH: &str = "/xml/v1/request.api";

/// Local platform and gateway servers
pub struct MockStore {
    pub shop: MockServer,
    pub gateway: MockServer,
    pub output: SharedBuffer,
}

impl MockStore {
    pub async fn start() -> Self {
        Self {
            shop: MockServer::start().await,
            gateway: MockServer::start().await,
            output: SharedBuffer::default(),
        }
    }

    fn order_path(suffix: &str) -> String {
        format!(
            "/admin/api/{}/orders/{}{}",
            TestFixtures::API_VERSION,
            TestFixtures::ORDER_ID,
            suffix
        )
    }

    pub fn config(&self) -> AppConfig {
        let vars: HashMap<&str, String> = HashMap::from([
            ("SHOPIFY_API_KEY", TestFixtures::ACCESS_TOKEN.to_string()),
            ("SHOPIFY_API_VERSION", TestFixtures::API_VERSION.to_string()),
            ("AUTH_NET_URL", format!("{}{}", self.gateway.uri(), GATEWAY_PATH)),
            ("AUTH_NET_NAME", "merchant".to_string()),
            ("AUTH_NET_KEY", "txn-key".to_string()),
            ("HTTP_TIMEOUT_MS", "5000".to_string()),
        ]);
        AppConfig::from_lookup(|key: &str| vars.get(key).cloned()).unwrap()
    }

    /// Event addressing the fixture order on the local shop server
    pub fn event(&self) -> InvocationEvent {
        InvocationEvent::new(self.shop.uri(), TestFixtures::ORDER_ID, TestFixtures::ORDER_NUMBER)
    }

    pub fn reconciler(&self) -> HttpReconciler {
        let config = self.config();
        let transport = ReqwestTransport::new(config.http_timeout).unwrap();
        Reconciler::new(
            ShopifyOrderPlatform::new(transport.clone(), config.platform),
            AuthorizeNetGateway::new(transport, config.gateway),
            JsonLinesLogger::new(self.output.clone()),
        )
    }

    pub async fn mount_order(&self, total_price: &str, financial_status: &str, expected: u64) {
        Mock::given(method("GET"))
            .and(header(ACCESS_TOKEN_HEADER, TestFixtures::ACCESS_TOKEN))
            .and(path(Self::order_path(".json")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(TestFixtures::order_json(total_price, financial_status)),
            )
            .expect(expected)
            .mount(&self.shop)
            .await;
    }

    pub async fn mount_transactions(&self, entries: &[(&str, &str)]) {
        Mock::given(method("GET"))
            .and(header(ACCESS_TOKEN_HEADER, TestFixtures::ACCESS_TOKEN))
            .and(path(Self::order_path("/transactions.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestFixtures::transactions_json(entries)))
            .expect(1)
            .mount(&self.shop)
            .await;
    }

    pub async fn mount_metafields(&self, auth_reference: Option<&str>) {
        Mock::given(method("GET"))
            .and(header(ACCESS_TOKEN_HEADER, TestFixtures::ACCESS_TOKEN))
            .and(path(Self::order_path("/metafields.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestFixtures::metafields_json(auth_reference)))
            .expect(1)
            .mount(&self.shop)
            .await;
    }

    pub async fn mount_gateway(&self, response: ResponseTemplate, expected: u64) {
        Mock::given(method("POST"))
            .and(path(GATEWAY_PATH))
            .respond_with(response)
            .expect(expected)
            .mount(&self.gateway)
            .await;
    }

    pub async fn mount_payment(&self, amount: &str, expected: u64) {
        Mock::given(method("POST"))
            .and(header(ACCESS_TOKEN_HEADER, TestFixtures::ACCESS_TOKEN))
            .and(path(Self::order_path("/transactions.json")))
            .respond_with(ResponseTemplate::new(201).set_body_json(TestFixtures::recorded_capture_json(amount)))
            .expect(expected)
            .mount(&self.shop)
            .await;
    }

    /// JSON bodies of the POSTs a server received
    pub async fn posted_bodies(server: &MockServer) -> Vec<Value> {
        server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .filter(|request| request.method.to_string() == "POST")
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }
}
