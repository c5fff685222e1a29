//! Tests for reconciler services
//!
//! Service clients are exercised against `MockTransport` so request
//! URLs, headers and bodies can be asserted without a network.


use shared::{GatewayConfig, PlatformConfig};

pub fn platform_config() -> PlatformConfig {
    PlatformConfig {
        access_token: "shpat_test".to_string(),
        api_version: "2020-10".to_string(),
    }
}

pub fn gateway_config() -> GatewayConfig {
    GatewayConfig {
        endpoint: "https://apitest.authorize.net/xml/v1/request.api".to_string(),
        merchant_name: "merchant".to_string(),
        transaction_key: "txn-key".to_string(),
    }
}
