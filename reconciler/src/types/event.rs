//! Trigger payload and order addressing

use serde::Deserialize;

use super::string_or_number;
use crate::error::{ReconcileError, ReconcileResult};

/// `action_source` value that switches amount lookup to the capture history
pub const CAPTURE_ACTION_SOURCE: &str = "capture";

/// Invocation trigger payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InvocationEvent {
    pub shop_domain: String,
    #[serde(deserialize_with = "string_or_number")]
    pub order_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub order_number: String,
    #[serde(default)]
    pub action_source: Option<String>,
}

impl InvocationEvent {
    pub fn new(
        shop_domain: impl Into<String>,
        order_id: impl Into<String>,
        order_number: impl Into<String>,
    ) -> Self {
        Self {
            shop_domain: shop_domain.into(),
            order_id: order_id.into(),
            order_number: order_number.into(),
            action_source: None,
        }
    }

    pub fn with_action_source(mut self, action_source: impl Into<String>) -> Self {
        self.action_source = Some(action_source.into());
        self
    }

    /// Parse a trigger payload from JSON text
    pub fn from_json_str(raw: &str) -> ReconcileResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Whether the amount comes from the last capture transaction instead of the order total
    pub fn amount_from_captures(&self) -> bool {
        self.action_source.as_deref() == Some(CAPTURE_ACTION_SOURCE)
    }

    pub fn validate(&self) -> ReconcileResult<()> {
        if self.shop_domain.trim().is_empty() {
            return Err(ReconcileError::invalid_event("shop_domain", "must not be empty"));
        }
        if self.order_id.trim().is_empty() {
            return Err(ReconcileError::invalid_event("order_id", "must not be empty"));
        }
        Ok(())
    }

    pub fn locator(&self) -> OrderLocator {
        OrderLocator {
            shop_domain: self.shop_domain.trim().to_string(),
            order_id: self.order_id.trim().to_string(),
        }
    }
}

/// Address of one order on one shop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLocator {
    pub shop_domain: String,
    pub order_id: String,
}

impl OrderLocator {
    /// `{shop}/admin/api/{version}/orders/{id}`; bare domains get `https://`
    pub fn base_url(&self, api_version: &str) -> String {
        let shop_root = if self.shop_domain.starts_with("http://")
            || self.shop_domain.starts_with("https://")
        {
            self.shop_domain.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", self.shop_domain)
        };
        format!("{shop_root}/admin/api/{api_version}/orders/{}", self.order_id)
    }

    pub fn order_url(&self, api_version: &str) -> String {
        format!("{}.json", self.base_url(api_version))
    }

    pub fn transactions_url(&self, api_version: &str) -> String {
        format!("{}/transactions.json", self.base_url(api_version))
    }

    pub fn metafields_url(&self, api_version: &str) -> String {
        format!("{}/metafields.json", self.base_url(api_version))
    }
}
