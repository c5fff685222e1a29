//! Shopify Admin REST shapes used by the reconciler

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ReconcileError, ReconcileResult};

/// Transaction kind for captured funds
pub const CAPTURE_KIND: &str = "capture";
pub const MANUAL_GATEWAY: &str = "manual";
pub const PAYMENT_CURRENCY: &str = "USD";

/// `GET /orders/{id}.json`
#[derive(Debug, Clone, Deserialize)]
pub struct OrderEnvelope {
    pub order: Order,
}

/// The order fields the reconciler reads
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: Option<u64>,
    pub total_price: Decimal,
    /// Present but `null` on some orders; a missing key is still rejected
    #[serde(deserialize_with = "super::nullable")]
    pub financial_status: Option<String>,
}

/// `GET /orders/{id}/transactions.json`
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsEnvelope {
    pub transactions: Vec<OrderTransaction>,
}

/// `POST /orders/{id}/transactions.json` response
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionEnvelope {
    pub transaction: OrderTransaction,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderTransaction {
    #[serde(default)]
    pub id: Option<u64>,
    pub kind: String,
    pub amount: Decimal,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl OrderTransaction {
    pub fn is_capture(&self) -> bool {
        self.kind == CAPTURE_KIND
    }
}

/// `GET /orders/{id}/metafields.json`
#[derive(Debug, Clone, Deserialize)]
pub struct MetafieldsEnvelope {
    pub metafields: Vec<Metafield>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Metafield {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub namespace: Option<String>,
    pub key: String,
    pub value: Value,
}

impl Metafield {
    /// Scalar value as text; other value types are a shape error
    pub fn value_text(&self) -> ReconcileResult<String> {
        match &self.value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(ReconcileError::data_shape(format!(
                "metafield {} has non-scalar value {other}",
                self.key
            ))),
        }
    }
}

/// Manual capture transaction recorded on the order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRecord {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub kind: String,
    pub gateway: String,
}

impl PaymentRecord {
    pub fn manual_capture(amount: Decimal) -> Self {
        Self {
            currency: PAYMENT_CURRENCY.to_string(),
            amount,
            kind: CAPTURE_KIND.to_string(),
            gateway: MANUAL_GATEWAY.to_string(),
        }
    }
}

/// Request body wrapper for [`PaymentRecord`]
#[derive(Debug, Clone, Serialize)]
pub struct PaymentEnvelope<'a> {
    pub transaction: &'a PaymentRecord,
}
