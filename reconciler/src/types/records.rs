//! Structured result records written one JSON object per line

use rust_decimal::Decimal;
use serde::Serialize;

use super::gateway::CaptureResult;
use super::platform::OrderTransaction;

pub const GATEWAY_SOURCE: &str = "authorize.net";
pub const PLATFORM_SOURCE: &str = "shopify";

/// Outcome of the gateway capture call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayResultRecord {
    pub source: &'static str,
    pub order_number: String,
    pub messages_result_code: String,
    pub transaction_response_result_code: String,
    pub transaction_response_message_code: String,
    pub transaction_response_message_text: String,
    pub transaction_response_error_code: String,
    pub transaction_response_error_text: String,
    pub transaction_id: String,
    pub ref_transaction_id: String,
}

impl GatewayResultRecord {
    pub fn from_capture(order_number: &str, result: &CaptureResult) -> Self {
        let response = &result.transaction_response;
        let message = result.first_message();
        let error = result.first_error();

        Self {
            source: GATEWAY_SOURCE,
            order_number: order_number.to_string(),
            messages_result_code: result.messages.result_code.clone(),
            transaction_response_result_code: response.response_code.clone(),
            transaction_response_message_code: message.map(|m| m.code.clone()).unwrap_or_default(),
            transaction_response_message_text: message.map(|m| m.description.clone()).unwrap_or_default(),
            transaction_response_error_code: error.map(|e| e.error_code.clone()).unwrap_or_default(),
            transaction_response_error_text: error.map(|e| e.error_text.clone()).unwrap_or_default(),
            transaction_id: response.trans_id.clone(),
            ref_transaction_id: response.ref_trans_id.clone(),
        }
    }
}

/// The capture transaction the order platform recorded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformResultRecord {
    pub source: &'static str,
    pub order_number: String,
    pub transaction_id: Option<u64>,
    pub kind: String,
    pub gateway: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub created_at: Option<String>,
}

impl PlatformResultRecord {
    pub fn from_transaction(order_number: &str, transaction: &OrderTransaction) -> Self {
        Self {
            source: PLATFORM_SOURCE,
            order_number: order_number.to_string(),
            transaction_id: transaction.id,
            kind: transaction.kind.clone(),
            gateway: transaction.gateway.clone(),
            status: transaction.status.clone(),
            message: transaction.message.clone(),
            amount: transaction.amount,
            currency: transaction.currency.clone(),
            created_at: transaction.created_at.clone(),
        }
    }
}
