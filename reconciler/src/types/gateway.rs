//! Authorize.net createTransaction shapes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const PRIOR_AUTH_CAPTURE: &str = "priorAuthCaptureTransaction";

/// What the reconciler asks the gateway to capture
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureRequest {
    pub amount: Decimal,
    pub ref_trans_id: String,
    pub invoice_number: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionEnvelope {
    pub create_transaction_request: CreateTransactionRequest,
}

// Authorize.net validates element order, so field order here is significant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub merchant_authentication: MerchantAuthentication,
    pub transaction_request: TransactionRequest,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantAuthentication {
    pub name: String,
    pub transaction_key: String,
}

impl std::fmt::Debug for MerchantAuthentication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerchantAuthentication")
            .field("name", &self.name)
            .field("transaction_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub transaction_type: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub ref_trans_id: String,
    pub order: InvoiceOrder,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceOrder {
    pub invoice_number: String,
}

impl CreateTransactionEnvelope {
    pub fn prior_auth_capture(merchant: MerchantAuthentication, capture: &CaptureRequest) -> Self {
        Self {
            create_transaction_request: CreateTransactionRequest {
                merchant_authentication: merchant,
                transaction_request: TransactionRequest {
                    transaction_type: PRIOR_AUTH_CAPTURE.to_string(),
                    amount: capture.amount,
                    ref_trans_id: capture.ref_trans_id.clone(),
                    order: InvoiceOrder {
                        invoice_number: capture.invoice_number.clone(),
                    },
                },
            },
        }
    }
}

/// createTransaction response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureResult {
    pub transaction_response: TransactionResponse,
    pub messages: ResultMessages,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMessages {
    pub result_code: String,
    #[serde(default)]
    pub message: Vec<ResultMessage>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultMessage {
    pub code: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub response_code: String,
    pub trans_id: String,
    #[serde(rename = "refTransID")]
    pub ref_trans_id: String,
    #[serde(default)]
    pub messages: Vec<TransactionMessage>,
    #[serde(default)]
    pub errors: Vec<TransactionError>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionMessage {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionError {
    pub error_code: String,
    pub error_text: String,
}

impl CaptureResult {
    pub fn first_message(&self) -> Option<&TransactionMessage> {
        self.transaction_response.messages.first()
    }

    pub fn first_error(&self) -> Option<&TransactionError> {
        self.transaction_response.errors.first()
    }
}
