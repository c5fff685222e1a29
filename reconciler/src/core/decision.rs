//! Pure decision rules of the reconciliation protocol

use rust_decimal::Decimal;

use crate::error::{ReconcileError, ReconcileResult};
use crate::types::{CaptureResult, Metafield, OrderTransaction};

/// Metafield key holding the gateway authorization transaction id
pub const AUTHORIZATION_METAFIELD_KEY: &str = "authorize.net_auth_id";

/// Financial statuses that mean the order must not be marked paid again
pub const PAID_STATUSES: [&str; 2] = ["paid", "partially_paid"];

const GATEWAY_OK: &str = "Ok";
const APPROVED_CODE: &str = "1";

/// What to do after the gateway answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentDecision {
    Record,
    CaptureNotApproved,
    AlreadyPaid,
}

/// Amount of the last capture transaction, in the order the platform listed them.
///
/// The platform does not document an ordering guarantee; the list is used as returned.
pub fn last_capture_amount(transactions: &[OrderTransaction]) -> ReconcileResult<Decimal> {
    transactions
        .iter()
        .filter(|t| t.is_capture())
        .last()
        .map(|t| t.amount)
        .ok_or_else(|| ReconcileError::data_shape("order has no capture transactions"))
}

/// Authorization reference from the first matching metafield, if any
pub fn find_authorization_reference(metafields: &[Metafield]) -> ReconcileResult<Option<String>> {
    metafields
        .iter()
        .find(|m| m.key == AUTHORIZATION_METAFIELD_KEY)
        .map(Metafield::value_text)
        .transpose()
}

/// Overall result Ok, response code 1 and first transaction message code 1
pub fn capture_approved(result: &CaptureResult) -> bool {
    result.messages.result_code == GATEWAY_OK
        && result.transaction_response.response_code == APPROVED_CODE
        && result
            .first_message()
            .is_some_and(|message| message.code == APPROVED_CODE)
}

/// An absent status is not paid
pub fn is_already_paid(financial_status: Option<&str>) -> bool {
    financial_status.is_some_and(|status| PAID_STATUSES.contains(&status))
}

pub fn decide_payment(result: &CaptureResult, financial_status: Option<&str>) -> PaymentDecision {
    if !capture_approved(result) {
        PaymentDecision::CaptureNotApproved
    } else if is_already_paid(financial_status) {
        PaymentDecision::AlreadyPaid
    } else {
        PaymentDecision::Record
    }
}
