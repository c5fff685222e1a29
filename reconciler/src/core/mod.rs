//! Core reconciliation logic

pub mod decision;

pub use decision::{
    capture_approved, decide_payment, find_authorization_reference, is_already_paid,
    last_capture_amount, PaymentDecision, AUTHORIZATION_METAFIELD_KEY, PAID_STATUSES,
};
