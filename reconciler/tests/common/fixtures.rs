//! Test fixtures for platform and gateway payloads

#![allow(dead_code)] // Not every suite uses every fixture

use reconciler::{CaptureResult, Metafield, Order, OrderTransaction};
use serde_json::{json, Value};

/// Test fixture constants and payload builders
pub struct TestFixtures;

impl TestFixtures {
    pub const SHOP_DOMAIN: &'static str = "demo.myshopify.com";
    pub const ORDER_ID: &'static str = "450789469";
    pub const ORDER_NUMBER: &'static str = "1001";
    pub const AUTH_REFERENCE: &'static str = "REF123";
    pub const ACCESS_TOKEN: &'static str = "shpat_test";
    pub const API_VERSION: &'static str = "2020-10";

    pub fn order_json(total_price: &str, financial_status: &str) -> Value {
        json!({
            "order": {
                "id": 450789469,
                "name": "#1001",
                "total_price": total_price,
                "financial_status": financial_status,
                "currency": "USD"
            }
        })
    }

    pub fn order(total_price: &str, financial_status: &str) -> Order {
        serde_json::from_value(Self::order_json(total_price, financial_status)["order"].clone())
            .expect("valid order fixture")
    }

    /// Order whose financial status is `null`
    pub fn order_without_status(total_price: &str) -> Order {
        let mut value = Self::order_json(total_price, "pending");
        value["order"]["financial_status"] = Value::Null;
        serde_json::from_value(value["order"].clone()).expect("valid order fixture")
    }

    pub fn transactions_json(entries: &[(&str, &str)]) -> Value {
        let transactions: Vec<Value> = entries
            .iter()
            .enumerate()
            .map(|(i, (kind, amount))| {
                json!({
                    "id": 1000 + i as u64,
                    "order_id": 450789469,
                    "kind": kind,
                    "amount": amount,
                    "gateway": "authorize_net",
                    "status": "success",
                    "currency": "USD"
                })
            })
            .collect();
        json!({ "transactions": transactions })
    }

    pub fn transactions(entries: &[(&str, &str)]) -> Vec<OrderTransaction> {
        serde_json::from_value(Self::transactions_json(entries)["transactions"].clone())
            .expect("valid transactions fixture")
    }

    /// Metafields with an optional authorization reference among unrelated entries
    pub fn metafields_json(auth_reference: Option<&str>) -> Value {
        let mut metafields = vec![json!({
            "id": 1,
            "namespace": "global",
            "key": "gift_message",
            "value": "Happy birthday",
            "value_type": "string"
        })];
        if let Some(reference) = auth_reference {
            metafields.push(json!({
                "id": 2,
                "namespace": "global",
                "key": "authorize.net_auth_id",
                "value": reference,
                "value_type": "string"
            }));
        }
        json!({ "metafields": metafields })
    }

    pub fn metafields(auth_reference: Option<&str>) -> Vec<Metafield> {
        serde_json::from_value(Self::metafields_json(auth_reference)["metafields"].clone())
            .expect("valid metafields fixture")
    }

    pub fn gateway_approved_json() -> Value {
        json!({
            "transactionResponse": {
                "responseCode": "1",
                "authCode": "ROHNFQ",
                "transId": "60123456790",
                "refTransID": "REF123",
                "messages": [{"code": "1", "description": "This transaction has been approved."}]
            },
            "refId": "",
            "messages": {"resultCode": "Ok", "message": [{"code": "I00001", "text": "Successful."}]}
        })
    }

    pub fn gateway_declined_json() -> Value {
        json!({
            "transactionResponse": {
                "responseCode": "3",
                "authCode": "",
                "transId": "0",
                "refTransID": "REF123",
                "errors": [{"errorCode": "16", "errorText": "The transaction cannot be found."}]
            },
            "messages": {
                "resultCode": "Error",
                "message": [{"code": "E00027", "text": "The transaction was unsuccessful."}]
            }
        })
    }

    pub fn gateway_approved() -> CaptureResult {
        serde_json::from_value(Self::gateway_approved_json()).expect("valid gateway fixture")
    }

    pub fn gateway_declined() -> CaptureResult {
        serde_json::from_value(Self::gateway_declined_json()).expect("valid gateway fixture")
    }

    pub fn recorded_capture_json(amount: &str) -> Value {
        json!({
            "transaction": {
                "id": 389404469,
                "order_id": 450789469,
                "kind": "capture",
                "gateway": "manual",
                "status": "success",
                "message": "Marked the manual payment as received",
                "amount": amount,
                "currency": "USD",
                "created_at": "2024-03-01T10:15:00-05:00"
            }
        })
    }

    pub fn recorded_capture(amount: &str) -> OrderTransaction {
        serde_json::from_value(Self::recorded_capture_json(amount)["transaction"].clone())
            .expect("valid recorded capture fixture")
    }
}
