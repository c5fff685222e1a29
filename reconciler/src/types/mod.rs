//! Request-scoped data types
//!
//! Everything here lives for a single invocation: the trigger event, the
//! order platform and gateway wire shapes, and the structured result records.

pub mod event;
pub mod gateway;
pub mod platform;
pub mod records;

pub use event::*;
pub use gateway::*;
pub use platform::*;
pub use records::*;

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Accept a JSON string or number and keep its textual form
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}

/// Required field whose value may be JSON `null`
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
