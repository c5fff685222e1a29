//! JSON-lines result logger

use std::io::Write;
use std::sync::Mutex;

use serde::Serialize;

use crate::traits::EventLogger;
use crate::types::{GatewayResultRecord, PlatformResultRecord};

/// Writes each record as one line of JSON
pub struct JsonLinesLogger<W: Write + Send> {
    writer: Mutex<W>,
}

impl JsonLinesLogger<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> JsonLinesLogger<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // Best-effort: a failed write never fails the invocation.
    fn emit<R: Serialize>(&self, record: &R) {
        let line = match serde_json::to_string(record) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize result record");
                return;
            }
        };

        let mut writer = self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(writer, "{line}").and_then(|_| writer.flush()) {
            tracing::warn!(error = %e, "Failed to write result record");
        }
    }
}

impl<W: Write + Send> EventLogger for JsonLinesLogger<W> {
    fn gateway_result(&self, record: &GatewayResultRecord) {
        self.emit(record);
    }

    fn platform_result(&self, record: &PlatformResultRecord) {
        self.emit(record);
    }
}
