//! Per-scan event logging.
//!
//! One structured event per notable point in a scan's life: payload accepted,
//! raw model reply received, outcome decided. Written through `tracing` so
//! the NDJSON file layer picks them up.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::redact::redact_sensitive_data;

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ScanEvent {
    PayloadAccepted {
        kind: String,
        mime_type: String,
        bytes: usize,
    },
    ModelReply {
        provider: String,
        raw_reply: String,
    },
    Rejected {
        reason: String,
    },
    Completed {
        kind: String,
    },
}

#[derive(Debug, Serialize)]
pub struct ScanEventEntry {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    pub event: ScanEvent,
}

pub struct ScanEventLogger;

impl ScanEventLogger {
    /// Log a scan event, redacting any free-text content first.
    pub fn log_event(request_id: &str, mut event: ScanEvent) {
        match &mut event {
            ScanEvent::ModelReply { raw_reply, .. } => {
                *raw_reply = redact_sensitive_data(raw_reply);
            }
            ScanEvent::Rejected { reason } => {
                *reason = redact_sensitive_data(reason);
            }
            ScanEvent::PayloadAccepted { .. } | ScanEvent::Completed { .. } => {}
        }

        let entry = ScanEventEntry {
            request_id: request_id.into(),
            timestamp: Utc::now(),
            event,
        };

        info!(target: "scan_events", event = ?entry, "Scan trace event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_a_type_tag() {
        let event = ScanEvent::PayloadAccepted {
            kind: "recipe".into(),
            mime_type: "image/png".into(),
            bytes: 1024,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "PayloadAccepted");
        assert_eq!(json["bytes"], 1024);
    }
}
