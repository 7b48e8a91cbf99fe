//! Telemetry and structured logging for Harvest.
//!
//! Handles log redaction, JSON output, file rotation, and per-scan event
//! logging.

pub mod event;
pub mod logger;
pub mod redact;

pub use event::{ScanEvent, ScanEventEntry, ScanEventLogger};
pub use logger::init_logger;
pub use redact::redact_sensitive_data;
