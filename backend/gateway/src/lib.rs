//! HTTP gateway for the Harvest scanning pipeline.
//!
//! `POST /api/recipe` and `POST /api/invoice` accept a base64 image payload,
//! run it through the vision call and the extraction/validation core, and
//! return the validated record or a classified error body.

pub mod config;
pub mod error;
pub mod scan_api;
pub mod server;

pub use config::GatewayConfig;
pub use server::{build_router, start_server, AppState};
