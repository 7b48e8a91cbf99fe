//! Outbound call to a vision-capable chat completion API.
//!
//! Sends an image plus a fixed extraction prompt and returns the model's raw
//! text reply. Everything after that (fence stripping, parsing, validation)
//! belongs to `harvest-extract`.

pub mod prompt;

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine};
use harvest_core::{DocKind, ProviderFault, ScanError};
use tracing::info;

pub use prompt::extraction_prompt;

/// Supported vision providers.
#[derive(Debug, Clone)]
pub enum VisionProvider {
    OpenAi { api_key: String, model: String },
    Gemini { api_key: String },
}

impl VisionProvider {
    pub fn openai(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::OpenAi { api_key: api_key.into(), model: model.into() }
    }

    pub fn gemini(api_key: impl Into<String>) -> Self {
        Self::Gemini { api_key: api_key.into() }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VisionProvider::OpenAi { .. } => "openai",
            VisionProvider::Gemini { .. } => "gemini",
        }
    }
}

/// Ask the vision model to read a document image.
///
/// Returns the raw reply text. Provider failures are classified into
/// [`ProviderFault`]s so the HTTP layer can map them to distinct statuses.
pub async fn scan_image(
    provider: &VisionProvider,
    image_bytes: &[u8],
    mime_type: &str,
    kind: DocKind,
    timeout: Duration,
) -> Result<String, ScanError> {
    let b64 = STANDARD.encode(image_bytes);
    match provider {
        VisionProvider::OpenAi { api_key, model } => {
            scan_via_openai(api_key, model, &b64, mime_type, kind, timeout).await
        }
        VisionProvider::Gemini { api_key } => {
            scan_via_gemini(api_key, &b64, mime_type, kind, timeout).await
        }
    }
}

async fn scan_via_openai(
    api_key: &str,
    model: &str,
    b64: &str,
    mime_type: &str,
    kind: DocKind,
    timeout: Duration,
) -> Result<String, ScanError> {
    info!("[Vision] Scanning {} image via OpenAI {}", kind, model);
    let client = reqwest::Client::new();
    let body = serde_json::json!({
        "model": model,
        "response_format": { "type": "json_object" },
        "messages": [{
            "role": "user",
            "content": [
                { "type": "text", "text": prompt::extraction_prompt(kind) },
                { "type": "image_url",
                  "image_url": { "url": format!("data:{};base64,{}", mime_type, b64) } }
            ]
        }],
        "max_tokens": prompt::max_tokens(kind)
    });
    let resp = client
        .post("https://api.openai.com/v1/chat/completions")
        .bearer_auth(api_key)
        .json(&body)
        .timeout(timeout)
        .send()
        .await
        .map_err(|err| transport_fault("openai", err))?;
    if !resp.status().is_success() {
        return Err(status_fault("openai", resp).await);
    }
    let json: serde_json::Value = resp
        .json()
        .await
        .map_err(|err| transport_fault("openai", err))?;
    reply_text(
        "openai",
        json["choices"][0]["message"]["content"].as_str(),
    )
}

async fn scan_via_gemini(
    api_key: &str,
    b64: &str,
    mime_type: &str,
    kind: DocKind,
    timeout: Duration,
) -> Result<String, ScanError> {
    info!("[Vision] Scanning {} image via Gemini", kind);
    let client = reqwest::Client::new();
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent?key={}",
        api_key
    );
    let body = serde_json::json!({
        "contents": [{ "parts": [
            { "text": prompt::extraction_prompt(kind) },
            { "inlineData": { "mimeType": mime_type, "data": b64 } }
        ]}]
    });
    let resp = client
        .post(&url)
        .json(&body)
        .timeout(timeout)
        .send()
        .await
        .map_err(|err| transport_fault("gemini", err))?;
    if !resp.status().is_success() {
        return Err(status_fault("gemini", resp).await);
    }
    let json: serde_json::Value = resp
        .json()
        .await
        .map_err(|err| transport_fault("gemini", err))?;
    reply_text(
        "gemini",
        json["candidates"][0]["content"]["parts"][0]["text"].as_str(),
    )
}

/// An empty reply is a provider fault, not a parse failure: there is nothing
/// for the extractor to diagnose.
fn reply_text(provider: &str, content: Option<&str>) -> Result<String, ScanError> {
    match content {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(ScanError::Provider {
            provider: provider.to_string(),
            fault: ProviderFault::Upstream,
            message: "empty content in model reply".into(),
        }),
    }
}

fn transport_fault(provider: &str, err: reqwest::Error) -> ScanError {
    let fault = if err.is_timeout() {
        ProviderFault::Timeout
    } else {
        ProviderFault::Upstream
    };
    ScanError::Provider {
        provider: provider.to_string(),
        fault,
        message: err.to_string(),
    }
}

async fn status_fault(provider: &str, resp: reqwest::Response) -> ScanError {
    let status = resp.status();
    let fault = match status.as_u16() {
        401 | 403 => ProviderFault::Auth,
        429 => ProviderFault::RateLimit,
        _ => ProviderFault::Upstream,
    };
    let body = resp.text().await.unwrap_or_default();
    ScanError::Provider {
        provider: provider.to_string(),
        fault,
        message: format!("{status}: {body}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_names() {
        assert_eq!(VisionProvider::openai("k", "gpt-4o").name(), "openai");
        assert_eq!(VisionProvider::gemini("k").name(), "gemini");
    }

    #[test]
    fn empty_reply_is_an_upstream_fault() {
        match reply_text("openai", Some("")) {
            Err(ScanError::Provider { fault, .. }) => {
                assert_eq!(fault, ProviderFault::Upstream);
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }
}
