//! Response extraction: raw model text -> parsed JSON document.
//!
//! Vision models asked for "ONLY a JSON object" still frequently wrap their
//! answer in a Markdown code fence, sometimes with a language tag. The model
//! is assumed to emit at most one fenced block wrapping the entire answer, so
//! stripping touches at most one leading and one trailing marker and never
//! anything mid-string.

use harvest_core::ScanError;
use serde_json::Value;

/// How much of a malformed raw reply is kept for diagnostics.
const SNIPPET_LIMIT: usize = 200;

/// Parse a raw model reply into a JSON document.
///
/// Fails with [`ScanError::Parse`] carrying a truncated copy of the raw text
/// and the syntax error position. Never substitutes a default.
pub fn extract(raw: &str) -> Result<Value, ScanError> {
    let body = strip_code_fence(raw);
    serde_json::from_str(body).map_err(|err| ScanError::Parse {
        snippet: truncate(raw, SNIPPET_LIMIT),
        line: err.line(),
        column: err.column(),
    })
}

/// Remove at most one leading fence marker (with optional language tag) and
/// at most one trailing fence marker.
fn strip_code_fence(raw: &str) -> &str {
    let mut body = raw.trim();
    if let Some(rest) = body.strip_prefix("```") {
        // The opening fence line may carry a language tag ("```json").
        let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
        body = rest.trim_start();
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest.trim_end();
    }
    body
}

/// Truncate to at most `limit` bytes without splitting a UTF-8 character.
fn truncate(raw: &str, limit: usize) -> String {
    if raw.len() <= limit {
        return raw.to_string();
    }
    let mut end = limit;
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &raw[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_json_parses() {
        let doc = extract(r#"{"title":"Tea"}"#).unwrap();
        assert_eq!(doc, json!({"title": "Tea"}));
    }

    #[test]
    fn fenced_json_equals_direct_parse() {
        let inner = r#"{"title":"X","ingredients":[],"instructions":[]}"#;
        let fenced = format!("```json\n{inner}\n```");
        assert_eq!(extract(&fenced).unwrap(), extract(inner).unwrap());
    }

    #[test]
    fn fence_without_language_tag() {
        let doc = extract("```\n{\"a\": 1}\n```").unwrap();
        assert_eq!(doc, json!({"a": 1}));
    }

    #[test]
    fn missing_closing_fence_still_parses() {
        let doc = extract("```json\n{\"a\": 1}").unwrap();
        assert_eq!(doc, json!({"a": 1}));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let doc = extract("  \n```json\n[1, 2]\n```  \n").unwrap();
        assert_eq!(doc, json!([1, 2]));
    }

    #[test]
    fn mid_string_fences_are_not_stripped() {
        // A fence inside a JSON string value must survive intact.
        let doc = extract(r#"{"notes": "use ``` for code"}"#).unwrap();
        assert_eq!(doc, json!({"notes": "use ``` for code"}));
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        match extract("") {
            Err(ScanError::Parse { .. }) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn prose_reply_is_a_parse_error_with_snippet() {
        let raw = "I'm sorry, I cannot read this image.";
        match extract(raw) {
            Err(ScanError::Parse { snippet, .. }) => assert_eq!(snippet, raw),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn long_garbage_is_truncated_for_diagnostics() {
        let raw = "x".repeat(5000);
        match extract(&raw) {
            Err(ScanError::Parse { snippet, .. }) => {
                assert!(snippet.len() < raw.len());
                assert!(snippet.starts_with("xxx"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // Multi-byte characters straddling the limit must not split.
        let raw = "é".repeat(300);
        match extract(&raw) {
            Err(ScanError::Parse { snippet, .. }) => {
                assert!(snippet.chars().count() > 0);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn trailing_commas_are_rejected() {
        assert!(extract(r#"{"a": 1,}"#).is_err());
    }
}
