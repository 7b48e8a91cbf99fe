use thiserror::Error;

use crate::violation::Violation;

/// How an upstream vision provider failed, as far as the caller cares.
///
/// The HTTP layer maps these to distinct status codes; everything else about
/// the provider error lives in the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderFault {
    /// Rejected credentials (401/403 from the provider).
    Auth,
    /// Provider asked us to slow down (429).
    RateLimit,
    /// The bounded wait on the outbound call elapsed.
    Timeout,
    /// Any other provider-side failure.
    Upstream,
}

/// Top-level error type for the Harvest scanning pipeline.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("model reply is not valid JSON (line {line}, column {column}): {snippet}")]
    Parse {
        /// Truncated copy of the raw reply, for diagnostics.
        snippet: String,
        line: usize,
        column: usize,
    },

    #[error("model reply failed validation: {}", format_violations(.0))]
    Invalid(Vec<Violation>),

    #[error("invalid image payload: {0}")]
    Payload(String),

    #[error("vision provider error ({provider}): {message}")]
    Provider {
        provider: String,
        fault: ProviderFault,
        message: String,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lists_every_violation() {
        let err = ScanError::Invalid(vec![
            Violation::MissingField { field: "title".into() },
            Violation::MissingField { field: "items".into() },
        ]);
        let msg = err.to_string();
        assert!(msg.contains("title"));
        assert!(msg.contains("items"));
    }

    #[test]
    fn parse_error_carries_position() {
        let err = ScanError::Parse { snippet: "not json".into(), line: 1, column: 1 };
        assert!(err.to_string().contains("line 1, column 1"));
    }
}
