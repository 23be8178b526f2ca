#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/summarize`.
#[derive(Clone, Debug, Serialize)]
pub struct SummarizeRequest {
    pub url: String,
}

/// Response of `POST /api/summarize`.
///
/// Exactly one of `summary` (on success) or `error` (on failure) is
/// meaningful; the transcript fields are present only when the backend
/// extracted a transcript. Every field is defaulted so a sparse or
/// malformed-but-parseable body still deserializes.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SummarizeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub transcript_length: Option<u64>,
    #[serde(default)]
    pub transcript_preview: Option<String>,
}

/// Response of `GET /api/health`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    #[serde(default)]
    pub api_key_configured: bool,
}
