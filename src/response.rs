//! Wire types for the SearXNG JSON API and response classification.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::{ErrorContext, UNREADABLE_BODY};
use crate::{Result, SearchError};

/// A raw result record as returned by the backend.
///
/// Every field may be absent or null on the wire; defaulting to concrete
/// values happens once, at the formatting boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "publishedDate")]
    pub published_date: Option<String>,
    #[serde(default)]
    pub img_src: Option<String>,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Top-level response shape.
///
/// `results` stays an `Option` so that a missing or null field (a backend
/// contract violation) is distinguishable from a genuinely empty array.
#[derive(Debug, Deserialize)]
pub struct SearxResponse {
    #[serde(default)]
    pub results: Option<Vec<RawResult>>,
}

/// Classifies a single backend response, first failing stage wins:
///
/// 1. non-success status → [`SearchError::Server`] with a best-effort body;
/// 2. JSON parse failure → [`SearchError::Json`] with a truncated preview;
/// 3. missing/null `results` → [`SearchError::MissingResults`];
/// 4. otherwise the raw records, possibly empty.
pub(crate) fn classify(
    status: StatusCode,
    body: std::result::Result<String, reqwest::Error>,
    query: &str,
    context: &ErrorContext,
) -> Result<Vec<RawResult>> {
    if !status.is_success() {
        return Err(SearchError::Server {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body: body.unwrap_or_else(|_| UNREADABLE_BODY.to_string()),
            context: context.clone(),
        });
    }

    let text = match body {
        Ok(text) => text,
        Err(_) => return Err(SearchError::json_preview(&context.url, UNREADABLE_BODY)),
    };

    let parsed: SearxResponse = match serde_json::from_str(&text) {
        Ok(parsed) => parsed,
        Err(_) => return Err(SearchError::json_preview(&context.url, &text)),
    };

    match parsed.results {
        Some(results) => Ok(results),
        None => Err(SearchError::MissingResults {
            query: query.to_string(),
            context: context.clone(),
        }),
    }
}
