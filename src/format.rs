//! Shaping raw records into the canonical result form and rendering the
//! text digest.

use serde::{Deserialize, Serialize};

use crate::response::RawResult;

/// A search result with all fields defaulted to concrete values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedResult {
    /// Result title.
    pub title: String,
    /// Result description/snippet.
    pub content: String,
    /// Result URL.
    pub url: String,
    /// Relevance score assigned by the backend.
    pub score: f64,
}

impl From<RawResult> for FormattedResult {
    fn from(raw: RawResult) -> Self {
        Self {
            title: raw.title.unwrap_or_default(),
            content: raw.content.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
            score: raw.score.unwrap_or(0.0),
        }
    }
}

/// Renders the human-readable digest for a set of results.
///
/// An empty set is a legitimate outcome and yields a descriptive message.
/// Backend ordering is preserved; no re-ranking happens here.
pub fn render(query: &str, results: &[FormattedResult]) -> String {
    if results.is_empty() {
        return format!("No results found for query: \"{}\"", query);
    }

    results
        .iter()
        .map(|result| {
            format!(
                "Title: {}\nDescription: {}\nURL: {}\nRelevance Score: {:.3}",
                result.title, result.content, result.url, result.score
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: Option<&str>, content: Option<&str>, url: Option<&str>, score: Option<f64>) -> RawResult {
        RawResult {
            url: url.map(String::from),
            title: title.map(String::from),
            content: content.map(String::from),
            published_date: None,
            img_src: None,
            engine: None,
            score,
            category: None,
        }
    }

    #[test]
    fn test_from_raw_full() {
        let formatted: FormattedResult = raw(Some("T"), Some("C"), Some("U"), Some(0.5)).into();
        assert_eq!(
            formatted,
            FormattedResult {
                title: "T".to_string(),
                content: "C".to_string(),
                url: "U".to_string(),
                score: 0.5,
            }
        );
    }

    #[test]
    fn test_from_raw_defaults_missing_fields() {
        let formatted: FormattedResult = raw(None, None, None, None).into();
        assert_eq!(formatted.title, "");
        assert_eq!(formatted.content, "");
        assert_eq!(formatted.url, "");
        assert_eq!(formatted.score, 0.0);
    }

    #[test]
    fn test_render_empty_is_no_results_message() {
        let digest = render("rust lang", &[]);
        assert_eq!(digest, "No results found for query: \"rust lang\"");
    }

    #[test]
    fn test_render_single_result() {
        let results = vec![FormattedResult {
            title: "T".to_string(),
            content: "C".to_string(),
            url: "U".to_string(),
            score: 0.5,
        }];
        assert_eq!(
            render("rust", &results),
            "Title: T\nDescription: C\nURL: U\nRelevance Score: 0.500"
        );
    }

    #[test]
    fn test_render_joins_blocks_with_blank_line() {
        let results = vec![
            FormattedResult {
                title: "First".to_string(),
                content: "A".to_string(),
                url: "https://a.example".to_string(),
                score: 2.0,
            },
            FormattedResult {
                title: "Second".to_string(),
                content: "B".to_string(),
                url: "https://b.example".to_string(),
                score: 1.0,
            },
        ];
        let digest = render("rust", &results);
        assert_eq!(
            digest,
            "Title: First\nDescription: A\nURL: https://a.example\nRelevance Score: 2.000\n\n\
             Title: Second\nDescription: B\nURL: https://b.example\nRelevance Score: 1.000"
        );
    }

    #[test]
    fn test_render_preserves_backend_order() {
        let results = vec![
            FormattedResult {
                title: "Low".to_string(),
                content: String::new(),
                url: String::new(),
                score: 0.1,
            },
            FormattedResult {
                title: "High".to_string(),
                content: String::new(),
                url: String::new(),
                score: 9.9,
            },
        ];
        let digest = render("rust", &results);
        let low = digest.find("Low").unwrap();
        let high = digest.find("High").unwrap();
        assert!(low < high);
    }

    #[test]
    fn test_score_always_three_decimal_places() {
        for (score, rendered) in [
            (1.0, "1.000"),
            (0.5, "0.500"),
            (0.123456, "0.123"),
            (12.3, "12.300"),
            (0.0, "0.000"),
        ] {
            let results = vec![FormattedResult {
                title: String::new(),
                content: String::new(),
                url: String::new(),
                score,
            }];
            let digest = render("q", &results);
            assert!(
                digest.ends_with(&format!("Relevance Score: {}", rendered)),
                "score {} rendered digest: {}",
                score,
                digest
            );
        }
    }

    #[test]
    fn test_formatted_result_serialization() {
        let result = FormattedResult {
            title: "T".to_string(),
            content: "C".to_string(),
            url: "U".to_string(),
            score: 0.5,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"title\":\"T\""));
        assert!(json.contains("\"score\":0.5"));
    }
}
