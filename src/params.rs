//! Search parameters and normalization into outgoing query pairs.

use serde::{Deserialize, Serialize};

/// Safe search level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SafeSearch {
    /// No filtering.
    #[default]
    Off = 0,
    /// Moderate filtering.
    Moderate = 1,
    /// Strict filtering.
    Strict = 2,
}

impl SafeSearch {
    /// Returns the wire value sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            SafeSearch::Off => "0",
            SafeSearch::Moderate => "1",
            SafeSearch::Strict => "2",
        }
    }

    /// Lenient parse from raw caller input.
    ///
    /// Accepts exactly "0", "1" or "2"; anything else is treated as
    /// "not specified" rather than an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "0" => Some(SafeSearch::Off),
            "1" => Some(SafeSearch::Moderate),
            "2" => Some(SafeSearch::Strict),
            _ => None,
        }
    }
}

/// Time range filter for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    Day,
    Month,
    Year,
}

impl TimeRange {
    /// Returns the wire value sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "day",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
        }
    }

    /// Lenient parse from raw caller input.
    ///
    /// Accepts exactly "day", "month" or "year"; anything else is treated as
    /// "not specified" rather than an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "day" => Some(TimeRange::Day),
            "month" => Some(TimeRange::Month),
            "year" => Some(TimeRange::Year),
            _ => None,
        }
    }
}

/// Sentinel language value meaning "no language restriction".
const LANGUAGE_ALL: &str = "all";

/// A search request with all parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// The search terms.
    pub query: String,
    /// Page number (1-indexed).
    pub pageno: u32,
    /// Time range filter.
    pub time_range: Option<TimeRange>,
    /// Language/locale (e.g., "en-US"); "all" means unrestricted.
    pub language: Option<String>,
    /// Safe search level.
    pub safesearch: Option<SafeSearch>,
}

impl SearchParams {
    /// Creates search parameters with the given terms.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            pageno: 1,
            time_range: None,
            language: None,
            safesearch: None,
        }
    }

    /// Sets the page number. Zero is treated as the first page.
    pub fn with_page(mut self, pageno: u32) -> Self {
        self.pageno = pageno.max(1);
        self
    }

    /// Sets the time range filter.
    pub fn with_time_range(mut self, range: TimeRange) -> Self {
        self.time_range = Some(range);
        self
    }

    /// Sets the time range from raw caller input; out-of-enum values are
    /// silently dropped.
    pub fn with_time_range_str(mut self, range: &str) -> Self {
        self.time_range = TimeRange::parse(range);
        self
    }

    /// Sets the language/locale.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the safe search level.
    pub fn with_safesearch(mut self, level: SafeSearch) -> Self {
        self.safesearch = Some(level);
        self
    }

    /// Sets the safe search level from raw caller input; out-of-enum values
    /// are silently dropped.
    pub fn with_safesearch_str(mut self, level: &str) -> Self {
        self.safesearch = SafeSearch::parse(level);
        self
    }

    /// Produces the outgoing query-string pairs.
    ///
    /// `q`, `format=json` and `pageno` are always present. Optional filters
    /// are included only when valid: unknown values were already dropped at
    /// parse time, and `language` equal to "all" is omitted. This stage
    /// never fails.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("q", self.query.clone()),
            ("format", "json".to_string()),
            ("pageno", self.pageno.to_string()),
        ];

        if let Some(range) = self.time_range {
            pairs.push(("time_range", range.as_str().to_string()));
        }

        if let Some(language) = &self.language {
            if language != LANGUAGE_ALL {
                pairs.push(("language", language.clone()));
            }
        }

        if let Some(level) = self.safesearch {
            pairs.push(("safesearch", level.as_str().to_string()));
        }

        pairs
    }
}
