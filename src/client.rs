//! The search client and its request/response pipeline.

use std::time::{Duration, Instant};

use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::{error, info};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ErrorContext;
use crate::format::{render, FormattedResult};
use crate::params::SearchParams;
use crate::response::classify;
use crate::{Result, SearchError};

/// Fixed path of the search endpoint on the backend.
const SEARCH_PATH: &str = "/search";

/// Client for a single SearXNG instance.
///
/// Holds an HTTP client configured once (timeout, user-agent, proxy); each
/// [`search`](Self::search) call is an independent request with no state
/// shared between invocations.
pub struct SearxngClient {
    config: ClientConfig,
    http: Client,
}

impl SearxngClient {
    /// Creates a client from the given configuration.
    ///
    /// Fails with [`SearchError::Configuration`] when the proxy or HTTP
    /// client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().timeout(Duration::from_secs(30));

        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(proxy.to_proxy()?);
        }

        let http = builder
            .build()
            .map_err(|e| SearchError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Creates a client from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Builds the fully-resolved request URL for the given parameters.
    ///
    /// Runs before any network I/O: a malformed base URL fails here.
    fn endpoint(&self, params: &SearchParams) -> Result<Url> {
        let base = Url::parse(&self.config.base_url).map_err(|e| {
            SearchError::Configuration(format!(
                "Invalid SearXNG URL '{}': {}. Expected a base URL like http://host:port",
                self.config.base_url, e
            ))
        })?;

        let mut url = base.join(SEARCH_PATH).map_err(|e| {
            SearchError::Configuration(format!(
                "Invalid SearXNG URL '{}': {}. Expected a base URL like http://host:port",
                self.config.base_url, e
            ))
        })?;

        {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params.to_query_pairs() {
                query_pairs.append_pair(key, &value);
            }
        }

        Ok(url)
    }

    /// Diagnostic context for the given resolved URL. Never carries the
    /// password.
    fn context(&self, url: &Url) -> ErrorContext {
        ErrorContext {
            url: url.to_string(),
            searxng_url: Some(self.config.base_url.clone()),
            proxy: self.config.proxy.is_some(),
            username: self.config.auth.as_ref().map(|a| a.username.clone()),
        }
    }

    /// Performs a search and returns the shaped result records.
    ///
    /// The structured counterpart of [`search`](Self::search) for callers
    /// that want records rather than the rendered digest.
    pub async fn search_results(&self, params: &SearchParams) -> Result<Vec<FormattedResult>> {
        match self.run(params).await {
            Ok(results) => Ok(results),
            Err(e) => {
                error!("Search failed for \"{}\": {}", params.query, e);
                Err(e)
            }
        }
    }

    /// Performs a search and returns the human-readable digest.
    ///
    /// Zero results is a success and yields a descriptive message, not an
    /// error.
    pub async fn search(&self, params: &SearchParams) -> Result<String> {
        let results = self.search_results(params).await?;
        Ok(render(&params.query, &results))
    }

    async fn run(&self, params: &SearchParams) -> Result<Vec<FormattedResult>> {
        let url = self.endpoint(params)?;
        let context = self.context(&url);
        let start = Instant::now();

        info!("Searching {}", url);

        let mut request = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json");

        if let Some(auth) = &self.config.auth {
            request = request.basic_auth(&auth.username, Some(&auth.password));
        }

        let response = request.send().await.map_err(|e| SearchError::Network {
            message: e.to_string(),
            context: context.clone(),
        })?;

        let status = response.status();
        let body = response.text().await;

        let raw = classify(status, body, &params.query, &context)?;
        let results: Vec<FormattedResult> = raw.into_iter().map(Into::into).collect();

        info!(
            "Found {} results for \"{}\" in {}ms",
            results.len(),
            params.query,
            start.elapsed().as_millis()
        );

        Ok(results)
    }
}
