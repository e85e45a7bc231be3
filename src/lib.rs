//! # searxng-client
//!
//! A client for the SearXNG JSON API, turning web-search queries into either
//! a formatted text digest or a typed, diagnosable error.
//!
//! The pipeline is a single request/response pass: normalize parameters,
//! build the request (optional forward proxy, basic-auth and User-Agent),
//! perform one GET, classify the response (status, JSON validity, payload
//! shape) and render the results. Every failure mode maps to a distinct
//! [`SearchError`] variant; an empty result set is a success.
//!
//! ## Example
//!
//! ```rust,no_run
//! use searxng_client::{ClientConfig, SearchParams, SearxngClient, TimeRange};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::new("http://localhost:8080");
//!     let client = SearxngClient::new(config)?;
//!
//!     let params = SearchParams::new("rust programming")
//!         .with_time_range(TimeRange::Month)
//!         .with_language("en");
//!
//!     println!("{}", client.search(&params).await?);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod format;
mod params;
mod response;

pub mod proxy;

pub use client::SearxngClient;
pub use config::{ClientConfig, Credentials};
pub use error::{ErrorContext, Result, SearchError};
pub use format::{render, FormattedResult};
pub use params::{SafeSearch, SearchParams, TimeRange};
pub use response::{RawResult, SearxResponse};
