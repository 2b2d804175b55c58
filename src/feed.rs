//! One-shot loading of the `{"data": [[date, value], ...]}` feed.
//!
//! The engine only depends on [`DataSource`]; the HTTP implementation sits
//! behind the `fetch` feature.

use serde::Deserialize;
#[cfg(feature = "fetch")]
use tracing::debug;

use crate::core::{Dataset, DatasetValidation, RawObservation};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Deserialize)]
struct FeedPayload {
    data: Vec<(String, f64)>,
}

/// Decodes the feed body into raw pairs, keeping input order.
///
/// Unknown top-level fields are ignored.
pub fn parse_feed(body: &str) -> ChartResult<Vec<RawObservation>> {
    let payload: FeedPayload = serde_json::from_str(body)
        .map_err(|e| ChartError::Parse(format!("failed to decode feed json: {e}")))?;
    Ok(payload
        .data
        .into_iter()
        .map(|(date, value)| RawObservation { date, value })
        .collect())
}

/// Anything that can produce the dataset once, before rendering starts.
pub trait DataSource {
    fn load(&self, validation: DatasetValidation) -> ChartResult<Dataset>;
}

/// Feed body already held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    body: String,
}

impl StaticSource {
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl DataSource for StaticSource {
    fn load(&self, validation: DatasetValidation) -> ChartResult<Dataset> {
        let raw = parse_feed(&self.body)?;
        Dataset::from_raw(&raw, validation)
    }
}

/// Blocking HTTP GET of the feed: one request, no retry.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: Option<reqwest::blocking::Client>,
}

#[cfg(feature = "fetch")]
impl HttpSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: None,
        }
    }

    /// Sends the request through `client` instead of a default one.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::blocking::Client) -> Self {
        self.client = Some(client);
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the raw response body of a successful (2xx) response.
    pub fn fetch_body(&self) -> ChartResult<String> {
        debug!(url = %self.url, "fetching feed");
        let response = match &self.client {
            Some(client) => client.get(&self.url).send(),
            None => reqwest::blocking::get(&self.url),
        }
        .map_err(|e| ChartError::Network(format!("request to {} failed: {e}", self.url)))?;
        let status = response.status();
        let response = response.error_for_status().map_err(|e| {
            ChartError::Network(format!("{} responded with {status}: {e}", self.url))
        })?;
        let body = response.text().map_err(|e| {
            ChartError::Network(format!("failed to read body from {}: {e}", self.url))
        })?;
        debug!(url = %self.url, %status, bytes = body.len(), "feed fetched");
        Ok(body)
    }
}

#[cfg(feature = "fetch")]
impl DataSource for HttpSource {
    fn load(&self, validation: DatasetValidation) -> ChartResult<Dataset> {
        let raw = parse_feed(&self.fetch_body()?)?;
        debug!(rows = raw.len(), "feed decoded");
        Dataset::from_raw(&raw, validation)
    }
}

/// Fetches and transforms the feed at `url` with permissive validation.
#[cfg(feature = "fetch")]
pub fn fetch_dataset(url: &str) -> ChartResult<Dataset> {
    HttpSource::new(url).load(DatasetValidation::Permissive)
}
