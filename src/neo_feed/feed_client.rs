//! # NeoWs retrieval client
//!
//! [`NeoFeedClient`] owns a persistent [`reqwest::Client`] and the [`FeedConfig`] holding
//! the NASA API key. It is the only component that ever sees the key; the computation
//! modules receive plain [`RawNeo`] records.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use neoscene::neo_feed::feed_client::{FeedConfig, NeoFeedClient};
//!
//! # async fn run() -> Result<(), neoscene::neo_errors::NeoSceneError> {
//! let client = NeoFeedClient::new(FeedConfig::new("DEMO_KEY"))?;
//! let neos = client.fetch_pages(0, 2).await?;
//! println!("{} NEOs fetched", neos.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Notes
//!
//! - Each page is requested once; there is no retry.
//! - Request URLs contain the key as a query parameter. Anything that leaves this module
//!   for a log line or an error message goes through [`redact_api_key`], and
//!   [`reqwest::Error`]s are stripped of their URL.
//! - [`load_browse_file`] reads a previously saved browse response, for offline runs.
use std::{fmt, fs, sync::LazyLock, time::Duration};

use camino::Utf8Path;
use regex::Regex;
use reqwest::Url;
use tracing::{debug, info};

use crate::neo_errors::NeoSceneError;

use super::{NeoBrowsePage, RawNeo};

/// Production NeoWs REST root.
pub const NEOWS_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1";

/// Key accepted by api.nasa.gov for low-volume anonymous use.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

static API_KEY_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(api_key=)[^&\s]*").expect("static regex is valid"));

/// Mask the value of any `api_key` query parameter found in `text`.
pub fn redact_api_key(text: &str) -> String {
    API_KEY_PARAM.replace_all(text, "${1}***").into_owned()
}

/// Connection settings for the NeoWs browse endpoint.
///
/// # Fields
///
/// * `base_url` - REST root, without trailing slash
/// * `page_size` - optional `size` query parameter; the provider default (20) when `None`
/// * `timeout` - global timeout of each request
#[derive(Clone)]
pub struct FeedConfig {
    pub base_url: String,
    api_key: String,
    pub page_size: Option<u32>,
    pub timeout: Duration,
}

impl FeedConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        FeedConfig {
            base_url: NEOWS_BASE_URL.to_string(),
            api_key: api_key.into(),
            page_size: None,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: Option<u32>) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for FeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("page_size", &self.page_size)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct NeoFeedClient {
    http_client: reqwest::Client,
    config: FeedConfig,
}

impl NeoFeedClient {
    /// Create a client with the configured timeout.
    pub fn new(config: FeedConfig) -> Result<Self, NeoSceneError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(reqwest::Error::without_url)?;

        Ok(NeoFeedClient {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Build the URL of one browse page.
    ///
    /// Return
    /// ------
    /// * `{base_url}/neo/browse?api_key=..&page=..[&size=..]`, or
    ///   [`NeoSceneError::InvalidUrl`] if the base URL does not parse.
    pub fn browse_url(&self, page: u32) -> Result<Url, NeoSceneError> {
        let raw = format!("{}/neo/browse", self.config.base_url);
        let mut url = Url::parse(&raw).map_err(|e| NeoSceneError::InvalidUrl(format!("{raw}: {e}")))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("api_key", &self.config.api_key);
            query.append_pair("page", &page.to_string());
            if let Some(size) = self.config.page_size {
                query.append_pair("size", &size.to_string());
            }
        }
        Ok(url)
    }

    /// Fetch and decode one browse page.
    ///
    /// A non-success HTTP status is reported as [`NeoSceneError::HttpStatus`] with the
    /// redacted URL.
    pub async fn fetch_page(&self, page: u32) -> Result<NeoBrowsePage, NeoSceneError> {
        let url = self.browse_url(page)?;
        let shown_url = redact_api_key(url.as_str());
        debug!(url = %shown_url, "requesting NeoWs browse page");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NeoSceneError::HttpStatus {
                status: status.as_u16(),
                url: shown_url,
            });
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch up to `count` consecutive pages starting at `first` and concatenate their
    /// records in page order.
    ///
    /// Stops early when the provider reports that no further page exists. Any failed
    /// request aborts the whole fetch.
    pub async fn fetch_pages(&self, first: u32, count: u32) -> Result<Vec<RawNeo>, NeoSceneError> {
        let mut neos = Vec::new();
        for page in first..first.saturating_add(count) {
            let browse = self.fetch_page(page).await?;
            info!(
                page,
                records = browse.near_earth_objects.len(),
                "fetched NeoWs browse page"
            );
            let has_next = browse.has_next_page();
            neos.extend(browse.near_earth_objects);
            if !has_next {
                break;
            }
        }
        Ok(neos)
    }
}

/// Read a browse response saved to disk.
pub fn load_browse_file(path: &Utf8Path) -> Result<NeoBrowsePage, NeoSceneError> {
    let content = fs::read_to_string(path)?;
    let page: NeoBrowsePage = serde_json::from_str(&content)?;
    info!(
        path = %path,
        records = page.near_earth_objects.len(),
        "loaded NeoWs browse file"
    );
    Ok(page)
}
