use serde::{Deserialize, Serialize};

/// Default host serving all three sub-resources.
pub const DEFAULT_BASE_URL: &str = "http://dataservice.accuweather.com";

/// Language sent with every request when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en-us";

/// Default `offset` used by the location sub-client.
pub const DEFAULT_OFFSET: u32 = 100;

/// Options accepted when constructing a client.
///
/// Only `apikey` is required. A missing or wrong key is not validated here;
/// it surfaces later as a 401 from the service. Every optional field has a
/// fixed default resolved when a sub-client is built, after which the
/// sub-client's configuration is immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientOptions {
    /// AccuWeather API key.
    pub apikey: String,
    /// Language of the returned data, e.g. `"en-us"` or `"de-de"`.
    pub language: Option<String>,
    /// Whether endpoints return fully-populated records.
    pub detail: Option<bool>,
    /// First resource to return from listing endpoints (location client only).
    pub offset: Option<u32>,
    /// Whether forecast values use metric units (forecast client only).
    pub metric: Option<bool>,
    /// Override of the service host, mainly for tests.
    pub base_url: Option<String>,
}

impl ClientOptions {
    pub fn new(apikey: impl Into<String>) -> Self {
        Self {
            apikey: apikey.into(),
            language: None,
            detail: None,
            offset: None,
            metric: None,
            base_url: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: bool) -> Self {
        self.detail = Some(detail);
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn with_metric(mut self, metric: bool) -> Self {
        self.metric = Some(metric);
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub(crate) fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub(crate) fn detail(&self) -> bool {
        self.detail.unwrap_or(false)
    }

    pub(crate) fn offset(&self) -> u32 {
        self.offset.unwrap_or(DEFAULT_OFFSET)
    }

    pub(crate) fn metric(&self) -> bool {
        self.metric.unwrap_or(false)
    }

    pub(crate) fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or(DEFAULT_BASE_URL)
    }
}
