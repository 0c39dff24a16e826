use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientOptions;
use crate::error::{Error, Result};

/// A request sender bound to one sub-resource of the service.
///
/// Holds the joined base URL (`{host}/{service}/v1`) and the sub-client's
/// default query parameters, which are attached to every outgoing request
/// before any call-specific parameters.
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    http: Client,
    base_url: String,
    default_params: Vec<(&'static str, String)>,
}

impl Endpoint {
    pub(crate) fn new(
        options: &ClientOptions,
        service: &str,
        default_params: Vec<(&'static str, String)>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: format!("{}/{service}/v1", options.base_url()),
            default_params,
        }
    }

    /// GET `path` and parse the body into `T`.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let body = self.send(path, params).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET `path` and parse the body into a sequence.
    ///
    /// An absent body (`null` or empty) is normalized to an empty `Vec`;
    /// this policy is applied uniformly to every list-returning endpoint.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let body = self.send(path, params).await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let parsed: Option<Vec<T>> = serde_json::from_str(&body)?;
        Ok(parsed.unwrap_or_default())
    }

    async fn send(&self, path: &str, params: &[(&str, String)]) -> Result<String> {
        let url = format!("{}/{path}", self.base_url);
        debug!(%url, "sending request");

        let res = self
            .http
            .get(&url)
            .query(&self.default_params)
            .query(params)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            debug!(%url, status = status.as_u16(), "request failed");
            return Err(Error::from_status(status.as_u16()));
        }

        Ok(res.text().await?)
    }
}

/// Select among the three search-path variants based on which identifying
/// codes are present. An empty string counts as absent; an admin-area code
/// without a country code cannot address a valid path, so it falls back to
/// the generic variant.
pub(crate) fn tiered_search_path(
    resource: &str,
    country_code: Option<&str>,
    admin_code: Option<&str>,
) -> String {
    let country = non_empty(country_code);
    let admin = non_empty(admin_code);

    match (country, admin) {
        (Some(cc), Some(ac)) => format!("{resource}/{cc}/{ac}/search"),
        (Some(cc), None) => format!("{resource}/{cc}/search"),
        _ => format!("{resource}/search"),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
