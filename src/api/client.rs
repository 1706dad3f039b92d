//! REST Countries client.
//!
//! Every call is a read-only, unauthenticated `GET` that returns JSON. The
//! `fields` query trims each payload to what the listing or details page
//! actually renders.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::types::{BorderCountry, CodeName, CountryDetail, CountryRecord};

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

const LISTING_FIELDS: &str = "name,region,population,flags,capital";
const DETAIL_FIELDS: &str =
    "name,subregion,region,capital,flags,tld,currencies,languages,borders,population";
const CODE_FIELDS: &str = "name,cca3";

/// Errors that can occur while talking to the country API.
#[derive(Debug)]
pub enum ApiError {
    /// Transport failure (DNS, connection refused, bad base URL).
    Network(String),
    /// The API answered with a non-success status.
    Api { status: u16, message: String },
    /// The body did not match the expected shape.
    Parse(String),
    /// No country matched the requested name.
    NotFound(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
            ApiError::NotFound(name) => write!(f, "country not found: {name}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Anything that can supply country data to the app.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Fetches the full listing dataset.
    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, ApiError>;

    /// Fetches the details record for a country by its common name.
    async fn fetch_detail(&self, name: &str) -> Result<CountryDetail, ApiError>;

    /// Resolves alpha-3 codes to common names, preserving the input order.
    /// Codes the API does not know come back with `name: None`.
    async fn resolve_borders(&self, codes: &[String]) -> Result<Vec<BorderCountry>, ApiError>;
}

pub struct RestCountriesClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestCountriesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Builds `{base}/{segments...}?fields=...`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ApiError::Network(format!("bad base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Network(format!("base URL cannot hold a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Country API response status: {}", status);

        if !status.is_success() {
            let status = status.as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Country API error: {} - {}", status, message);
            return Err(ApiError::Api { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for RestCountriesClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, ApiError> {
        let url = self.endpoint(&["all"], &[("fields", LISTING_FIELDS)])?;
        let records: Vec<CountryRecord> = self.get_json(url).await?;
        info!("Fetched {} countries", records.len());
        Ok(records)
    }

    async fn fetch_detail(&self, name: &str) -> Result<CountryDetail, ApiError> {
        let url = self.endpoint(&["name", name], &[("fields", DETAIL_FIELDS)])?;
        let matches: Vec<CountryDetail> = match self.get_json(url).await {
            Err(ApiError::Api { status: 404, .. }) => {
                return Err(ApiError::NotFound(name.to_string()));
            }
            other => other?,
        };
        info!("Fetched details for {} ({} matches)", name, matches.len());
        pick_exact(matches, name).ok_or_else(|| ApiError::NotFound(name.to_string()))
    }

    async fn resolve_borders(&self, codes: &[String]) -> Result<Vec<BorderCountry>, ApiError> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }
        let joined = codes.join(",");
        let url = self.endpoint(&["alpha"], &[("codes", &joined), ("fields", CODE_FIELDS)])?;
        let rows: Vec<CodeName> = self.get_json(url).await?;
        debug!("Resolved {} of {} border codes", rows.len(), codes.len());
        Ok(codes
            .iter()
            .map(|code| BorderCountry {
                code: code.clone(),
                name: rows
                    .iter()
                    .find(|row| row.cca3.eq_ignore_ascii_case(code))
                    .map(|row| row.name.common.clone()),
            })
            .collect())
    }
}

/// `/name/{name}` is a partial-name search ("Niger" also returns Nigeria).
/// Prefers the record whose common name equals the lookup key, else the first.
fn pick_exact(matches: Vec<CountryDetail>, name: &str) -> Option<CountryDetail> {
    let exact = matches
        .iter()
        .position(|detail| detail.name.common.eq_ignore_ascii_case(name));
    match exact {
        Some(index) => matches.into_iter().nth(index),
        None => {
            if matches.len() > 1 {
                warn!("No exact match for {}, using first of {} results", name, matches.len());
            }
            matches.into_iter().next()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_name_segment() {
        let client = RestCountriesClient::new("https://example.test/v3.1/");
        let url = client
            .endpoint(&["name", "United States"], &[("fields", "name")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.test/v3.1/name/United%20States?fields=name"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = RestCountriesClient::new("https://example.test/v3.1");
        let url = client.endpoint(&["all"], &[]).unwrap();
        assert_eq!(url.path(), "/v3.1/all");
    }

    #[test]
    fn test_bad_base_url_is_network_error() {
        let client = RestCountriesClient::new("not a url");
        let result = client.endpoint(&["all"], &[]);
        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[test]
    fn test_resolve_borders_empty_skips_request() {
        // Unroutable base URL: any real request would fail.
        let client = RestCountriesClient::new("http://127.0.0.1:9");
        let result = tokio_test::block_on(client.resolve_borders(&[]));
        assert_eq!(result.unwrap(), Vec::new());
    }

    #[test]
    fn test_pick_exact_ignores_case_and_order() {
        let named = |common: &str| {
            let mut detail = crate::test_support::france_detail();
            detail.name.common = common.to_string();
            detail
        };
        let matches = vec![named("Dominican Republic"), named("Dominica")];
        let picked = pick_exact(matches, "dominica").unwrap();
        assert_eq!(picked.name.common, "Dominica");

        assert!(pick_exact(Vec::new(), "Dominica").is_none());
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Api { status: 500, message: "boom".into() };
        assert_eq!(err.to_string(), "API error (HTTP 500): boom");
        assert_eq!(
            ApiError::NotFound("Narnia".into()).to_string(),
            "country not found: Narnia"
        );
    }
}
