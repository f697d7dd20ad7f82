// src/github/client.rs
// =============================================================================
// A small wrapper around reqwest::Client for the GitHub REST API.
//
// It knows:
// - the API base URL (api.github.com or a test server)
// - the default headers GitHub wants (User-Agent, Accept, optional token)
// - how to turn a response into a FetchError when something goes wrong
//
// The wrapper is cheap to clone (reqwest::Client is reference counted), so
// background tasks each get their own copy.
// =============================================================================

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::error::FetchError;

#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: Url,
    max_pages: usize,
}

impl GitHubClient {
    /// Builds the HTTP client with GitHub's default headers.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("Invalid User-Agent value")?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .context("Invalid token value")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(GitHubClient {
            http,
            api_base: config.api_base.clone(),
            max_pages: config.max_pages,
        })
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// `{api}/users/{username}`
    pub fn user_url(&self, username: &str) -> Url {
        self.endpoint(&["users", username])
    }

    /// `{api}/users/{username}/repos`
    pub fn repos_url(&self, username: &str) -> Url {
        self.endpoint(&["users", username, "repos"])
    }

    // Appends path segments to the API base. Segments are percent-encoded,
    // so a username like "a/b" cannot escape its path segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_base.clone();
        // The base was validated by config::parse_api_base, so this never fails
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends a GET and turns non-2xx answers into `FetchError::Status`.
    pub async fn get(&self, url: Url) -> Result<Response, FetchError> {
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Network { url: url.to_string(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status });
        }

        Ok(response)
    }

    /// GET and decode the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let response = self.get(url.clone()).await?;
        decode_json(&url, response).await
    }
}

/// Decodes a response body as JSON.
pub async fn decode_json<T: DeserializeOwned>(url: &Url, response: Response) -> Result<T, FetchError> {
    response
        .json::<T>()
        .await
        .map_err(|source| FetchError::Decode { url: url.to_string(), source })
}

/// Parses a URL that came out of an API response.
pub fn parse_url(raw: &str) -> Result<Url, FetchError> {
    Url::parse(raw).map_err(|source| FetchError::InvalidUrl { url: raw.to_string(), source })
}
