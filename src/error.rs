// src/error.rs
// =============================================================================
// Errors that can happen while talking to the GitHub API.
//
// Every fetch (profile, repository pages, languages) returns a FetchError on
// failure. None of them is fatal: the callers log the error and fall back to
// placeholder content, a partial repository list, or an empty tag list.
//
// Application-level failures (bad flags, unwritable output file, template
// registration) use anyhow instead, see main.rs.
// =============================================================================

use reqwest::StatusCode;

/// Failure of a single request against the API.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// A URL (usually one handed to us by the API) could not be parsed.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// The body was not the JSON we expected.
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
