// src/config.rs
// =============================================================================
// Runtime configuration for the GitHub client.
//
// Values come from the command line (with environment fallbacks declared in
// cli.rs). They are validated once here so the rest of the program can take
// them for granted: the API base is a hierarchical http(s) URL, the page
// limit is at least one, and the timeout is at least one second.
// =============================================================================

use anyhow::{bail, Context, Result};
use std::time::Duration;
use url::Url;

use crate::cli::Cli;

/// Public GitHub REST API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Upper bound on `Link: rel="next"` hops for one user.
pub const DEFAULT_MAX_PAGES: usize = 50;

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Everything the HTTP layer needs to know.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: Url,
    pub token: Option<String>,
    pub timeout: Duration,
    pub max_pages: usize,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            // DEFAULT_API_BASE is a constant, well-formed URL
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is valid"),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_pages: DEFAULT_MAX_PAGES,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Builds and validates the configuration from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let api_base = parse_api_base(&cli.api_base)?;

        if cli.max_pages == 0 {
            bail!("--max-pages must be at least 1");
        }
        if cli.timeout == 0 {
            bail!("--timeout must be at least 1 second");
        }

        // An empty GITHUB_TOKEN is the same as no token
        let token = cli
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        Ok(ClientConfig {
            api_base,
            token,
            timeout: Duration::from_secs(cli.timeout),
            max_pages: cli.max_pages,
            user_agent: default_user_agent(),
        })
    }
}

/// Parses the API base and rejects URLs we cannot append path segments to.
pub fn parse_api_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("Invalid API base URL '{}'", raw))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        bail!("API base URL must use http or https: {}", raw);
    }
    if url.cannot_be_a_base() {
        bail!("API base URL cannot have path segments: {}", raw);
    }

    Ok(url)
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
