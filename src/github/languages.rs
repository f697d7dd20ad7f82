// src/github/languages.rs
// =============================================================================
// Fetches the language list of every repository on the visible page.
//
// One GET per repository `languages_url`, all issued at once and awaited
// together (join_all keeps the results in the same order as the input).
// The response is an object like {"Rust": 120345, "Shell": 512}; we keep
// only the keys.
//
// A failing repository gets an empty list. It never takes the rest of the
// page down with it.
// =============================================================================

use futures::future;
use serde_json::{Map, Value};

use super::client::{parse_url, GitHubClient};
use super::models::{LanguageSet, Repository};
use crate::error::FetchError;

/// Language sets for `repositories`, index for index.
pub async fn fetch_languages(client: &GitHubClient, repositories: &[Repository]) -> Vec<LanguageSet> {
    let requests = repositories.iter().map(|repo| async move {
        match fetch_repository_languages(client, repo).await {
            Ok(languages) => languages,
            Err(e) => {
                tracing::warn!(repository = %repo.name, error = %e, "Could not fetch languages");
                LanguageSet::new()
            }
        }
    });

    future::join_all(requests).await
}

async fn fetch_repository_languages(client: &GitHubClient, repo: &Repository) -> Result<LanguageSet, FetchError> {
    let url = parse_url(&repo.languages_url)?;
    let languages: Map<String, Value> = client.get_json(url).await?;
    Ok(languages.keys().cloned().collect())
}
