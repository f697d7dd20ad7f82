// src/github/mod.rs
// =============================================================================
// Everything that talks to the GitHub REST API.
//
// Submodules:
// - client:    shared reqwest client, endpoint URLs, error mapping
// - models:    response shapes and the display Profile
// - profile:   GET /users/{username}
// - paging:    GET /users/{username}/repos, following Link: rel="next"
// - languages: GET {languages_url} for each visible repository, concurrently
// =============================================================================

mod client;
mod languages;
mod models;
mod paging;
mod profile;

#[cfg(test)]
pub mod test_support;

pub use client::GitHubClient;
pub use languages::fetch_languages;
pub use models::{LanguageSet, Profile, Repository};
pub use paging::fetch_repositories;
pub use profile::fetch_profile;

#[cfg(test)]
pub use models::{NO_BIO, NO_DESCRIPTION};
