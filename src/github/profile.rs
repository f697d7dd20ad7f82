// src/github/profile.rs
// =============================================================================
// Fetches the header data for a user: GET /users/{username}.
//
// One request, no retry. Callers decide what to do on failure; the session
// logs the error and shows Profile::placeholder() instead.
// =============================================================================

use super::client::GitHubClient;
use super::models::{Profile, UserResponse};
use crate::error::FetchError;

/// Fetches and maps a user profile.
pub async fn fetch_profile(client: &GitHubClient, username: &str) -> Result<Profile, FetchError> {
    let url = client.user_url(username);
    let user: UserResponse = client.get_json(url).await?;
    Ok(Profile::from(user))
}
