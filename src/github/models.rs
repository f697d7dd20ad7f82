// src/github/models.rs
// =============================================================================
// Data shapes coming back from the GitHub API, and the display form of a
// profile.
//
// The API may leave any profile field null (users without a bio, location,
// ...). `Profile` is what we actually show: every field filled in, with a
// placeholder wherever the API had nothing. Empty strings count as nothing.
// =============================================================================

use serde::{Deserialize, Serialize};

pub const NO_USERNAME: &str = "Username not available";
pub const NO_BIO: &str = "No bio available";
pub const NO_LOCATION: &str = "No location available";
pub const NO_PROFILE_URL: &str = "Profile URL not available";
pub const NO_DESCRIPTION: &str = "No description available";
pub const DEFAULT_AVATAR_URL: &str =
    "https://res.cloudinary.com/dsxyzdqvo/image/upload/v1705655881/icon-profile-0_ityquz.png";

/// Raw `/users/{username}` response. Only the fields we display.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserResponse {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Profile as displayed in the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub login: String,
    pub bio: String,
    pub location: String,
    pub avatar_url: String,
    /// Target of the profile link ("#" when unknown)
    pub profile_url: String,
    /// Text of the profile link
    pub profile_link_text: String,
}

impl Profile {
    /// What the header shows when the profile could not be fetched.
    pub fn placeholder() -> Self {
        Profile::from(UserResponse::default())
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile::placeholder()
    }
}

impl From<UserResponse> for Profile {
    fn from(user: UserResponse) -> Self {
        let html_url = present(user.html_url);
        Profile {
            login: present(user.login).unwrap_or_else(|| NO_USERNAME.to_string()),
            bio: present(user.bio).unwrap_or_else(|| NO_BIO.to_string()),
            location: present(user.location).unwrap_or_else(|| NO_LOCATION.to_string()),
            avatar_url: present(user.avatar_url).unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
            profile_url: html_url.clone().unwrap_or_else(|| "#".to_string()),
            profile_link_text: html_url.unwrap_or_else(|| NO_PROFILE_URL.to_string()),
        }
    }
}

// Treats "" the same as a missing field
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// One entry of `/users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub languages_url: String,
}

impl Repository {
    /// The description, or the placeholder when there is none.
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => NO_DESCRIPTION,
        }
    }
}

/// Language names of one repository, in the order GitHub listed them.
pub type LanguageSet = Vec<String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_full_response() {
        let user: UserResponse = serde_json::from_str(
            r#"{
                "login": "octocat",
                "id": 583231,
                "bio": "There once was...",
                "location": "San Francisco",
                "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
                "html_url": "https://github.com/octocat"
            }"#,
        )
        .unwrap();

        let profile = Profile::from(user);
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.bio, "There once was...");
        assert_eq!(profile.location, "San Francisco");
        assert_eq!(profile.profile_url, "https://github.com/octocat");
        assert_eq!(profile.profile_link_text, "https://github.com/octocat");
    }

    #[test]
    fn test_profile_missing_bio() {
        let user: UserResponse = serde_json::from_str(r#"{"login": "octocat", "bio": null}"#).unwrap();
        let profile = Profile::from(user);
        assert_eq!(profile.bio, NO_BIO);
        assert_eq!(profile.location, NO_LOCATION);
        assert_eq!(profile.avatar_url, DEFAULT_AVATAR_URL);
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let user: UserResponse =
            serde_json::from_str(r#"{"login": "", "location": "", "html_url": ""}"#).unwrap();
        let profile = Profile::from(user);
        assert_eq!(profile.login, NO_USERNAME);
        assert_eq!(profile.location, NO_LOCATION);
        assert_eq!(profile.profile_url, "#");
        assert_eq!(profile.profile_link_text, NO_PROFILE_URL);
    }

    #[test]
    fn test_placeholder_profile() {
        let profile = Profile::placeholder();
        assert_eq!(profile.login, NO_USERNAME);
        assert_eq!(profile.profile_url, "#");
    }

    #[test]
    fn test_repository_description_fallback() {
        let repos: Vec<Repository> = serde_json::from_str(
            r#"[
                {"name": "a", "description": "first", "languages_url": "https://x/a"},
                {"name": "b", "description": null, "languages_url": "https://x/b"},
                {"name": "c"}
            ]"#,
        )
        .unwrap();

        assert_eq!(repos[0].description_or_default(), "first");
        assert_eq!(repos[1].description_or_default(), NO_DESCRIPTION);
        assert_eq!(repos[2].description_or_default(), NO_DESCRIPTION);
        assert_eq!(repos[2].languages_url, "");
    }
}
