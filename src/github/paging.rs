// src/github/paging.rs
// =============================================================================
// Fetches every page of /users/{username}/repos.
//
// GitHub paginates list endpoints and says where the next page lives in the
// `Link` response header:
//
//   Link: <https://api.github.com/user/1/repos?page=2>; rel="next",
//         <https://api.github.com/user/1/repos?page=3>; rel="last"
//
// `repository_pages` turns that chain into a lazy stream: nothing is fetched
// until the stream is polled, each poll fetches one page, and the stream
// ends when there is no rel="next" or after `max_pages` pages. Building the
// stream again starts over from page one.
//
// `fetch_repositories` drains the stream into one list. A failed page ends
// the stream; the pages fetched before it are kept.
// =============================================================================

use futures::stream::{self, Stream, StreamExt};
use reqwest::header::LINK;
use url::Url;

use super::client::{decode_json, GitHubClient};
use super::models::Repository;
use crate::error::FetchError;

// Where the stream goes next, and how many pages it has produced so far
struct Cursor {
    url: Url,
    fetched: usize,
}

// What the stream does on its next poll
enum Step {
    Fetch(Cursor),
    // The last page arrived, but its next link was unusable
    Fail(FetchError),
}

/// Lazy stream of repository pages for `username`, in API order.
///
/// Yields at most one `Err`, after which the stream ends. A page whose
/// `Link` target cannot be resolved is still yielded, followed by the error.
pub fn repository_pages(
    client: GitHubClient,
    username: &str,
) -> impl Stream<Item = Result<Vec<Repository>, FetchError>> {
    let first = Cursor {
        url: client.repos_url(username),
        fetched: 0,
    };

    stream::unfold(Some(Step::Fetch(first)), move |step| {
        let client = client.clone();
        async move {
            let cursor = match step? {
                Step::Fetch(cursor) => cursor,
                Step::Fail(e) => return Some((Err(e), None)),
            };

            if cursor.fetched >= client.max_pages() {
                tracing::warn!(
                    url = %cursor.url,
                    max_pages = client.max_pages(),
                    "Page limit reached, not following further pages"
                );
                return None;
            }

            match fetch_page(&client, cursor.url).await {
                Ok((repositories, next)) => {
                    let step = match next {
                        Ok(Some(url)) => Some(Step::Fetch(Cursor {
                            url,
                            fetched: cursor.fetched + 1,
                        })),
                        Ok(None) => None,
                        Err(e) => Some(Step::Fail(e)),
                    };
                    Some((Ok(repositories), step))
                }
                Err(e) => Some((Err(e), None)),
            }
        }
    })
}

/// Result of draining the page stream.
#[derive(Debug, Default)]
pub struct RepositoryFetch {
    /// Every repository received, in order
    pub repositories: Vec<Repository>,
    /// The failure that ended the stream early, if any
    pub error: Option<FetchError>,
}

/// Fetches all repository pages of a user into one list.
pub async fn fetch_repositories(client: &GitHubClient, username: &str) -> RepositoryFetch {
    let mut pages = std::pin::pin!(repository_pages(client.clone(), username));
    let mut result = RepositoryFetch::default();

    while let Some(page) = pages.next().await {
        match page {
            Ok(mut repositories) => {
                tracing::debug!(username, count = repositories.len(), "Received repository page");
                result.repositories.append(&mut repositories);
            }
            Err(e) => {
                result.error = Some(e);
                break;
            }
        }
    }

    result
}

// A page of repositories plus where the next one lives
type Page = (Vec<Repository>, Result<Option<Url>, FetchError>);

// Fetches one page and works out the URL of the next one. A bad next link
// does not fail the page itself.
async fn fetch_page(client: &GitHubClient, url: Url) -> Result<Page, FetchError> {
    let response = client.get(url.clone()).await?;

    let next = response
        .headers()
        .get(LINK)
        .and_then(|value| value.to_str().ok())
        .and_then(next_link)
        .map(|target| {
            // GitHub sends absolute URLs, but relative ones are legal too
            url.join(target).map_err(|source| FetchError::InvalidUrl {
                url: target.to_string(),
                source,
            })
        })
        .transpose();

    let repositories: Vec<Repository> = decode_json(&url, response).await?;
    Ok((repositories, next))
}

/// Extracts the target of the `rel="next"` entry of a Link header.
///
/// Entries are separated by commas, parameters by semicolons:
///   `<url>; rel="next", <url>; rel="last"`
/// A rel value may hold several space-separated relation types.
pub fn next_link(header: &str) -> Option<&str> {
    header.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim().strip_prefix('<')?.strip_suffix('>')?;

        let is_next = parts.any(|param| match param.split_once('=') {
            Some((key, value)) if key.trim().eq_ignore_ascii_case("rel") => value
                .trim()
                .trim_matches('"')
                .split_whitespace()
                .any(|rel| rel.eq_ignore_ascii_case("next")),
            _ => false,
        });

        is_next.then_some(target)
    })
}
