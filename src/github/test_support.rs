// src/github/test_support.rs
// =============================================================================
// A fake GitHub API for tests.
//
// `serve` binds an axum router to a random local port and returns its base
// URL. `fake_github` builds a router that knows a handful of users and
// serves their repositories 10 per page with real `Link` headers.
// =============================================================================

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::config::{parse_api_base, ClientConfig};
use crate::github::GitHubClient;

/// Spawns `build(base_url)` on 127.0.0.1 and returns the base URL.
pub async fn serve<F>(build: F) -> String
where
    F: FnOnce(String) -> Router,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let router = build(base.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    base
}

pub fn client_for(base: &str) -> GitHubClient {
    let config = ClientConfig {
        api_base: parse_api_base(base).unwrap(),
        ..ClientConfig::default()
    };
    GitHubClient::new(&config).unwrap()
}

/// One user known to the fake API.
#[derive(Clone)]
pub struct FakeUser {
    pub login: String,
    pub profile: Value,
    pub repo_count: usize,
    /// Profile and first repository page answer after this delay.
    pub delay: Duration,
    /// Answer the repository page with this number with a 500.
    pub failing_page: Option<usize>,
    /// Send this as the rel="next" target instead of the real next page.
    pub next_link: Option<String>,
}

impl FakeUser {
    pub fn new(login: &str, repo_count: usize) -> Self {
        FakeUser {
            login: login.to_string(),
            profile: json!({
                "login": login,
                "bio": format!("{} writes code", login),
                "location": "Earth",
                "avatar_url": format!("https://avatars.example.com/{}.png", login),
                "html_url": format!("https://github.com/{}", login),
            }),
            repo_count,
            delay: Duration::ZERO,
            failing_page: None,
            next_link: None,
        }
    }
}

pub const FAKE_PAGE_SIZE: usize = 10;

/// Serves `/users/{login}`, `/users/{login}/repos?page=N` and
/// `/repos/{login}/{repo}/languages` for the given users.
///
/// Languages: every repository is "Rust" + "Shell", except repositories
/// whose index is divisible by 7, whose languages endpoint answers 404.
pub fn fake_github(base: String, users: Vec<FakeUser>) -> Router {
    let users: HashMap<String, FakeUser> = users.into_iter().map(|u| (u.login.clone(), u)).collect();
    let profile_users = users.clone();

    Router::new()
        .route(
            "/users/{login}",
            get(move |Path(login): Path<String>| {
                let users = profile_users.clone();
                async move {
                    match users.get(&login) {
                        Some(user) => {
                            tokio::time::sleep(user.delay).await;
                            Json(user.profile.clone()).into_response()
                        }
                        None => StatusCode::NOT_FOUND.into_response(),
                    }
                }
            }),
        )
        .route(
            "/users/{login}/repos",
            get(
                move |Path(login): Path<String>, Query(query): Query<HashMap<String, String>>| {
                    let users = users.clone();
                    let base = base.clone();
                    async move {
                        let page: usize = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
                        match users.get(&login) {
                            Some(user) => repos_page(&base, user, page).await,
                            None => StatusCode::NOT_FOUND.into_response(),
                        }
                    }
                },
            ),
        )
        .route(
            "/repos/{login}/{repo}/languages",
            get(|Path((_login, repo)): Path<(String, String)>| async move {
                let index: usize = repo.trim_start_matches("repo-").parse().unwrap_or(1);
                if index % 7 == 0 {
                    StatusCode::NOT_FOUND.into_response()
                } else {
                    Json(json!({ "Rust": 12000, "Shell": 300 })).into_response()
                }
            }),
        )
}

async fn repos_page(base: &str, user: &FakeUser, page: usize) -> Response {
    if page == 1 {
        tokio::time::sleep(user.delay).await;
    }
    if user.failing_page == Some(page) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let start = page.saturating_sub(1) * FAKE_PAGE_SIZE;
    let end = (start + FAKE_PAGE_SIZE).min(user.repo_count);
    let repos: Vec<Value> = (start..end)
        .map(|i| {
            let name = format!("repo-{}", i + 1);
            let description = if i % 2 == 0 {
                Value::String(format!("{} by {}", name, user.login))
            } else {
                Value::Null
            };
            json!({
                "name": name,
                "description": description,
                "languages_url": format!("{}/repos/{}/{}/languages", base, user.login, name),
            })
        })
        .collect();

    let last = user.repo_count.div_ceil(FAKE_PAGE_SIZE).max(1);
    let mut links = Vec::new();
    if let Some(target) = &user.next_link {
        links.push(format!("<{}>; rel=\"next\"", target));
    } else if page < last {
        links.push(format!("<{}/users/{}/repos?page={}>; rel=\"next\"", base, user.login, page + 1));
        links.push(format!("<{}/users/{}/repos?page={}>; rel=\"last\"", base, user.login, last));
    }
    if page > 1 {
        links.push(format!("<{}/users/{}/repos?page=1>; rel=\"first\"", base, user.login));
    }

    if links.is_empty() {
        Json(repos).into_response()
    } else {
        ([(header::LINK, links.join(", "))], Json(repos)).into_response()
    }
}
