// src/app/session.rs
// =============================================================================
// Runs the effects that UiState::update asks for.
//
// - Effect::Fetch spawns a task that loads the profile and then every
//   repository page, and reports back with Message::Loaded.
// - Effect::Render spawns a task that fetches the languages of the visible
//   repositories (all at once) and reports back with the language sets.
//
// Tasks talk to the session over an mpsc channel; only the session touches
// the state. Starting a new search aborts the tasks of the previous one,
// and anything that was already on its way is recognized as stale by its
// generation/page ticket and dropped.
// =============================================================================

use anyhow::{bail, Result};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::state::{Effect, FetchRequest, LoadOutcome, Message, UiState, ViewTicket};
use crate::github::{fetch_languages, fetch_profile, fetch_repositories, GitHubClient, LanguageSet, Profile};
use crate::render::{build_view, PageView};

/// Loads everything shown for one user: the profile, then all repository
/// pages. Failures are logged and recorded; whatever arrived is kept.
pub async fn load_user(client: &GitHubClient, username: &str) -> LoadOutcome {
    let mut errors = Vec::new();

    let profile = match fetch_profile(client, username).await {
        Ok(profile) => profile,
        Err(e) => {
            if e.is_not_found() {
                tracing::warn!(username, "No such user");
            } else {
                tracing::error!(username, error = %e, "Error fetching profile");
            }
            errors.push(e.to_string());
            Profile::placeholder()
        }
    };

    let fetch = fetch_repositories(client, username).await;
    if let Some(e) = &fetch.error {
        tracing::error!(
            username,
            error = %e,
            kept = fetch.repositories.len(),
            "Error fetching repositories"
        );
        errors.push(e.to_string());
    }

    tracing::info!(username, repositories = fetch.repositories.len(), "Loaded user");
    LoadOutcome {
        profile,
        repositories: fetch.repositories,
        errors,
    }
}

/// A rendered page plus the fetch failures behind it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub view: PageView,
    pub errors: Vec<String>,
}

/// Loads `username` and renders page `page` once, without a session loop.
///
/// A page outside the valid range is logged and page 1 is shown instead.
pub async fn render_once(client: &GitHubClient, username: &str, page: usize) -> Result<Snapshot> {
    let mut state = UiState::default();
    let request = match state.update(Message::Search(username.to_string())) {
        Effect::Fetch(request) => request,
        _ => bail!("Username must not be empty"),
    };

    let outcome = load_user(client, &request.username).await;
    state.update(Message::Loaded {
        generation: request.generation,
        outcome,
    });
    if page != 1 {
        state.update(Message::GoToPage(page));
    }

    let languages = fetch_languages(client, state.visible_repositories()).await;
    Ok(Snapshot {
        view: build_view(&state, &languages),
        errors: state.load_errors().to_vec(),
    })
}

// What background tasks send back to the session
enum Update {
    Message(Message),
    Languages {
        ticket: ViewTicket,
        languages: Vec<LanguageSet>,
    },
}

/// Owns the state of an interactive session and its background tasks.
pub struct Session {
    client: GitHubClient,
    state: UiState,
    tx: mpsc::UnboundedSender<Update>,
    rx: mpsc::UnboundedReceiver<Update>,
    fetch_task: Option<JoinHandle<()>>,
    render_task: Option<JoinHandle<()>>,
    // The page whose languages are being fetched and not yet shown
    awaiting: Option<ViewTicket>,
}

impl Session {
    pub fn new(client: GitHubClient) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Session {
            client,
            state: UiState::default(),
            tx,
            rx,
            fetch_task: None,
            render_task: None,
            awaiting: None,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Applies a message and starts whatever work it calls for.
    ///
    /// Returns the loading view when the message started a new search, so
    /// it can be shown while the fetch runs.
    pub fn dispatch(&mut self, message: Message) -> Option<PageView> {
        match self.state.update(message) {
            Effect::None => None,
            Effect::Fetch(request) => {
                self.start_fetch(request);
                Some(build_view(&self.state, &[]))
            }
            Effect::Render(ticket) => {
                self.start_render(ticket);
                None
            }
        }
    }

    /// Whether a search or a page is still on its way.
    pub fn is_busy(&self) -> bool {
        self.state.is_loading() || self.awaiting.is_some()
    }

    /// Waits until a page is ready to be shown.
    ///
    /// Cancel safe: dropping the future between two updates loses nothing,
    /// since every update is applied before the next one is awaited.
    pub async fn next_view(&mut self) -> Option<PageView> {
        loop {
            match self.rx.recv().await? {
                Update::Message(message) => {
                    self.dispatch(message);
                }
                Update::Languages { ticket, languages } => {
                    if self.state.is_current(ticket) {
                        self.awaiting = None;
                        return Some(build_view(&self.state, &languages));
                    }
                    tracing::debug!("Dropping languages for a page that is no longer shown");
                }
            }
        }
    }

    fn start_fetch(&mut self, request: FetchRequest) {
        cancel(&mut self.fetch_task);
        cancel(&mut self.render_task);
        self.awaiting = None;

        let client = self.client.clone();
        let tx = self.tx.clone();
        self.fetch_task = Some(tokio::spawn(async move {
            let outcome = load_user(&client, &request.username).await;
            // The receiver only goes away when the session does
            let _ = tx.send(Update::Message(Message::Loaded {
                generation: request.generation,
                outcome,
            }));
        }));
    }

    fn start_render(&mut self, ticket: ViewTicket) {
        cancel(&mut self.render_task);
        self.awaiting = Some(ticket);

        let client = self.client.clone();
        let tx = self.tx.clone();
        let repositories = self.state.visible_repositories().to_vec();
        self.render_task = Some(tokio::spawn(async move {
            let languages = fetch_languages(&client, &repositories).await;
            let _ = tx.send(Update::Languages { ticket, languages });
        }));
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        cancel(&mut self.fetch_task);
        cancel(&mut self.render_task);
    }
}

fn cancel(task: &mut Option<JoinHandle<()>>) {
    if let Some(task) = task.take() {
        task.abort();
    }
}
