// src/app/state.rs
// =============================================================================
// The state behind the page, and the only place that changes it.
//
// Everything the page shows lives in one `UiState`. It is changed only
// through `UiState::update(message)`, which returns an `Effect` telling the
// caller what to do next:
//
//   Search("octocat") -> Effect::Fetch    (start loading that user)
//   Loaded { .. }     -> Effect::Render   (fetch languages, then draw)
//   NextPage          -> Effect::Render   (or Effect::None on the last page)
//
// Every accepted search bumps a generation counter. Fetch results carry the
// generation they were started for, and results from an older generation
// are dropped, so a slow answer for a previous search can never overwrite
// the current user's data.
// =============================================================================

use crate::github::{Profile, Repository};
use crate::pager::{Pager, PAGE_SIZE};

/// What a background fetch produced for one username.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub profile: Profile,
    pub repositories: Vec<Repository>,
    /// Fetch failures, already logged; only used for the exit code
    pub errors: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Load a new user from scratch
    Search(String),
    /// Show page N (1-indexed)
    GoToPage(usize),
    NextPage,
    PrevPage,
    /// A fetch started for `generation` finished
    Loaded { generation: u64, outcome: LoadOutcome },
}

/// Start fetching `username`; report back with `Message::Loaded`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub username: String,
}

/// Identifies the page a render was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTicket {
    generation: u64,
    page: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed
    None,
    Fetch(FetchRequest),
    /// The visible page changed: fetch its languages and draw it
    Render(ViewTicket),
}

#[derive(Debug, Clone)]
pub struct UiState {
    username: String,
    profile: Profile,
    repositories: Vec<Repository>,
    pager: Pager,
    generation: u64,
    loading: bool,
    load_errors: Vec<String>,
}

impl Default for UiState {
    fn default() -> Self {
        UiState::new(PAGE_SIZE)
    }
}

impl UiState {
    pub fn new(page_size: usize) -> Self {
        UiState {
            username: String::new(),
            profile: Profile::placeholder(),
            repositories: Vec::new(),
            pager: Pager::new(page_size),
            generation: 0,
            loading: false,
            load_errors: Vec::new(),
        }
    }

    /// Applies one message. This is the only method that mutates the state.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Search(input) => self.search(&input),

            Message::Loaded { generation, outcome } => {
                if generation != self.generation {
                    tracing::debug!(
                        stale = generation,
                        current = self.generation,
                        "Dropping result of an older search"
                    );
                    return Effect::None;
                }
                self.profile = outcome.profile;
                self.repositories = outcome.repositories;
                self.load_errors = outcome.errors;
                self.loading = false;
                self.pager.reset();
                Effect::Render(self.ticket())
            }

            Message::GoToPage(page) => {
                let total_pages = self.total_pages();
                if page == 0 || page > total_pages {
                    tracing::warn!(page, total_pages, "Ignoring page outside of the valid range");
                    return Effect::None;
                }
                self.pager.go_to(page);
                Effect::Render(self.ticket())
            }

            Message::NextPage => {
                if self.pager.next(self.repositories.len()) {
                    Effect::Render(self.ticket())
                } else {
                    Effect::None
                }
            }

            Message::PrevPage => {
                if self.pager.prev() {
                    Effect::Render(self.ticket())
                } else {
                    Effect::None
                }
            }
        }
    }

    fn search(&mut self, input: &str) -> Effect {
        let username = input.trim();
        if username.is_empty() {
            return Effect::None;
        }

        self.generation += 1;
        self.username = username.to_string();
        self.profile = Profile::placeholder();
        self.repositories.clear();
        self.load_errors.clear();
        self.pager.reset();
        self.loading = true;

        tracing::info!(username, generation = self.generation, "Searching");
        Effect::Fetch(FetchRequest {
            generation: self.generation,
            username: self.username.clone(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// The repositories of the current page.
    pub fn visible_repositories(&self) -> &[Repository] {
        self.pager.slice(&self.repositories)
    }

    pub fn current_page(&self) -> usize {
        self.pager.current()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.repositories.len())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_errors(&self) -> &[String] {
        &self.load_errors
    }

    pub fn ticket(&self) -> ViewTicket {
        ViewTicket {
            generation: self.generation,
            page: self.pager.current(),
        }
    }

    /// Whether a render started for `ticket` still matches what is on screen.
    pub fn is_current(&self, ticket: ViewTicket) -> bool {
        !self.loading && ticket == self.ticket()
    }
}
