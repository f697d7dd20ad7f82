// src/render/view.rs
// =============================================================================
// Everything one rendered page needs, computed from the state.
//
// `build_view` is a pure function of the state and the language sets of the
// visible repositories. The HTML, table and JSON outputs all start from the
// same PageView, so they can never disagree about what is on the page.
// =============================================================================

use serde::Serialize;

use crate::app::UiState;
use crate::github::{LanguageSet, Profile};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub username: String,
    pub loading: bool,
    pub profile: Profile,
    pub repositories: Vec<RepositoryCard>,
    pub pagination: Vec<PageLink>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_repositories: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryCard {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub label: String,
    pub active: bool,
}

/// Builds the view of the current page.
///
/// `languages[i]` belongs to the i-th visible repository; missing entries
/// render as an empty tag list.
pub fn build_view(state: &UiState, languages: &[LanguageSet]) -> PageView {
    let repositories = state
        .visible_repositories()
        .iter()
        .enumerate()
        .map(|(i, repo)| RepositoryCard {
            name: repo.name.clone(),
            description: repo.description_or_default().to_string(),
            tags: languages.get(i).cloned().unwrap_or_default(),
        })
        .collect();

    // The active link is found by comparing its text with the current page
    let current = state.current_page().to_string();
    let pagination = (1..=state.total_pages())
        .map(|page| {
            let label = page.to_string();
            let active = label == current;
            PageLink { label, active }
        })
        .collect();

    PageView {
        username: state.username().to_string(),
        loading: state.is_loading(),
        profile: state.profile().clone(),
        repositories,
        pagination,
        current_page: state.current_page(),
        total_pages: state.total_pages(),
        total_repositories: state.repositories().len(),
    }
}

/// A loaded state for "octocat" with `count` repositories; odd ones have a
/// description.
#[cfg(test)]
pub(crate) fn sample_state(count: usize) -> UiState {
    let mut state = UiState::default();
    state.update(crate::app::Message::Search("octocat".to_string()));
    state.update(crate::app::Message::Loaded {
        generation: 1,
        outcome: crate::app::LoadOutcome {
            profile: Profile::placeholder(),
            repositories: (1..=count)
                .map(|i| crate::github::Repository {
                    name: format!("repo-{}", i),
                    description: (i % 2 == 1).then(|| format!("Repository number {}", i)),
                    languages_url: String::new(),
                })
                .collect(),
            errors: Vec::new(),
        },
    });
    state
}
