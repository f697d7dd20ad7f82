// src/render/html.rs
// =============================================================================
// Renders a PageView as a standalone HTML document.
//
// The document keeps the element IDs a front end would look up:
//   userInfo (with an h1), Bio, Location, userImage, Url (with an <a>),
//   loader, repositoryGrid, pagination, searchUserIdInput,
//   searchUserIdButton, prevButton, nextButton
//
// Templates live next to this file and are compiled into the binary with
// include_str!. Every render rebuilds the whole document; handlebars escapes
// every value, so names and descriptions cannot inject markup.
// =============================================================================

use anyhow::{Context, Result};
use handlebars::Handlebars;

use super::view::PageView;

const PAGE_TEMPLATE: &str = "page";

pub struct HtmlRenderer {
    registry: Handlebars<'static>,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry
            .register_template_string(PAGE_TEMPLATE, include_str!("templates/page.hbs"))
            .context("Failed to register page template")?;
        registry
            .register_partial("repository_card", include_str!("templates/repository_card.hbs"))
            .context("Failed to register repository card template")?;

        Ok(HtmlRenderer { registry })
    }

    pub fn render(&self, view: &PageView) -> Result<String> {
        self.registry
            .render(PAGE_TEMPLATE, view)
            .context("Failed to render page")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{LoadOutcome, Message, UiState};
    use crate::github::{Profile, Repository, NO_BIO, NO_DESCRIPTION};
    use crate::render::view::{build_view, sample_state};
    use scraper::{Html, Selector};

    fn render(view: &PageView) -> Html {
        let html = HtmlRenderer::new().unwrap().render(view).unwrap();
        Html::parse_document(&html)
    }

    fn texts(document: &Html, selector: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();
        document
            .select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect()
    }

    fn attr(document: &Html, selector: &str, name: &str) -> Option<String> {
        let selector = Selector::parse(selector).unwrap();
        document
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr(name))
            .map(str::to_string)
    }

    #[test]
    fn test_dom_contract_ids_present() {
        let document = render(&build_view(&sample_state(3), &[]));
        for id in [
            "userInfo",
            "Bio",
            "Location",
            "userImage",
            "Url",
            "loader",
            "repositoryGrid",
            "pagination",
            "searchUserIdInput",
            "searchUserIdButton",
            "prevButton",
            "nextButton",
        ] {
            let selector = Selector::parse(&format!("#{}", id)).unwrap();
            assert!(document.select(&selector).next().is_some(), "missing #{}", id);
        }
        assert_eq!(texts(&document, "#userInfo h1").len(), 1);
        assert_eq!(texts(&document, "#Url a").len(), 1);
    }

    #[test]
    fn test_missing_bio_renders_placeholder() {
        let document = render(&build_view(&sample_state(3), &[]));
        assert_eq!(texts(&document, "#Bio"), vec![NO_BIO.to_string()]);
        assert_eq!(
            attr(&document, "#Url a", "href").as_deref(),
            Some("#"),
            "placeholder profile links nowhere"
        );
    }

    #[test]
    fn test_profile_fields() {
        let mut state = UiState::default();
        state.update(Message::Search("octocat".to_string()));
        state.update(Message::Loaded {
            generation: 1,
            outcome: LoadOutcome {
                profile: Profile {
                    login: "octocat".to_string(),
                    bio: "There once was...".to_string(),
                    location: "San Francisco".to_string(),
                    avatar_url: "https://avatars.example.com/octocat.png".to_string(),
                    profile_url: "https://github.com/octocat".to_string(),
                    profile_link_text: "https://github.com/octocat".to_string(),
                },
                repositories: vec![],
                errors: vec![],
            },
        });
        let document = render(&build_view(&state, &[]));

        assert_eq!(texts(&document, "#userInfo h1"), vec!["octocat"]);
        assert_eq!(texts(&document, "#Location"), vec!["San Francisco"]);
        assert_eq!(
            attr(&document, "#userImage", "src").as_deref(),
            Some("https://avatars.example.com/octocat.png")
        );
        assert_eq!(attr(&document, "#Url a", "href").as_deref(), Some("https://github.com/octocat"));
        assert_eq!(attr(&document, "#searchUserIdInput", "value").as_deref(), Some("octocat"));
        assert!(texts(&document, "#repositoryGrid .repository-card").is_empty());
    }

    #[test]
    fn test_cards_tags_and_active_link() {
        let mut state = sample_state(25);
        state.update(Message::GoToPage(3));
        let languages = vec![vec!["Rust".to_string(), "Shell".to_string()], vec![]];
        let document = render(&build_view(&state, &languages));

        assert_eq!(
            texts(&document, "#repositoryGrid .repo-name"),
            vec!["repo-21", "repo-22", "repo-23", "repo-24", "repo-25"]
        );

        let cards = Selector::parse("#repositoryGrid .repository-card").unwrap();
        let tag = Selector::parse(".tag").unwrap();
        let tag_counts: Vec<usize> = document.select(&cards).map(|card| card.select(&tag).count()).collect();
        assert_eq!(tag_counts, vec![2, 0, 0, 0, 0]);

        assert_eq!(texts(&document, "#pagination .page-link"), vec!["1", "2", "3"]);
        assert_eq!(texts(&document, "#pagination .page-item.active .page-link"), vec!["3"]);
    }

    #[test]
    fn test_description_placeholder() {
        let document = render(&build_view(&sample_state(2), &[]));
        let descriptions = texts(&document, "#repositoryGrid .card-text:not(.tags-container)");
        assert_eq!(descriptions, vec!["Repository number 1".to_string(), NO_DESCRIPTION.to_string()]);
    }

    #[test]
    fn test_loader_visibility() {
        let mut state = UiState::default();
        state.update(Message::Search("octocat".to_string()));
        let loading = render(&build_view(&state, &[]));
        assert_eq!(attr(&loading, "#loader", "style").as_deref(), Some("display: block"));

        let done = render(&build_view(&sample_state(1), &[]));
        assert_eq!(attr(&done, "#loader", "style").as_deref(), Some("display: none"));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut state = UiState::default();
        state.update(Message::Search("octocat".to_string()));
        state.update(Message::Loaded {
            generation: 1,
            outcome: LoadOutcome {
                profile: Profile::placeholder(),
                repositories: vec![Repository {
                    name: "<script>alert(1)</script>".to_string(),
                    description: Some("a & b".to_string()),
                    languages_url: String::new(),
                }],
                errors: vec![],
            },
        });
        let html = HtmlRenderer::new().unwrap().render(&build_view(&state, &[])).unwrap();
        assert!(!html.contains("<script>"));

        let document = Html::parse_document(&html);
        assert_eq!(texts(&document, ".repo-name"), vec!["<script>alert(1)</script>"]);
    }
}
