// src/render/text.rs
// =============================================================================
// Renders a PageView as plain text for the terminal.
//
// Layout:
//   profile header (login, bio, location, profile URL)
//   one table row per repository: name, description, languages
//   pager line: « 1 [2] 3 »
// =============================================================================

use std::fmt::Write;

use super::view::PageView;

const NAME_WIDTH: usize = 30;
const DESCRIPTION_WIDTH: usize = 50;

pub fn render(view: &PageView) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail, so the fmt::Results are ignored
    let _ = writeln!(out, "👤 {}", view.profile.login);
    let _ = writeln!(out, "   {}", view.profile.bio);
    let _ = writeln!(out, "   📍 {}", view.profile.location);
    let _ = writeln!(out, "   🔗 {}", view.profile.profile_link_text);
    let _ = writeln!(out);

    if view.loading {
        let _ = writeln!(out, "⏳ Loading repositories...");
        return out;
    }

    if view.repositories.is_empty() {
        let _ = writeln!(out, "📭 No repositories");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<name$} {:<desc$} {}",
        "NAME",
        "DESCRIPTION",
        "LANGUAGES",
        name = NAME_WIDTH,
        desc = DESCRIPTION_WIDTH
    );
    let _ = writeln!(out, "{}", "=".repeat(NAME_WIDTH + DESCRIPTION_WIDTH + 20));

    for card in &view.repositories {
        let _ = writeln!(
            out,
            "{:<name$} {:<desc$} {}",
            truncate(&card.name, NAME_WIDTH),
            truncate(&card.description, DESCRIPTION_WIDTH),
            card.tags.join(", "),
            name = NAME_WIDTH,
            desc = DESCRIPTION_WIDTH
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}   (page {} of {}, {} repositories)",
        pager_line(view),
        view.current_page,
        view.total_pages,
        view.total_repositories
    );

    out
}

fn pager_line(view: &PageView) -> String {
    let links: Vec<String> = view
        .pagination
        .iter()
        .map(|link| {
            if link.active {
                format!("[{}]", link.label)
            } else {
                link.label.clone()
            }
        })
        .collect();
    format!("« {} »", links.join(" "))
}

// Cuts `text` to at most `width` characters, marking the cut with "..."
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}
