// src/render/mod.rs
// =============================================================================
// Turns the state into something to look at.
//
// Submodules:
// - view: the PageView shared by every output format
// - html: standalone HTML document (handlebars)
// - text: terminal table
//
// JSON output is the PageView serialized with serde_json.
// =============================================================================

mod html;
mod text;
mod view;

pub use html::HtmlRenderer;
pub use view::{build_view, PageView};

use anyhow::Result;

pub use text::render as render_text;

/// Pretty-printed JSON of the view.
pub fn render_json(view: &PageView) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}
