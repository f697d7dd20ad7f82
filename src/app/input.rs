// src/app/input.rs
// =============================================================================
// Turns user input into state messages.
//
// Two layers:
// - InputEvent: the page's controls (search button, Enter in the search box,
//   a click on a pagination link, the prev/next buttons)
// - parse_command: a line typed in the `browse` session, mapped onto the
//   same events so both paths behave the same way
// =============================================================================

use super::state::Message;

/// Something the user did to one of the page's controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The search button was clicked with `input` in the search box
    SearchClicked { input: String },
    /// A key was released in the search box
    SearchKeyUp { key: String, input: String },
    /// A pagination link with this text was clicked
    PaginationClicked { text: String },
    PrevClicked,
    NextClicked,
}

/// Maps a control event onto a state message, if it means anything.
pub fn to_message(event: InputEvent) -> Option<Message> {
    match event {
        InputEvent::SearchClicked { input } => search(input),
        InputEvent::SearchKeyUp { key, input } if key == "Enter" => search(input),
        InputEvent::SearchKeyUp { .. } => None,
        InputEvent::PaginationClicked { text } => parse_page_label(&text).map(Message::GoToPage),
        InputEvent::PrevClicked => Some(Message::PrevPage),
        InputEvent::NextClicked => Some(Message::NextPage),
    }
}

fn search(input: String) -> Option<Message> {
    let username = input.trim();
    if username.is_empty() {
        None
    } else {
        Some(Message::Search(username.to_string()))
    }
}

/// Reads a page number off a link label the way a browser's parseInt does:
/// leading whitespace is skipped and parsing stops at the first non-digit.
pub fn parse_page_label(text: &str) -> Option<usize> {
    let text = text.trim_start();
    let digits = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    text[..digits].parse().ok()
}

/// One line typed into the browse session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Input(InputEvent),
    Help,
    Quit,
    /// Not a command we know; holds the offending line
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  search <user>   load another user (also: s <user>)
  next, n         next page
  prev, p         previous page
  page <N>, <N>   jump to page N
  help, ?         show this help
  quit, q         leave";

/// Parses one line of the browse session. Empty lines yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "search" if !rest.is_empty() => Command::Input(InputEvent::SearchClicked {
            input: rest.to_string(),
        }),
        // Typing the name and pressing Enter
        "s" | "user" if !rest.is_empty() => Command::Input(InputEvent::SearchKeyUp {
            key: "Enter".to_string(),
            input: rest.to_string(),
        }),
        "next" | "n" => Command::Input(InputEvent::NextClicked),
        "prev" | "p" => Command::Input(InputEvent::PrevClicked),
        "page" | "g" if !rest.is_empty() => Command::Input(InputEvent::PaginationClicked {
            text: rest.to_string(),
        }),
        "help" | "?" | "h" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ if parse_page_label(word).is_some() && rest.is_empty() => {
            Command::Input(InputEvent::PaginationClicked { text: word.to_string() })
        }
        _ => Command::Unknown(line.to_string()),
    };

    Some(command)
}
