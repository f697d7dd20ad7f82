// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging and the GitHub client
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = shown with fetch failures,
//    2 = error)
//
// Rust concepts used:
// - async/await: every GitHub request is a network round trip
// - tokio::select!: wait for user input and background fetches at once
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod app;      // src/app/ - state, input handling, session loop
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - validated client settings
mod error;    // src/error.rs - fetch error types
mod github;   // src/github/ - GitHub REST API access
mod logging;  // src/logging.rs - tracing setup
mod pager;    // src/pager.rs - page arithmetic
mod render;   // src/render/ - HTML, table and JSON output

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use app::{Command, Message, Session};
use cli::{Cli, Commands, OutputFormat};
use config::ClientConfig;
use github::GitHubClient;
use render::{HtmlRenderer, PageView};

// The #[tokio::main] attribute transforms our async main into a real main function
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = page shown
//   Ok(1) = page shown, but some fetches failed (placeholders / partial list)
//   Err   = unexpected error (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    logging::init(&cli.log_level)?;

    let config = ClientConfig::from_cli(&cli)?;
    let client = GitHubClient::new(&config)?;

    match cli.command {
        Commands::Show { username, page, format, output } => {
            handle_show(&client, &username, page, format, output.as_deref()).await
        }
        Commands::Browse { username, html } => handle_browse(client, username, html).await,
    }
}

// Handles the 'show' subcommand
async fn handle_show(
    client: &GitHubClient,
    username: &str,
    page: usize,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<i32> {
    let snapshot = app::render_once(client, username, page).await?;

    let rendered = match format {
        OutputFormat::Table => render::render_text(&snapshot.view),
        OutputFormat::Json => render::render_json(&snapshot.view)?,
        OutputFormat::Html => HtmlRenderer::new()?.render(&snapshot.view)?,
    };

    match output {
        Some(path) => {
            write_file(path, &rendered)?;
            eprintln!("✅ Wrote {}", path.display());
        }
        None => print!("{}", rendered),
    }

    if snapshot.errors.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

// Handles the 'browse' subcommand
//
// Reads commands from stdin while fetches run in the background. Each time
// the session finishes a page it is printed (and written to --html, if set).
async fn handle_browse(client: GitHubClient, username: Option<String>, html: Option<PathBuf>) -> Result<i32> {
    let html_output = match html {
        Some(path) => Some((path, HtmlRenderer::new()?)),
        None => None,
    };

    let mut session = Session::new(client);

    match username {
        Some(username) => dispatch(&mut session, Message::Search(username), html_output.as_ref())?,
        None => println!("🔍 Type `search <user>` to begin, `help` for all commands."),
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        // Once input has ended, stay only until pending work has been shown
        if !stdin_open && !session.is_busy() {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                // None = stdin closed (Ctrl-D or end of a pipe)
                let Some(line) = line.context("Failed to read from stdin")? else {
                    stdin_open = false;
                    continue;
                };

                match app::parse_command(&line) {
                    None => {}
                    Some(Command::Quit) => break,
                    Some(Command::Help) => println!("{}", app::HELP),
                    Some(Command::Unknown(text)) => {
                        println!("❓ Unknown command: {} (type `help`)", text);
                    }
                    Some(Command::Input(event)) => {
                        if let Some(message) = app::to_message(event) {
                            dispatch(&mut session, message, html_output.as_ref())?;
                        }
                    }
                }
            }
            view = session.next_view() => {
                let Some(view) = view else {
                    break;
                };
                show_view(&view, html_output.as_ref())?;
            }
        }
    }

    Ok(0)
}

// Dispatches a message and shows the loading page when it starts a search
fn dispatch(session: &mut Session, message: Message, html_output: Option<&(PathBuf, HtmlRenderer)>) -> Result<()> {
    if let Some(loading) = session.dispatch(message) {
        println!("⏳ Loading {}...", loading.username);
        show_view(&loading, html_output)?;
    }
    Ok(())
}

fn show_view(view: &PageView, html_output: Option<&(PathBuf, HtmlRenderer)>) -> Result<()> {
    println!();
    print!("{}", render::render_text(view));

    if let Some((path, renderer)) = html_output {
        write_file(path, &renderer.render(view)?)?;
        tracing::info!(path = %path.display(), "Updated HTML page");
    }

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why does `browse` need tokio::select!?
//    - We wait for two things at once: the next line on stdin and the next
//      finished page from the session
//    - Whichever comes first is handled; the other future is dropped and
//      created again on the next loop iteration
//    - Both futures are cancel safe, so dropping them loses no input
//    - `if stdin_open` disables the stdin branch after end of input, so a
//      piped `search <user>` still waits for its page before exiting
//
// 2. Why `let ... else`?
//    - It binds the value if the pattern matches and otherwise runs the
//      else block, which must leave the current scope (here: break)
// -----------------------------------------------------------------------------
