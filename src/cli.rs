// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - show:   fetch one user, render one page, exit
// - browse: interactive session reading commands from stdin
//
// Global flags configure the GitHub client and logging. Some of them fall
// back to environment variables (the `env = ...` attributes) so a token
// never has to appear on the command line.
// =============================================================================

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{DEFAULT_API_BASE, DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECS};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "gh-showcase",
    version,
    about = "Browse a GitHub user's profile and repositories page by page",
    long_about = "gh-showcase fetches a GitHub profile, every page of the user's public \
                  repositories and the languages of the repositories on screen. Use `show` \
                  for a one-off page (table, JSON or HTML) or `browse` for an interactive session."
)]
pub struct Cli {
    /// Base URL of the GitHub REST API
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Personal access token sent as a bearer token
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Maximum number of repository pages followed for one user
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// Log filter, e.g. "warn", "debug" or "gh_showcase=trace"
    #[arg(long, global = true, env = "GH_SHOWCASE_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one page of a user's repositories and exit
    ///
    /// Example: gh-showcase show octocat --page 2 --format json
    Show {
        /// GitHub username
        username: String,

        /// Page to render (1-indexed, 10 repositories per page)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write the output to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Interactive session: search users and flip through pages
    ///
    /// Example: gh-showcase browse octocat --html page.html
    Browse {
        /// User to load on startup
        username: Option<String>,

        /// Rewrite this HTML file after every render
        #[arg(long)]
        html: Option<PathBuf>,
    },
}

/// How `show` prints the page.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
    /// Standalone HTML document
    Html,
}
