// src/app/mod.rs
// =============================================================================
// The application core: state, input handling and the session that ties them
// to the network.
//
// Submodules:
// - state:   UiState, the messages that change it and the effects it asks for
// - input:   control events and typed commands -> messages
// - session: runs effects in background tasks and hands back finished pages
// =============================================================================

mod input;
mod session;
mod state;

pub use input::{parse_command, to_message, Command, HELP};
pub use session::{render_once, Session};
pub use state::{Message, UiState};

#[cfg(test)]
pub use state::LoadOutcome;
