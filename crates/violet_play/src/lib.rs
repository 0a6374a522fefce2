//! Terminal front end for violet tic-tac-toe.
//!
//! Renders [`violet_tictactoe::GameState`] as text and forwards player
//! input to it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
pub mod render;
mod session;

pub use cli::{Cli, StartupFilter};
pub use command::{Command, CommandError, HELP};
pub use config::{ConfigError, PlayConfig};
pub use session::{Session, play_script};
