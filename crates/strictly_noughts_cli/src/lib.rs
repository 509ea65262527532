//! Terminal shell for the strictly_noughts engine.
//!
//! The engine decides what is legal and what the computer plays; this crate
//! seats the players, runs the turn loop and turns events into text.
//!
//! - [`config`] — session settings from TOML
//! - [`players`] — human and computer players behind one trait
//! - [`orchestrator`] — the turn loop
//! - [`render`] — event and analysis formatting

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod orchestrator;
pub mod players;
pub mod render;

pub use config::{ConfigError, GameMode, SessionConfig};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{ComputerPlayer, HumanPlayer, Player, PlayerError, PlayerKind, SharedInput};
