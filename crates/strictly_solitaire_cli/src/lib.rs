//! Strictly Solitaire CLI - terminal front end for the rules engine
//!
//! Owns everything the engine leaves to its caller: table geometry,
//! hit-testing, text rendering, and a line console that plays the part of a
//! window's pointer events.

#![warn(missing_docs)]

mod cli;
mod config;
mod console;
mod layout;
mod render;

pub use cli::{Cli, Command};
pub use config::{ConfigError, LayoutConfig, MAX_EXTENT, SolitaireConfig};
pub use console::{Console, ConsoleCommand, HELP, ParseError};
pub use layout::{Layout, Rect};
pub use render::{format_elapsed, render};
