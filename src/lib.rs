#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod game;
pub mod labels;
#[cfg(feature = "std")]
mod logging;
mod player;
#[cfg(feature = "std")]
mod player_cli;
mod player_scripted;
pub mod prelude;
mod render;
pub mod runs;
mod session;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use labels::{generate, ColumnLabels};
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use player_scripted::*;
pub use render::*;
pub use runs::{longest_runs, merge_max, RunLengths};
pub use session::*;
