//! Commonly used types and utilities for ease of import.

pub use crate::render::render;
pub use crate::{
    BoardStyle, Cell, GameConfig, GameEngine, GameSession, MoveStatus, Outcome, Player,
    RenderOptions, ScriptedPlayer, Turn,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ConsolePlayer};
