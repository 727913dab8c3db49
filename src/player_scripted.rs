use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::player::Player;

/// Player that replays a fixed list of move tokens and records every
/// message it is sent. Used for tests and simulations.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    name: String,
    moves: Vec<String>,
    next: usize,
    messages: Vec<String>,
}

impl ScriptedPlayer {
    pub fn new<I, S>(name: &str, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            moves: moves.into_iter().map(Into::into).collect(),
            next: 0,
            messages: Vec::new(),
        }
    }

    /// Messages received so far, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Most recent message, if any.
    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Number of tokens handed out so far.
    pub fn moves_played(&self) -> usize {
        self.next
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&mut self) -> anyhow::Result<String> {
        let token = self
            .moves
            .get(self.next)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("player {} has no scripted moves left", self.name))?;
        self.next += 1;
        Ok(token)
    }

    fn receive(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
