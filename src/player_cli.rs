#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use anyhow::Context;

use crate::player::Player;

/// Interactive player that prints messages to stdout and reads moves from
/// stdin, one token per line.
pub struct ConsolePlayer {
    name: String,
}

impl ConsolePlayer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Read one line from `input` and strip surrounding whitespace.
/// End of input is an error so a closed terminal does not spin the game loop.
pub fn read_token<R: BufRead>(input: &mut R) -> anyhow::Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read move")?;
    if read == 0 {
        anyhow::bail!("input closed");
    }
    Ok(line.trim().to_string())
}

impl Player for ConsolePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&mut self) -> anyhow::Result<String> {
        read_token(&mut io::stdin().lock())
    }

    fn receive(&mut self, message: &str) {
        let mut stdout = io::stdout().lock();
        // Nothing sensible to do if the terminal is gone; the next step() fails.
        let _ = stdout.write_all(message.as_bytes());
        let _ = stdout.flush();
    }
}
