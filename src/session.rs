//! Turn loop driving a [`GameEngine`] between two [`Player`]s.

use alloc::format;
use alloc::string::String;
use core::fmt::Write;

use crate::{
    common::{BoardError, MoveStatus},
    config::GameConfig,
    game::{GameEngine, Outcome, Turn},
    player::Player,
    render::{render, BoardStyle, RenderOptions},
};

pub const GREETING: &str = "This is a Tic-tac-toe game!\n";
pub const INVALID_FIELD_PROMPT: &str =
    "Invalid field name. Please, choose other position to go:\n> ";
pub const TAKEN_FIELD_PROMPT: &str =
    "This field is already taken. Please, choose other position to go:\n> ";

/// A game between two players: owns the engine and both collaborators.
pub struct GameSession<A: Player, B: Player> {
    engine: GameEngine,
    player_a: A,
    player_b: B,
    style: BoardStyle,
    moves: usize,
}

impl<A: Player, B: Player> GameSession<A, B> {
    /// Start a game on an empty board with player A to move.
    pub fn new(config: GameConfig, player_a: A, player_b: B) -> Result<Self, BoardError> {
        Ok(Self::from_engine(GameEngine::new(config)?, player_a, player_b))
    }

    /// Continue from an existing engine state.
    pub fn from_engine(engine: GameEngine, player_a: A, player_b: B) -> Self {
        Self {
            engine,
            player_a,
            player_b,
            style: BoardStyle::default(),
            moves: 0,
        }
    }

    /// Glyphs used for boards sent to players.
    pub fn with_style(mut self, style: BoardStyle) -> Self {
        self.style = style;
        self
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn player_a(&self) -> &A {
        &self.player_a
    }

    pub fn player_b(&self) -> &B {
        &self.player_b
    }

    /// Moves applied so far by this session.
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn into_players(self) -> (A, B) {
        (self.player_a, self.player_b)
    }

    fn player_mut(&mut self, turn: Turn) -> &mut dyn Player {
        seat(&mut self.player_a, &mut self.player_b, turn)
    }

    fn board_text(&self) -> String {
        render(
            self.engine.board(),
            self.engine.labels(),
            &self.style,
            RenderOptions::default(),
        )
    }

    /// Play until someone wins or the board fills up.
    ///
    /// Invalid or taken fields are reported to the player who sent them and
    /// that same player is asked again. Fails only when a player cannot
    /// produce a move.
    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        let mut message = String::from(GREETING);
        loop {
            let turn = self.engine.turn();
            let board = self.board_text();
            let player = seat(&mut self.player_a, &mut self.player_b, turn);
            message.push('\n');
            message.push_str(&board);
            let _ = write!(
                message,
                "\nPlayer {}. It's your move. Please, enter position to go:\n> ",
                player.name()
            );
            player.receive(&message);

            let token = loop {
                let raw = player.step()?;
                match self.engine.validate_move(&raw) {
                    MoveStatus::Success(token) => break token,
                    MoveStatus::InvalidField => player.receive(INVALID_FIELD_PROMPT),
                    MoveStatus::TakenField => player.receive(TAKEN_FIELD_PROMPT),
                }
            };

            self.engine.apply_move(token.row, token.col);
            self.moves += 1;

            let outcome = self.engine.check_outcome();
            if let Some(winner) = outcome.winner() {
                self.announce_win(winner);
            } else if outcome == Outcome::Draw {
                self.announce_draw();
            } else {
                self.engine.pass_turn();
                message.clear();
                continue;
            }
            log::info!("game over after {} moves: {:?}", self.moves, outcome);
            return Ok(outcome);
        }
    }

    fn announce_win(&mut self, winner: Turn) {
        let board = self.board_text();
        let player = self.player_mut(winner);
        let won = format!("{}\nCongratulations Player {}. You won!\n", board, player.name());
        player.receive(&won);
        let player = self.player_mut(winner.other());
        let lost = format!("{}\nPlayer {}. You lose!\n", board, player.name());
        player.receive(&lost);
    }

    fn announce_draw(&mut self) {
        let board = self.board_text();
        for turn in [Turn::PlayerA, Turn::PlayerB] {
            let player = self.player_mut(turn);
            let draw = format!(
                "{}\nPlayer {} game is over. It is a draw.\n",
                board,
                player.name()
            );
            player.receive(&draw);
        }
    }
}

/// The player seated on `turn`, borrowed apart from the engine.
fn seat<'a, A: Player, B: Player>(
    player_a: &'a mut A,
    player_b: &'a mut B,
    turn: Turn,
) -> &'a mut dyn Player {
    match turn {
        Turn::PlayerA => player_a,
        Turn::PlayerB => player_b,
    }
}
