//! Interactive and scripted play loops.

use crate::command::{Command, HELP};
use crate::config::PlayConfig;
use crate::render;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};
use violet_tictactoe::{GameState, Placement};

/// A game driven by line-oriented input.
///
/// Each input line is handled to completion before the next is read.
pub struct Session<R, W> {
    game: GameState,
    config: PlayConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with a fresh game.
    pub fn new(config: PlayConfig, input: R, output: W) -> Self {
        Self {
            game: GameState::new(),
            config,
            input,
            output,
        }
    }

    /// The current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Consumes the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads commands until `q` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!("Session started");
        self.show()?;

        while let Some(line) = self.read_line()? {
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    debug!(error = %e, "Unrecognized input");
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            match command {
                Command::Place(index) => {
                    self.place(index)?;
                    self.show()?;
                }
                Command::Reset => {
                    if self.confirm_reset()? {
                        self.game.reset();
                        self.show()?;
                    }
                }
                Command::Help => writeln!(self.output, "{}", HELP)?,
                Command::Quit => break,
            }
        }

        info!("Session ended");
        Ok(())
    }

    fn place(&mut self, index: usize) -> Result<()> {
        match self.game.apply_move(index) {
            Placement::Placed { .. } => {}
            Placement::Ignored(reason) => {
                writeln!(self.output, "Move ignored: {}", reason)?;
            }
        }
        Ok(())
    }

    fn confirm_reset(&mut self) -> Result<bool> {
        if !*self.config.confirm_reset() || self.game.is_finished() || self.game.board().is_empty()
        {
            return Ok(true);
        }
        write!(self.output, "Reset the game in progress? [y/N] ")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
    }

    fn show(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "{}\n",
            render::game(&self.game, *self.config.show_indices())
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Plays `moves` (board indices) on a fresh game and returns the final state.
///
/// Illegal moves are skipped with a warning, as in interactive play.
#[instrument]
pub fn play_script(moves: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &index in moves {
        if let Placement::Ignored(reason) = game.apply_move(index) {
            warn!(index, %reason, "Scripted move ignored");
        }
    }
    game
}
