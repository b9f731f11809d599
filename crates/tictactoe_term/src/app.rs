//! The interactive loop: typed input in, rendered events out.

use std::io::Write;

use anyhow::Result;
use tictactoe_core::{BoardError, GameEvent, GameSession, MoveError, OpponentTicket};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, instrument, warn};

use crate::intent::Intent;
use crate::render;
use crate::store::{SavedState, StateStore};

/// Whether the loop keeps going after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Leave the loop.
    Quit,
}

/// Terminal front end over a buffered session.
///
/// The opponent's thinking pause is a timer in the loop, so input keeps being
/// read while the computer "thinks" and a reset can cancel the move.
#[derive(Debug)]
pub struct App {
    session: GameSession<Vec<GameEvent>>,
    store: StateStore,
    saved: SavedState,
    scheduled: Option<(OpponentTicket, Instant)>,
}

impl App {
    /// Wraps `session`; state changes are written to `store`.
    pub fn new(session: GameSession<Vec<GameEvent>>, store: StateStore) -> Self {
        let saved = SavedState::of(&session);
        Self {
            session,
            store,
            saved,
            scheduled: None,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession<Vec<GameEvent>> {
        &self.session
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip_all)]
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        info!("Starting terminal session");
        writeln!(out, "{}", render::screen(&self.session))?;
        writeln!(out, "Type 'help' for commands.")?;

        let mut lines = input.lines();
        loop {
            let deadline = self.scheduled.map(|(_, at)| at);
            tokio::select! {
                biased;
                () = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.opponent_move(out)?;
                }
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("Input closed");
                        break;
                    };
                    if self.handle_line(&line, out)? == Flow::Quit {
                        break;
                    }
                }
            }
            out.flush()?;
        }

        info!("Terminal session finished");
        Ok(())
    }

    /// Parses and handles one line of input.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        match line.parse::<Intent>() {
            Ok(intent) => self.handle(intent, out),
            Err(e) => {
                writeln!(out, "{}. Type 'help' for commands.", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Applies one intent to the session and prints the outcome.
    #[instrument(skip(self, out))]
    pub fn handle<W: Write>(&mut self, intent: Intent, out: &mut W) -> Result<Flow> {
        match intent {
            Intent::Select(index) => match self.session.select_cell(index) {
                Ok(ticket) => {
                    self.flush(out)?;
                    if let Some(ticket) = ticket {
                        self.schedule(ticket, out)?;
                    }
                }
                Err(e) => {
                    debug!(error = %e, "Selection refused");
                    writeln!(out, "{}", refusal(&e))?;
                }
            },
            Intent::NewGame => {
                self.session.reset();
                self.scheduled = None;
                self.flush(out)?;
            }
            Intent::ResetScore => {
                self.session.reset_score();
                self.scheduled = None;
                self.flush(out)?;
            }
            Intent::SetMode(mode) => {
                let ticket = self.session.set_mode(mode);
                writeln!(out, "Mode: {}", mode)?;
                self.flush(out)?;
                match ticket {
                    Some(ticket) => self.schedule(ticket, out)?,
                    None => self.scheduled = None,
                }
            }
            Intent::SetDifficulty(difficulty) => {
                self.session.set_difficulty(difficulty);
                writeln!(out, "Difficulty: {}", difficulty)?;
            }
            Intent::Show => writeln!(out, "{}", render::screen(&self.session))?,
            Intent::Help => writeln!(out, "{}", render::HELP)?,
            Intent::Quit => return Ok(Flow::Quit),
        }
        self.persist();
        Ok(Flow::Continue)
    }

    /// Arms the timer for `ticket`, or plays at once if there is no pause.
    fn schedule<W: Write>(&mut self, ticket: OpponentTicket, out: &mut W) -> Result<()> {
        if matches!(self.scheduled, Some((current, _)) if current == ticket) {
            return Ok(());
        }
        if ticket.delay().is_zero() {
            self.scheduled = None;
            return self.play(ticket, out);
        }
        self.scheduled = Some((ticket, Instant::now() + *ticket.delay()));
        Ok(())
    }

    fn opponent_move<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if let Some((ticket, _)) = self.scheduled.take() {
            self.play(ticket, out)?;
        }
        Ok(())
    }

    fn play<W: Write>(&mut self, ticket: OpponentTicket, out: &mut W) -> Result<()> {
        match self.session.play_opponent(ticket) {
            Ok(index) => debug!(index, "Opponent moved"),
            Err(e @ MoveError::StaleTicket { .. }) => debug!(error = %e, "Opponent move dropped"),
            Err(e) => warn!(error = %e, "Opponent could not move"),
        }
        self.flush(out)?;
        self.persist();
        Ok(())
    }

    /// Prints buffered events, then the board if anything on it changed.
    fn flush<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let events = std::mem::take(self.session.sink_mut());
        let mode = self.session.mode();
        let mut redraw = false;
        for event in &events {
            if let Some(line) = render::describe(event, mode) {
                writeln!(out, "{}", line)?;
            }
            redraw |= render::redraws(event);
        }
        if redraw {
            writeln!(out, "{}", render::screen(&self.session))?;
        }
        Ok(())
    }

    /// Saves score and preferences if they changed since the last save.
    fn persist(&mut self) {
        let current = SavedState::of(&self.session);
        if current == self.saved {
            return;
        }
        match self.store.save(&current) {
            Ok(()) => self.saved = current,
            Err(e) => warn!(error = %e, "Could not save state"),
        }
    }
}

/// Player-facing text for a refused selection.
fn refusal(error: &MoveError) -> String {
    match error {
        MoveError::Board {
            source: BoardError::IllegalMove { .. },
        } => "That cell is taken.".to_string(),
        MoveError::Board {
            source: BoardError::OutOfRange { .. },
        } => "No such cell.".to_string(),
        MoveError::Rejected => "The game is over. Type 'r' for a new game.".to_string(),
        MoveError::OpponentsTurn { .. } => "Wait for the computer's move.".to_string(),
        other => other.to_string(),
    }
}
