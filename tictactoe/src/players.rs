use crate::board::{Board, Marker, Move};
use crate::config::MOVE_PROMPT;
use crate::console::Console;
use crate::error::{GameError, MoveInputError};
use rand::prelude::SliceRandom;
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};
use std::num::{IntErrorKind, ParseIntError};
use tracing::{debug, error, warn};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Human,
    Automated,
}

pub trait Player {
    fn name(&self) -> &str;
    fn marker(&self) -> Marker;
    fn mode(&self) -> Mode;
    /// Produces this turn's move, or `None` when the turn is lost.
    ///
    /// The board is only read here; the game applies the returned move.
    fn make_move(
        &mut self,
        board: &Board,
        console: &mut dyn Console,
    ) -> anyhow::Result<Option<Move>>;
}

/// Uniform choice over the free positions, swappable for a deterministic one.
pub trait PositionSelector {
    fn select(&mut self, free: &[usize]) -> Option<usize>;
}

#[derive(Debug)]
pub struct RandomSelector<R = ThreadRng> {
    rng: R,
}

impl RandomSelector {
    pub fn new() -> Self {
        RandomSelector { rng: thread_rng() }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        RandomSelector::new()
    }
}

impl<R: Rng> RandomSelector<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomSelector { rng }
    }
}

impl<R: Rng> PositionSelector for RandomSelector<R> {
    fn select(&mut self, free: &[usize]) -> Option<usize> {
        free.choose(&mut self.rng).copied()
    }
}

#[derive(Debug)]
pub struct HumanPlayer {
    pub name: String,
    pub marker: Marker,
}

#[derive(Debug)]
pub struct ComputerPlayer<S = RandomSelector> {
    pub name: String,
    pub marker: Marker,
    selector: S,
}

/// Turns one line of human input into a position that is free on `board`.
pub fn parse_position(input: &str, board: &Board) -> Result<usize, MoveInputError> {
    // Integers too wide for i64 are still integers: saturate them into a range error.
    let number: i64 = input.trim().parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => MoveInputError::OutOfRange(i64::MAX),
        IntErrorKind::NegOverflow => MoveInputError::OutOfRange(i64::MIN),
        _ => MoveInputError::NotANumber(input.to_owned()),
    })?;
    if !(1..=9).contains(&number) {
        return Err(MoveInputError::OutOfRange(number));
    }
    let position = number as usize;
    if !board.is_position_free(position) {
        return Err(MoveInputError::Occupied(position));
    }
    Ok(position)
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        HumanPlayer {
            name: name.into(),
            marker,
        }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }
    fn marker(&self) -> Marker {
        self.marker
    }
    fn mode(&self) -> Mode {
        Mode::Human
    }
    fn make_move(
        &mut self,
        board: &Board,
        console: &mut dyn Console,
    ) -> anyhow::Result<Option<Move>> {
        loop {
            let Some(line) = console.read_line(MOVE_PROMPT)? else {
                return Err(GameError::InputClosed.into());
            };
            match parse_position(&line, board) {
                Ok(position) => {
                    debug!(player = %self.name, position, "human move accepted");
                    return Ok(Some(Move::new(position, self.marker)));
                }
                Err(e) => {
                    console.write_line(&e.to_string())?;
                    if e.forfeits_turn() {
                        warn!(player = %self.name, error = ?e, "turn forfeited");
                        return Ok(None);
                    }
                    debug!(player = %self.name, error = ?e, "asking again");
                }
            }
        }
    }
}

impl ComputerPlayer {
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        ComputerPlayer::with_selector(name, marker, RandomSelector::new())
    }
}

impl<S: PositionSelector> ComputerPlayer<S> {
    pub fn with_selector(name: impl Into<String>, marker: Marker, selector: S) -> Self {
        ComputerPlayer {
            name: name.into(),
            marker,
            selector,
        }
    }
}

impl<S: PositionSelector> Player for ComputerPlayer<S> {
    fn name(&self) -> &str {
        &self.name
    }
    fn marker(&self) -> Marker {
        self.marker
    }
    fn mode(&self) -> Mode {
        Mode::Automated
    }
    fn make_move(
        &mut self,
        board: &Board,
        console: &mut dyn Console,
    ) -> anyhow::Result<Option<Move>> {
        let free = board.free_positions();
        if free.is_empty() {
            error!(player = %self.name, "asked to move on a full board");
            return Ok(None);
        }
        let Some(position) = self.selector.select(&free).filter(|p| free.contains(p)) else {
            error!(player = %self.name, ?free, "selector returned no free position");
            return Ok(None);
        };
        console.write_line(&format!("{} chooses position {}", self.name, position))?;
        debug!(player = %self.name, position, "computer move");
        Ok(Some(Move::new(position, self.marker)))
    }
}
