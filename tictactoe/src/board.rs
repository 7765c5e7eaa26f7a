use itertools::Itertools;
use ndarray::prelude::*;
use serde::Serialize;
use std::fmt;

/// Cell indices (row-major, 0-based) of every line that wins the game.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Marker {
    #[serde(rename = "X")]
    Cross,
    #[serde(rename = "O")]
    Nought,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    Empty,
    Marked(Marker),
}

#[derive(Debug, PartialEq)]
pub enum IsGameOver {
    InPlay,
    Drawn,
    Win,
}

/// A single placement: position 1-9 and the marker to put there.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Move {
    pub position: usize,
    pub marker: Marker,
}

#[derive(Debug, Clone)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Marker {
    pub fn other(self) -> Self {
        match self {
            Self::Cross => Marker::Nought,
            Self::Nought => Marker::Cross,
        }
    }
    pub fn as_char(self) -> char {
        match self {
            Self::Cross => 'X',
            Self::Nought => 'O',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Cell {
    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(marker) => marker.as_char(),
        }
    }
}

impl Move {
    pub fn new(position: usize, marker: Marker) -> Self {
        Move { position, marker }
    }
}

/// Maps a 1-based position onto its `[row, column]` in the grid.
///
/// # Panics
///
/// Panics if `position` is outside `1..=9`.
fn grid_index(position: usize) -> [usize; 2] {
    assert!(
        (1..=9).contains(&position),
        "position {position} is outside the board (1-9)"
    );
    let i = position - 1;
    [i / 3, i % 3]
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: Array::from_elem((3, 3), Cell::Empty),
        }
    }

    pub fn cell(&self, position: usize) -> Cell {
        self.cells[grid_index(position)]
    }

    /// # Panics
    ///
    /// Panics if `position` is outside `1..=9`; validate the range first.
    pub fn is_position_free(&self, position: usize) -> bool {
        self.cell(position) == Cell::Empty
    }

    pub fn free_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == Cell::Empty)
            .map(|(index, _)| index + 1)
            .collect()
    }

    /// Places `mv.marker` at `mv.position` without re-checking that the
    /// cell is free.
    pub fn update(&mut self, mv: &Move) {
        self.cells[grid_index(mv.position)] = Cell::Marked(mv.marker);
    }

    pub fn check_winner(&self, marker: Marker) -> bool {
        let target = Cell::Marked(marker);
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&index| self.cell(index + 1) == target))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    pub fn is_game_over(&self, marker: Marker) -> IsGameOver {
        match self.check_winner(marker) {
            true => IsGameOver::Win,
            false => {
                if self.is_full() {
                    IsGameOver::Drawn
                } else {
                    IsGameOver::InPlay
                }
            }
        }
    }

    /// The reference diagram of positions, headed by `Positions:`.
    pub fn position_lines() -> Vec<String> {
        std::iter::once("Positions:".to_owned())
            .chain((1..=9).tuples().map(|(a, b, c)| format!("| {a} | {b} | {c} |")))
            .collect()
    }

    /// The board headed by `Board:` and followed by a blank line.
    pub fn render_lines(&self) -> Vec<String> {
        std::iter::once("Board:".to_owned())
            .chain(self.to_string().lines().map(str::to_owned))
            .chain(std::iter::once(String::new()))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = self
            .cells
            .iter()
            .map(|cell| cell.as_char())
            .tuples::<(_, _, _)>()
            .map(|(a, b, c)| format!("| {a} | {b} | {c} |"))
            .join("\n");
        write!(f, "{rows}")
    }
}
