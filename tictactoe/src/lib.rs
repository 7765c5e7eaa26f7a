use crate::board::{Board, IsGameOver};
use crate::config::{
    BANNER, COMPUTER_MARKER, COMPUTER_NAME, FAREWELL_MESSAGE, HUMAN_MARKER, HUMAN_NAME,
    REPLAY_PROMPT, TIE_MESSAGE,
};
use crate::console::Console;
use crate::error::GameError;
use crate::players::{ComputerPlayer, HumanPlayer, Mode, Player};
use crate::record::{Outcome, RoundRecord};
use tracing::{debug, error, info};

pub mod board;
pub mod config;
pub mod console;
pub mod error;
pub mod players;
pub mod record;

/// A console session: the same two players over as many rounds as the
/// human asks for.
pub struct Game<C: Console> {
    pub board: Board,
    players: [Box<dyn Player>; 2],
    current: usize,
    console: C,
    round: usize,
    last_record: Option<RoundRecord>,
}

fn is_input_closed(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<GameError>(), Some(GameError::InputClosed))
}

impl<C: Console> Game<C> {
    /// The human player always opens a round, whichever order they are
    /// passed in.
    pub fn new(
        player1: Box<dyn Player>,
        player2: Box<dyn Player>,
        console: C,
    ) -> Result<Self, GameError> {
        if player1.marker() == player2.marker() {
            return Err(GameError::SameMarkers(player1.marker()));
        }
        let players = if player2.mode() == Mode::Human && player1.mode() != Mode::Human {
            [player2, player1]
        } else {
            [player1, player2]
        };
        Ok(Game {
            board: Board::new(),
            players,
            current: 0,
            console,
            round: 0,
            last_record: None,
        })
    }

    /// `You` (X) against a `Computer` (O) that plays uniformly at random.
    pub fn human_vs_computer(console: C) -> Result<Self, GameError> {
        Game::new(
            Box::new(HumanPlayer::new(HUMAN_NAME, HUMAN_MARKER)),
            Box::new(ComputerPlayer::new(COMPUTER_NAME, COMPUTER_MARKER)),
            console,
        )
    }

    pub fn current_player(&self) -> &dyn Player {
        self.players[self.current].as_ref()
    }

    pub fn players(&self) -> [&dyn Player; 2] {
        [self.players[0].as_ref(), self.players[1].as_ref()]
    }

    pub fn swap_players(&mut self) {
        self.current = 1 - self.current;
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    pub fn rounds_played(&self) -> usize {
        self.round
    }

    pub fn last_record(&self) -> Option<&RoundRecord> {
        self.last_record.as_ref()
    }

    /// Plays one round on a fresh board until somebody wins or the board
    /// fills up.
    pub fn play_round(&mut self) -> anyhow::Result<Outcome> {
        self.board = Board::new();
        self.current = 0;
        self.round += 1;
        let mut record = RoundRecord::start(self.round);
        info!(round = self.round, "round started");

        self.console.write_lines(&Board::position_lines())?;
        self.console.write_lines(&self.board.render_lines())?;

        let outcome = loop {
            let player = &mut self.players[self.current];
            let mv = player.make_move(&self.board, &mut self.console)?;
            let name = player.name().to_owned();
            let marker = player.marker();
            match mv {
                Some(mv) => {
                    debug!(
                        player = %name,
                        position = mv.position,
                        marker = %mv.marker,
                        "applying move"
                    );
                    self.board.update(&mv);
                }
                None => self.console.write_line(&format!("{name} loses the turn."))?,
            }
            record.push_turn(&name, mv.map(|mv| mv.position));
            self.console.write_lines(&self.board.render_lines())?;

            // A lost turn places nothing, so it can only end the round by a full board.
            let status = match mv {
                Some(_) => self.board.is_game_over(marker),
                None if self.board.is_full() => IsGameOver::Drawn,
                None => IsGameOver::InPlay,
            };
            match status {
                IsGameOver::Win => {
                    self.console.write_line(&format!("🏆 {name} wins the game!"))?;
                    break Outcome::Win { name, marker };
                }
                IsGameOver::Drawn => {
                    self.console.write_line(TIE_MESSAGE)?;
                    break Outcome::Tie;
                }
                IsGameOver::InPlay => self.swap_players(),
            }
        };

        record.outcome = Some(outcome.clone());
        match record.to_json() {
            Ok(json) => info!(round = self.round, record = %json, "round finished"),
            Err(e) => error!(round = self.round, error = %e, "could not serialize round record"),
        }
        self.last_record = Some(record);
        Ok(outcome)
    }

    /// Runs the whole session: banner, rounds, replay prompt, farewell.
    ///
    /// Returns the number of rounds started. Running out of input ends the
    /// session the same way declining a replay does.
    pub fn run(&mut self) -> anyhow::Result<usize> {
        for line in BANNER {
            self.console.write_line(line)?;
        }
        loop {
            match self.play_round() {
                Ok(_) => {}
                Err(e) if is_input_closed(&e) => {
                    info!(round = self.round, "input closed mid-round");
                    break;
                }
                Err(e) => return Err(e),
            }
            let replay = self
                .console
                .read_line(REPLAY_PROMPT)?
                .is_some_and(|answer| answer.to_lowercase() == "y");
            if !replay {
                break;
            }
        }
        self.console.write_line(FAREWELL_MESSAGE)?;
        Ok(self.round)
    }
}
