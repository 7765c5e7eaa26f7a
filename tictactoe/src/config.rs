use crate::board::Marker;

pub const HUMAN_NAME: &str = "You";
pub const COMPUTER_NAME: &str = "Computer";
pub const HUMAN_MARKER: Marker = Marker::Cross;
pub const COMPUTER_MARKER: Marker = Marker::Nought;

pub const MOVE_PROMPT: &str = "Please enter your move (1-9): ";
pub const REPLAY_PROMPT: &str = "Would you like to play again? (y/n): ";

pub const BANNER: [&str; 4] = [
    "**************************",
    "  Welcome to Tic-Tac-Toe  ",
    "**************************",
    "",
];
pub const TIE_MESSAGE: &str = "🤝 It's a tie!";
pub const FAREWELL_MESSAGE: &str = "👋 Thanks for playing!";
