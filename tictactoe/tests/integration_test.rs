use tictactoe::board::{Board, Marker, Move};
use tictactoe::config::{FAREWELL_MESSAGE, MOVE_PROMPT, REPLAY_PROMPT, TIE_MESSAGE};
use tictactoe::console::ScriptedConsole;
use tictactoe::players::{ComputerPlayer, HumanPlayer, PositionSelector, RandomSelector};
use tictactoe::record::Outcome;
use tictactoe::Game;

struct FirstFree;

impl PositionSelector for FirstFree {
    fn select(&mut self, free: &[usize]) -> Option<usize> {
        free.first().copied()
    }
}

fn session(input: &[&str]) -> Game<ScriptedConsole> {
    Game::new(
        Box::new(HumanPlayer::new("You", Marker::Cross)),
        Box::new(ComputerPlayer::with_selector("Computer", Marker::Nought, FirstFree)),
        ScriptedConsole::new(input.iter().copied()),
    )
    .unwrap()
}

#[test]
fn alternating_fill_without_line_is_a_tie() {
    use Marker::{Cross as X, Nought as O};
    let mut board = Board::new();
    for (i, marker) in [X, O, X, O, X, O, O, X, O].into_iter().enumerate() {
        board.update(&Move::new(i + 1, marker));
    }
    assert!(!board.check_winner(X));
    assert!(!board.check_winner(O));
    assert!(board.is_full());
}

#[test]
fn occupied_position_costs_the_turn() {
    // The computer takes the first free cell (2), which the human then picks again.
    let mut game = session(&["1", "2", "5", "9", "n"]);
    game.run().unwrap();
    let console = game.console();
    assert_eq!(
        console.count_output("❌ That position is already taken. You lose your turn!"),
        1
    );
    assert_eq!(console.count_output("You loses the turn."), 1);
    // The forfeit is followed directly by the computer's move, not a second prompt.
    let forfeit = console
        .output()
        .iter()
        .position(|l| l == "You loses the turn.")
        .unwrap();
    assert_eq!(console.output()[forfeit + 6], "Computer chooses position 3");

    let record = game.last_record().unwrap();
    assert_eq!(record.turns[2].position, None);
    assert_eq!(record.turns[3].position, Some(3));
}

#[test]
fn non_numeric_input_prompts_once_more() {
    let mut game = session(&["five", "5", "9", "7", "n"]);
    game.run().unwrap();
    let console = game.console();
    assert_eq!(
        console.count_output("❌ Invalid input. Please enter a number between 1 and 9."),
        1
    );
    let first_turn = &game.last_record().unwrap().turns[0];
    assert_eq!((first_turn.player.as_str(), first_turn.position), ("You", Some(5)));
    // five, 5, then one prompt per later human turn and the replay prompt.
    assert_eq!(console.prompts()[..2], [MOVE_PROMPT, MOVE_PROMPT]);
    assert_eq!(console.prompts().last().map(String::as_str), Some(REPLAY_PROMPT));
}

#[test]
fn lowercase_and_uppercase_y_both_replay() {
    // Each round: human 1, 4, 7 down the left column; the computer fills 2, 3.
    let round = ["1", "4", "7"];
    let input: Vec<&str> = round
        .iter()
        .chain(&["y"])
        .chain(&round)
        .chain(&["Y"])
        .chain(&round)
        .chain(&["yes"])
        .copied()
        .collect();
    let mut game = session(&input);
    assert_eq!(game.run().unwrap(), 3);
    assert_eq!(game.console().count_output("🏆 You wins the game!"), 3);
    assert_eq!(game.console().count_output("Positions:"), 3);
    assert_eq!(game.console().count_output(FAREWELL_MESSAGE), 1);
    let [human, computer] = game.players();
    assert_eq!(human.marker(), Marker::Cross);
    assert_eq!(computer.marker(), Marker::Nought);
}

#[test]
fn each_round_starts_from_an_empty_board() {
    let mut game = session(&["1", "4", "7"]);
    game.play_round().unwrap();
    assert!(!game.board.is_position_free(1));
    game.play_round().unwrap_err();
    assert_eq!(game.board.free_positions(), (1..=9).collect::<Vec<_>>());
}

#[test]
fn random_computer_games_always_terminate() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    for seed in 0..20 {
        // The human scans 1..9 and skips over taken cells by losing turns.
        let input: Vec<String> = (1..=9).cycle().take(30).map(|p| p.to_string()).collect();
        let mut game = Game::new(
            Box::new(HumanPlayer::new("You", Marker::Cross)),
            Box::new(ComputerPlayer::with_selector(
                "Computer",
                Marker::Nought,
                RandomSelector::with_rng(StdRng::seed_from_u64(seed)),
            )),
            ScriptedConsole::new(input),
        )
        .unwrap();
        let outcome = game.play_round().unwrap();
        let record = game.last_record().unwrap();
        let placed = record.turns.iter().filter(|t| t.position.is_some()).count();
        assert_eq!(placed, 9 - game.board.free_positions().len());
        if outcome == Outcome::Tie {
            assert!(game.board.is_full());
            assert_eq!(game.console().count_output(TIE_MESSAGE), 1);
        }
    }
}
