//! Whole-game scenarios played through the public API.

use connect_four::error::{MoveError, TurnError};
use connect_four::game::{Color, Game, Verdict, CELLS, ROWS};
use connect_four::shell::{Phase, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A full game with no run of four anywhere; red moves first.
const DRAW_SEQUENCE: [usize; CELLS] = [
    6, 4, 3, 4, 2, 6, 4, 2, 1, 2, 5, 2, 3, 6, 1, 6, 7, 7, 3, 1, 7, 1, 5, 3, 4, 1, 4, 5, 3, 4, 3,
    7, 1, 5, 2, 2, 6, 5, 5, 6, 7, 7,
];

/// Seed a session whose first mover is red
fn red_first_session() -> Session {
    (0u64..)
        .map(|seed| Session::start(Game::new("Alice", "Bob"), &mut StdRng::seed_from_u64(seed)))
        .find(|s| s.current_player().color() == Color::Red)
        .unwrap()
}

#[test]
fn test_four_drops_in_one_column_win_vertically() {
    let mut game = Game::new("A", "B");
    let mut verdict = Verdict::Undecided;
    for _ in 0..4 {
        let placement = game.place_game_token(4, Color::Red).unwrap();
        verdict = game.check_winner(&placement);
    }
    assert_eq!(verdict, Verdict::WonVertical("A".to_string()));
    assert_eq!(verdict.to_string(), "A won vertically.");
}

#[test]
fn test_bottom_row_run_wins_horizontally() {
    let mut game = Game::new("A", "B");
    let mut verdicts = Vec::new();
    for column in 1..=4 {
        let placement = game.place_game_token(column, Color::Red).unwrap();
        assert_eq!(placement.row(), ROWS - 1);
        verdicts.push(game.check_winner(&placement));
    }
    assert_eq!(&verdicts[..3], &[Verdict::Undecided, Verdict::Undecided, Verdict::Undecided]);
    assert_eq!(verdicts[3], Verdict::WonHorizontal("A".to_string()));
}

#[test]
fn test_full_board_session_is_a_draw() {
    let mut session = red_first_session();
    for (turn, &column) in DRAW_SEQUENCE.iter().enumerate() {
        assert_eq!(session.phase(), Phase::InProgress, "ended early at turn {turn}");
        session.play(column).unwrap();
    }
    assert_eq!(session.phase(), Phase::Draw);
    assert_eq!(session.verdict().to_string(), "Its a Draw!");
    assert_eq!(session.turns_played(), CELLS);
    assert!(session.game().grid().is_full());
    assert_eq!(session.play(1), Err(TurnError::GameOver));
}

#[test]
fn test_token_accounting_matches_grid() {
    let mut session = red_first_session();
    for &column in DRAW_SEQUENCE.iter().take(20) {
        session.play(column).unwrap();
        let game = session.game();
        assert_eq!(game.grid().occupied(), game.tokens_placed());
        assert_eq!(
            game.tokens_placed(),
            CELLS - usize::from(game.player_one().tokens()) - usize::from(game.player_two().tokens())
        );
    }
    assert_eq!(session.game().player_one().tokens(), 11);
    assert_eq!(session.game().player_two().tokens(), 11);
}

#[test]
fn test_overfilled_column_never_corrupts_state() {
    let mut game = Game::new("A", "B");
    let mut color = Color::Red;
    for _ in 0..ROWS {
        game.place_game_token(7, color).unwrap();
        color = color.other();
    }
    let snapshot = game.clone();
    assert_eq!(game.has_free_slot(7), Ok(false));
    assert_eq!(game.place_game_token(7, color), Err(MoveError::ColumnFull));
    assert_eq!(game, snapshot);
}

#[test]
fn test_alternating_game_won_diagonally() {
    let mut session = red_first_session();
    let moves = [1, 2, 2, 3, 4, 3, 3, 4, 7, 4];
    for column in moves {
        let outcome = session.play(column).unwrap();
        assert_eq!(outcome.verdict, Verdict::Undecided);
    }
    let outcome = session.play(4).unwrap();
    assert_eq!(outcome.placement.row(), 2);
    assert_eq!(outcome.verdict, Verdict::WonDiagonal("Alice".to_string()));
    assert_eq!(session.phase(), Phase::Won);
    assert_eq!(session.verdict().winner(), Some("Alice"));
}
