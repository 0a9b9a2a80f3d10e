//! Behavioural tests for the minimax opponent.

use tictactoe_core::search::{DRAW, LOSS, WIN};
use tictactoe_core::{
    best_move, evaluate, minimax, Board, GameOutcome, Mark, Minimax, MoveError, Position,
};

fn board(notation: &str) -> Board {
    notation.parse().expect("valid notation")
}

#[test]
fn test_empty_board_value_is_draw() {
    let mut empty = Board::new();
    assert_eq!(minimax(&mut empty, true), DRAW);
}

#[test]
fn test_immediate_win_is_taken() {
    let mut b = board("XX. ... ...");
    assert_eq!(best_move(&mut b), Ok(Position::TopRight));
}

#[test]
fn test_forced_block() {
    let mut b = board("OO. ... ...");
    assert_eq!(best_move(&mut b), Ok(Position::TopRight));
}

#[test]
fn test_slow_win_scores_like_immediate_win() {
    // BottomRight wins at once, but Center forks and wins a move later.
    let mut b = board("XOX/O.X/.O.");
    let mut won = b.clone();
    won.place_at(Position::BottomRight, Mark::X).unwrap();
    assert_eq!(evaluate(&won), WIN);

    assert_eq!(
        Minimax::new().best_move_scored(&mut b),
        Ok((Position::Center, WIN))
    );
}

#[test]
fn test_first_winning_cell_in_row_major_order() {
    // BottomLeft and BottomRight win at once; MiddleRight wins later but
    // comes first in row-major order.
    let mut b = board("XOX/OX./.O.");
    assert_eq!(best_move(&mut b), Ok(Position::MiddleRight));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let b = board("XOX XOO OXX");
    assert!(b.is_full());
    assert_eq!(b.outcome(), GameOutcome::Draw);
    assert_eq!(evaluate(&b), DRAW);
}

#[test]
fn test_full_board_with_line_is_win_not_draw() {
    let b = board("XOX OXO OXX");
    assert!(b.is_full());
    assert_eq!(b.outcome(), GameOutcome::Won(Mark::X));
    assert_eq!(evaluate(&b), WIN);
}

#[test]
fn test_evaluate_agrees_with_winner() {
    for notation in ["XXX OO. ...", "OOO XX. X..", "X.O .XO ..X", "XO. XO. .O.", "... ... ..."] {
        let b = board(notation);
        let expected = if b.winner(Mark::X) {
            WIN
        } else if b.winner(Mark::O) {
            LOSS
        } else {
            DRAW
        };
        assert_eq!(evaluate(&b), expected, "{}", notation);
    }
}

#[test]
fn test_one_empty_cell_is_returned() {
    for notation in ["XOX OXO OX.", "OXO XXO OO.", ".OX XOO XXO"] {
        let mut b = board(notation);
        let only = b.empty_positions()[0];
        assert_eq!(best_move(&mut b), Ok(only), "{}", notation);
    }
}

#[test]
fn test_best_move_on_full_board_errors() {
    let mut b = board("XOX XOO OXX");
    assert_eq!(best_move(&mut b), Err(MoveError::NoLegalMove));
}

#[test]
fn test_searcher_reuse_resets_node_count() {
    let mut search = Minimax::new();
    let mut b = board("XO. ... ...");
    search.best_move(&mut b).unwrap();
    let first = search.nodes();
    search.best_move(&mut b).unwrap();
    assert_eq!(search.nodes(), first);
}

/// X plays `best_move`, O tries every reply; X must never lose.
fn assert_x_never_loses(board: &mut Board) {
    match board.outcome() {
        GameOutcome::Won(Mark::O) => panic!("minimax lost: {}", board),
        GameOutcome::Won(Mark::X) | GameOutcome::Draw => return,
        GameOutcome::InProgress => {}
    }

    let pos = best_move(board).expect("board not full");
    board.place_at(pos, Mark::X).expect("best move is legal");

    if board.outcome() == GameOutcome::InProgress {
        for reply in board.empty_positions() {
            let mut next = board.clone();
            next.place_at(reply, Mark::O).expect("reply is legal");
            assert_x_never_loses(&mut next);
        }
    }
}

#[test]
fn test_minimax_never_loses_moving_first() {
    let mut empty = Board::new();
    assert_x_never_loses(&mut empty);
}
