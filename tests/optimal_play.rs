//! Whole-game-tree properties: the searching tiers never lose, the rule
//! cascade always produces a move, and the evaluator respects the board
//! symmetries.

use std::collections::HashSet;

use noughts::{Board, Cell, D4Transform, Difficulty, Mark, Outcome, eval};

/// Walk every opponent continuation; the given tier answers each one.
///
/// Panics if any leaf is a loss for the engine side.
fn assert_never_loses(difficulty: Difficulty, board: &mut Board, engine_to_move: bool) {
    match eval::outcome(board) {
        Outcome::PlayerWin => panic!(
            "{difficulty} lost from:\n{board}\n(engine plays {})",
            board.ai_mark()
        ),
        Outcome::AiWin | Outcome::Draw => return,
        Outcome::Ongoing => {}
    }

    if engine_to_move {
        let mut selector = difficulty.build_selector(Some(1));
        let pos = selector.choose(board).unwrap();
        let ai = board.ai_mark();
        board.probe(pos, ai, |b| assert_never_loses(difficulty, b, false));
    } else {
        let player = board.player_mark();
        for pos in 0..9 {
            if board.is_empty(pos) {
                board.probe(pos, player, |b| assert_never_loses(difficulty, b, true));
            }
        }
    }
}

#[test]
fn test_minimax_never_loses_moving_first() {
    let mut board = Board::new();
    board.assign_marks(true);
    assert_never_loses(Difficulty::Minimax, &mut board, true);
}

#[test]
fn test_minimax_never_loses_moving_second() {
    let mut board = Board::new();
    board.assign_marks(false);
    assert_never_loses(Difficulty::Minimax, &mut board, false);
}

#[test]
fn test_node_aware_never_loses_moving_first() {
    let mut board = Board::new();
    board.assign_marks(true);
    assert_never_loses(Difficulty::NodeAware, &mut board, true);
}

#[test]
fn test_node_aware_never_loses_moving_second() {
    let mut board = Board::new();
    board.assign_marks(false);
    assert_never_loses(Difficulty::NodeAware, &mut board, false);
}

/// Every board reachable by alternating play from the empty board, with X
/// moving first. Terminal boards are collected but not expanded.
fn reachable_boards() -> Vec<Board> {
    let mut seen: HashSet<[Cell; 9]> = HashSet::new();
    let mut out = Vec::new();
    let mut board = Board::new();
    board.assign_marks(false);
    collect(&mut board, Mark::X, &mut seen, &mut out);
    out
}

fn collect(board: &mut Board, to_move: Mark, seen: &mut HashSet<[Cell; 9]>, out: &mut Vec<Board>) {
    if !seen.insert(*board.cells()) {
        return;
    }
    out.push(*board);
    if eval::outcome(board) != Outcome::Ongoing {
        return;
    }
    for pos in 0..9 {
        if board.is_empty(pos) {
            board.probe(pos, to_move, |b| collect(b, to_move.opponent(), seen, out));
        }
    }
}

#[test]
fn test_reachable_state_count() {
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn test_cascade_moves_on_every_open_board() {
    // the fallback rung alone covers center, corners and edges, so the
    // cascade can never fall through on a board with an empty cell
    let mut selector = Difficulty::Scripted.build_selector(None);
    for board in reachable_boards() {
        if eval::outcome(&board) != Outcome::Ongoing {
            continue;
        }
        let mut probe = board;
        let pos = selector.choose(&mut probe).unwrap();
        assert!(board.is_empty(pos), "illegal pick {pos} on:\n{board}");
        assert_eq!(probe, board, "cascade must not mutate the board");
    }
}

#[test]
fn test_at_most_one_winner() {
    use noughts::lines;
    for board in reachable_boards() {
        assert!(
            !(lines::has_won(&board, Mark::X) && lines::has_won(&board, Mark::O)),
            "both sides won on:\n{board}"
        );
    }
}

#[test]
fn test_positional_score_is_symmetry_invariant() {
    let transforms = D4Transform::all();
    for board in reachable_boards() {
        let base = eval::positional(&board);
        for t in &transforms {
            assert_eq!(
                eval::positional(&board.transformed(t)),
                base,
                "asymmetric score on:\n{board}"
            );
        }
    }
}
