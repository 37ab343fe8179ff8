//! End-to-end checks of the engine surface: fixed positions with known
//! correct picks, tier behavior, and board accounting.

use std::collections::HashMap;

use noughts::{Board, Difficulty, Error, Mark, Outcome, eval};

fn board(layout: &str, ai: Mark) -> Board {
    Board::from_layout(layout, ai).unwrap()
}

#[test]
fn test_immediate_win_is_taken() {
    // O to move; completing the middle column at (2,1) wins outright,
    // and every searching tier must take it
    for difficulty in [Difficulty::Scripted, Difficulty::Minimax, Difficulty::NodeAware] {
        let mut b = board("XOX.O.X..", Mark::O);
        let pos = difficulty.build_selector(Some(1)).choose(&mut b).unwrap();
        assert_eq!(pos, 7, "{difficulty} must win at (2,1)");
    }
}

#[test]
fn test_forced_block_is_found() {
    // X threatens the top row; (0,2) is the only non-losing reply
    for difficulty in [Difficulty::Scripted, Difficulty::Minimax, Difficulty::NodeAware] {
        let mut b = board("XX..O....", Mark::O);
        let pos = difficulty.build_selector(Some(1)).choose(&mut b).unwrap();
        assert_eq!(pos, 2, "{difficulty} must block at (0,2)");
    }
}

#[test]
fn test_full_drawn_board() {
    let b = board("XOXXOOOXX", Mark::O);
    assert_eq!(eval::outcome(&b), Outcome::Draw);
    for level in 0..=4u8 {
        let mut probe = b;
        let err = Difficulty::from_level(level)
            .unwrap()
            .build_selector(Some(1))
            .choose(&mut probe)
            .unwrap_err();
        assert!(matches!(err, Error::NoMovesLeft));
    }
}

#[test]
fn test_lone_center_scores_four() {
    let b = board("....X....", Mark::X);
    assert_eq!(eval::positional(&b), 4);
}

#[test]
fn test_invalid_level_is_rejected() {
    let mut engine = noughts::Engine::new(Difficulty::Random);
    assert!(matches!(
        engine.set_ai_level(7),
        Err(Error::InvalidLevel { level: 7 })
    ));
}

#[test]
fn test_board_accounting_through_a_round() {
    let mut engine = noughts::Engine::with_seed(Difficulty::Greedy, Some(5));
    engine.set_game_pieces(false);

    let mut player_next = true;
    while engine.outcome() == Outcome::Ongoing {
        if player_next {
            let pos = (0..9).find(|&p| engine.board().is_empty(p)).unwrap();
            engine.play_player_move(pos).unwrap();
        } else {
            engine.pick_ai_move().unwrap();
        }
        player_next = !player_next;

        let b = engine.board();
        assert_eq!(b.moves_left() + b.count(Mark::X) + b.count(Mark::O), 9);
    }
}

#[test]
fn test_random_tier_picks_are_legal_and_spread() {
    let b = board("XOXOXO...", Mark::O);
    let mut counts: HashMap<usize, u32> = HashMap::new();
    let trials = 3000u32;
    for seed in 0..trials {
        let mut probe = b;
        let pos = Difficulty::Random
            .build_selector(Some(seed as u64))
            .choose(&mut probe)
            .unwrap();
        assert!(b.is_empty(pos));
        *counts.entry(pos).or_default() += 1;
    }
    assert_eq!(counts.len(), 3);
    for &n in counts.values() {
        let share = n as f64 / trials as f64;
        assert!((share - 1.0 / 3.0).abs() < 0.05, "share {share} too skewed");
    }
}

#[test]
fn test_greedy_tier_is_deterministic() {
    let b = board("X...O....", Mark::O);
    let first = {
        let mut probe = b;
        Difficulty::Greedy
            .build_selector(None)
            .choose(&mut probe)
            .unwrap()
    };
    for _ in 0..10 {
        let mut probe = b;
        let pos = Difficulty::Greedy
            .build_selector(None)
            .choose(&mut probe)
            .unwrap();
        assert_eq!(pos, first);
    }
}
