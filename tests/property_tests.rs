//! Property tests over random operation sequences.

use nim_engine::{MemoryJournal, Nim, Player};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Move(usize, usize),
    Done,
    Undo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0usize..5, 0usize..8).prop_map(|(r, c)| Op::Move(r, c)),
        2 => Just(Op::Done),
        1 => Just(Op::Undo),
    ]
}

fn apply(game: &mut Nim<MemoryJournal>, op: &Op) -> bool {
    match *op {
        Op::Move(r, c) => game.make_move(r, c).is_ok(),
        Op::Done => game.turn_done().is_ok(),
        Op::Undo => game.undo().is_ok(),
    }
}

fn moves_in_log(game: &Nim<MemoryJournal>) -> usize {
    game.turns().iter().map(|t| t.len()).sum()
}

proptest! {
    #[test]
    fn prop_in_board_iff_triangle(row in 0usize..8, col in 0usize..12) {
        let game = Nim::in_memory();
        prop_assert_eq!(game.in_board(row, col), row <= 3 && col <= 2 * row);
    }

    #[test]
    fn prop_tokens_conserved(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let mut game = Nim::in_memory();

        for op in &ops {
            let before = game.tokens_left();
            let accepted = apply(&mut game, op);

            prop_assert_eq!(game.board().count_tokens(), game.tokens_left());
            prop_assert_eq!(game.tokens_left() + moves_in_log(&game), 16);

            if let (Op::Move(..), true) = (op, accepted) {
                prop_assert_eq!(game.tokens_left(), before - 1);
            }
        }
    }

    #[test]
    fn prop_turns_stay_in_one_row(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let mut game = Nim::in_memory();

        for op in &ops {
            apply(&mut game, op);
            for turn in game.turns().iter() {
                prop_assert!(!turn.is_empty());
                prop_assert!(turn.positions().all(|p| p.row == turn.row()));
            }
        }
    }

    #[test]
    fn prop_game_over_exactly_at_one_token(ops in prop::collection::vec(op_strategy(), 0..120)) {
        let mut game = Nim::in_memory();

        for op in &ops {
            apply(&mut game, op);
            prop_assert_eq!(game.is_game_over(), game.tokens_left() == 1);
            if game.is_game_over() {
                prop_assert_eq!(game.check_winner(), Some(game.current_player()));
                prop_assert!(game.make_move(0, 0).is_err());
            }
        }
    }

    #[test]
    fn prop_player_follows_turn_parity(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let mut game = Nim::in_memory();

        for op in &ops {
            apply(&mut game, op);
            let closed = if game.is_start_of_turn() {
                game.turns().len()
            } else {
                game.turns().len() - 1
            };
            prop_assert_eq!(game.current_player(), Player::after_turns(closed));
        }
    }

    #[test]
    fn prop_undo_restores_prior_turn_boundary(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut game = Nim::in_memory();
        for op in &ops {
            apply(&mut game, op);
        }
        if game.is_game_over() || !game.is_start_of_turn() || game.turns().is_empty() {
            return Ok(());
        }
        let before = game.snapshot();

        // Play one more turn and take it back.
        let Some((row, col)) = (0..4)
            .flat_map(|r| (0..=2 * r).map(move |c| (r, c)))
            .find(|&(r, c)| game.cell(r, c) == Some(true))
        else {
            return Ok(());
        };
        game.make_move(row, col).unwrap();
        if game.is_game_over() {
            return Ok(());
        }
        game.turn_done().unwrap();
        game.undo().unwrap();

        prop_assert_eq!(game.board(), &before.board);
        prop_assert_eq!(game.tokens_left(), before.tokens_left);
        prop_assert_eq!(game.current_player(), before.current_player);
        prop_assert_eq!(game.turns(), &before.turns);
    }

    #[test]
    fn prop_pause_resume_round_trip(ops in prop::collection::vec(op_strategy(), 1..80)) {
        let mut game = Nim::in_memory();
        for op in &ops {
            apply(&mut game, op);
        }
        let before = game.snapshot();

        game.pause();
        game.unpause();

        prop_assert!(!game.is_paused());
        prop_assert_eq!(game.snapshot(), before);
    }
}
