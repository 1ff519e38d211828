use connect_four::ai::{choose_move_alpha_beta, choose_move_learned, choose_move_random, RandomAgent};
use connect_four::arena::play_game;
use connect_four::error::GameError;
use connect_four::game::{is_game_over, Board, Cell, GameState, Player};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Core operations driven only through the public interface.
mod board_interface {
    use super::*;

    #[test]
    fn drop_then_query() {
        let mut board = Board::new(7, 6, 4).unwrap();
        assert!(board.is_legal_drop(2));
        assert_eq!(board.apply_drop(2, Player::Red), Ok(0));
        assert_eq!(board.get(0, 2), Ok(Cell::Red));
        assert_eq!(is_game_over(&board), (false, None));
    }

    #[test]
    fn clone_then_mutate_leaves_original() {
        let mut original = Board::standard();
        original.apply_drop(0, Player::Yellow).unwrap();
        let mut copy = original.clone();
        copy.apply_drop(0, Player::Red).unwrap();
        assert_eq!(original.get(1, 0), Ok(Cell::Empty));
        assert_eq!(copy.get(1, 0), Ok(Cell::Red));
    }

    #[test]
    fn diagonals_through_corner_and_center() {
        let board = Board::standard();
        assert_eq!(
            board.diagonals_through(0, 0).unwrap(),
            &[vec![(0, 0), (1, 1), (2, 2), (3, 3)]]
        );
        assert_eq!(board.diagonals_through(3, 3).unwrap().len(), 6);
        assert_eq!(
            board.diagonals_through(7, 0),
            Err(GameError::OutOfBounds { row: 7, col: 0 })
        );
    }
}

/// A computer turn as the excluded UI layer would run it: pick a column,
/// then apply it.
mod computer_turns {
    use super::*;

    #[test]
    fn alpha_beta_turn_completes_winning_row() {
        let mut board = Board::standard();
        for col in 1..4 {
            board.apply_drop(col, Player::Yellow).unwrap();
            board.apply_drop(col, Player::Red).unwrap();
        }
        let col = choose_move_alpha_beta(&board, 4, Player::Yellow).unwrap();
        assert_eq!(col, 0);
        board.apply_drop(col, Player::Yellow).unwrap();
        assert_eq!(is_game_over(&board), (true, Some(Player::Yellow)));
    }

    #[test]
    fn random_turn_is_applicable() {
        let mut board = Board::standard();
        let mut rng = StdRng::seed_from_u64(2024);
        let col = choose_move_random(&board, &mut rng).unwrap();
        assert!(board.apply_drop(col, Player::Yellow).is_ok());
    }

    #[test]
    fn learned_turn_is_unavailable() {
        assert!(matches!(
            choose_move_learned(&Board::standard()),
            Err(GameError::NotImplemented(_))
        ));
    }

    #[test]
    fn random_games_always_finish() {
        for seed in 0..5 {
            let mut red = RandomAgent::with_seed(seed);
            let mut yellow = RandomAgent::with_seed(seed + 100);
            let record = play_game(&mut red, &mut yellow, &Board::standard()).unwrap();
            let state: &GameState = &record.final_state;
            assert!(state.is_terminal());
            assert_eq!(is_game_over(state.board()).1, record.winner);
        }
    }
}
