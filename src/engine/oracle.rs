//! Win/loss classification. Nothing here mutates the board.

use super::board::{Board, WinningValue};
use super::slide::would_change;
use super::{GameStatus, Move};

/// True if any cell holds the winning value.
pub fn has_won(board: &Board, winning_value: WinningValue) -> bool {
    board.contains(winning_value.get())
}

/// True if an empty cell exists or any slide would change the board.
pub fn has_move_left(board: &Board) -> bool {
    board.count_empty() > 0 || Move::ALL.iter().any(|&dir| would_change(board, dir))
}

/// Directions whose slide would change the board.
pub fn available_moves(board: &Board) -> Vec<Move> {
    Move::ALL.into_iter().filter(|&dir| would_change(board, dir)).collect()
}

/// WON beats LOST: a board holding the winning value is WON even when stuck.
pub fn status(board: &Board, winning_value: WinningValue) -> GameStatus {
    if has_won(board, winning_value) {
        GameStatus::Won
    } else if has_move_left(board) {
        GameStatus::InProgress
    } else {
        GameStatus::Lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win(v: i64) -> WinningValue {
        WinningValue::new(v).unwrap()
    }

    #[test]
    fn empty_cell_means_move_left() {
        let b = Board::from_grid(&[vec![2, 4], vec![4, 0]]).unwrap();
        assert!(has_move_left(&b));
        assert_eq!(status(&b, win(2048)), GameStatus::InProgress);
    }

    #[test]
    fn full_board_with_merge_has_move() {
        let b = Board::from_grid(&[vec![2, 2], vec![4, 8]]).unwrap();
        assert!(has_move_left(&b));
        assert_eq!(available_moves(&b), vec![Move::Left, Move::Right]);
    }

    #[test]
    fn full_stuck_board_is_lost() {
        let b = Board::from_grid(&[vec![2, 4], vec![4, 2]]).unwrap();
        assert!(!has_move_left(&b));
        assert!(available_moves(&b).is_empty());
        assert_eq!(status(&b, win(2048)), GameStatus::Lost);
    }

    #[test]
    fn win_overrides_loss() {
        let b = Board::from_grid(&[vec![2, 4], vec![4, 16]]).unwrap();
        assert!(!has_move_left(&b));
        assert!(has_won(&b, win(16)));
        assert_eq!(status(&b, win(16)), GameStatus::Won);
    }

    #[test]
    fn empty_board_has_room() {
        let b = Board::new(4, 4).unwrap();
        assert!(has_move_left(&b));
        assert!(available_moves(&b).is_empty());
        assert!(!has_won(&b, win(2)));
    }
}
