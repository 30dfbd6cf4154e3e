//! Bishop line walk: exact diagonal and unobstructed up to the destination.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::{is_diagonal, path_is_clear};

#[inline]
pub fn is_valid_bishop_move(board: &Board, from: Square, to: Square) -> bool {
    is_diagonal(from, to) && path_is_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::is_valid_bishop_move;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn bishop_needs_an_exact_diagonal() {
        let board = Board::empty();
        let c1 = Square::new(7, 2);
        assert!(is_valid_bishop_move(&board, c1, Square::new(2, 7)));
        assert!(!is_valid_bishop_move(&board, c1, Square::new(5, 3)));
    }

    #[test]
    fn bishop_stops_at_first_blocker() {
        let mut board = Board::empty();
        board.set(Square::new(5, 4), Some(Piece::new(PieceKind::Knight, Color::White, PieceId(3))));
        let c1 = Square::new(7, 2);
        assert!(!is_valid_bishop_move(&board, c1, Square::new(4, 5)));
        assert!(is_valid_bishop_move(&board, c1, Square::new(6, 3)));
    }
}
