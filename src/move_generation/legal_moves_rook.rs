//! Rook line walk: orthogonal and unobstructed up to the destination.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::{is_straight_line, path_is_clear};

#[inline]
pub fn is_valid_rook_move(board: &Board, from: Square, to: Square) -> bool {
    is_straight_line(from, to) && path_is_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::is_valid_rook_move;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn blocker_stops_the_file() {
        let mut board = Board::empty();
        let a1 = Square::new(7, 0);
        board.set(Square::new(4, 0), Some(Piece::new(PieceKind::Pawn, Color::Black, PieceId(0))));

        assert!(is_valid_rook_move(&board, a1, Square::new(5, 0)));
        assert!(is_valid_rook_move(&board, a1, Square::new(4, 0)));
        assert!(!is_valid_rook_move(&board, a1, Square::new(3, 0)));
    }

    #[test]
    fn rook_does_not_move_diagonally() {
        let board = Board::empty();
        assert!(!is_valid_rook_move(&board, Square::new(7, 0), Square::new(6, 1)));
    }
}
