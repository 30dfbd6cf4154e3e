//! Pawn pushes and diagonal captures. No en-passant in this variant.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub fn is_valid_pawn_move(board: &Board, from: Square, to: Square, pawn: Piece) -> bool {
    let direction = pawn.color.pawn_direction();
    let (dr, dc) = from.delta_to(to);
    let target = board.piece_at(to);

    if dc == 0 && target.is_none() {
        if dr == direction {
            return true;
        }
        if dr == 2 * direction && from.row() == pawn.color.pawn_start_row() && !pawn.has_moved {
            let intermediate_is_empty = from
                .offset(direction, 0)
                .is_some_and(|sq| board.is_empty(sq));
            return intermediate_is_empty;
        }
        return false;
    }

    dc.abs() == 1 && dr == direction && target.is_some_and(|t| t.color != pawn.color)
}

#[cfg(test)]
mod tests {
    use super::is_valid_pawn_move;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    fn white_pawn() -> Piece {
        Piece::new(PieceKind::Pawn, Color::White, PieceId(20))
    }

    #[test]
    fn double_push_from_start_row() {
        let board = Board::starting_position();
        let e2 = Square::new(6, 4);
        let pawn = board.piece_at(e2).expect("pawn on e2");
        assert!(is_valid_pawn_move(&board, e2, Square::new(5, 4), pawn));
        assert!(is_valid_pawn_move(&board, e2, Square::new(4, 4), pawn));
        assert!(!is_valid_pawn_move(&board, e2, Square::new(3, 4), pawn));
    }

    #[test]
    fn double_push_requires_unmoved_pawn_and_clear_path() {
        let mut board = Board::empty();
        let e2 = Square::new(6, 4);
        assert!(!is_valid_pawn_move(&board, e2, Square::new(4, 4), white_pawn().moved()));

        board.set(Square::new(5, 4), Some(Piece::new(PieceKind::Knight, Color::Black, PieceId(1))));
        assert!(!is_valid_pawn_move(&board, e2, Square::new(4, 4), white_pawn()));
    }

    #[test]
    fn pawns_never_capture_forward() {
        let mut board = Board::empty();
        board.set(Square::new(5, 4), Some(Piece::new(PieceKind::Rook, Color::Black, PieceId(2))));
        assert!(!is_valid_pawn_move(&board, Square::new(6, 4), Square::new(5, 4), white_pawn()));
    }

    #[test]
    fn diagonal_only_onto_enemy() {
        let mut board = Board::empty();
        let e2 = Square::new(6, 4);
        let d3 = Square::new(5, 3);
        assert!(!is_valid_pawn_move(&board, e2, d3, white_pawn()));

        board.set(d3, Some(Piece::new(PieceKind::Bishop, Color::Black, PieceId(2))));
        assert!(is_valid_pawn_move(&board, e2, d3, white_pawn()));

        board.set(d3, Some(Piece::new(PieceKind::Bishop, Color::White, PieceId(3))));
        assert!(!is_valid_pawn_move(&board, e2, d3, white_pawn()));
    }

    #[test]
    fn black_pawns_advance_down_the_board() {
        let board = Board::starting_position();
        let e7 = Square::new(1, 4);
        let pawn = board.piece_at(e7).expect("pawn on e7");
        assert!(is_valid_pawn_move(&board, e7, Square::new(3, 4), pawn));
        assert!(!is_valid_pawn_move(&board, e7, Square::new(0, 4), pawn));
    }
}
