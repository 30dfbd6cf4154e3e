//! Castling as one atomic king-and-rook relocation.
//!
//! Attacked squares are not considered: the variant has no check.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, KING_HOME_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::path_is_clear;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleCells {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

pub const fn castle_cells(color: Color, side: CastleSide) -> CastleCells {
    let row = color.home_row();
    match side {
        CastleSide::Kingside => CastleCells {
            king_from: Square::new(row, KING_HOME_COL),
            king_to: Square::new(row, 6),
            rook_from: Square::new(row, KINGSIDE_ROOK_COL),
            rook_to: Square::new(row, 5),
        },
        CastleSide::Queenside => CastleCells {
            king_from: Square::new(row, KING_HOME_COL),
            king_to: Square::new(row, 2),
            rook_from: Square::new(row, QUEENSIDE_ROOK_COL),
            rook_to: Square::new(row, 3),
        },
    }
}

pub fn can_castle(board: &Board, color: Color, side: CastleSide) -> bool {
    let cells = castle_cells(color, side);
    let unmoved = |square: Square, kind: PieceKind| {
        board
            .piece_at(square)
            .is_some_and(|p| p.is(kind, color) && !p.has_moved)
    };

    unmoved(cells.king_from, PieceKind::King)
        && unmoved(cells.rook_from, PieceKind::Rook)
        && path_is_clear(board, cells.king_from, cells.rook_from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_text::parse_placement;

    #[test]
    fn opening_position_cannot_castle() {
        let board = Board::starting_position();
        for color in Color::ALL {
            assert!(!can_castle(&board, color, CastleSide::Kingside));
            assert!(!can_castle(&board, color, CastleSide::Queenside));
        }
    }

    #[test]
    fn cleared_back_rank_allows_both_sides() {
        let board = parse_placement("r3k2r/8/8/8/8/8/8/R3K2R").expect("layout");
        for color in Color::ALL {
            assert!(can_castle(&board, color, CastleSide::Kingside));
            assert!(can_castle(&board, color, CastleSide::Queenside));
        }
    }

    #[test]
    fn queenside_needs_b_file_empty_too() {
        let board = parse_placement("rn2k2r/8/8/8/8/8/8/R3K1NR").expect("layout");
        assert!(!can_castle(&board, Color::Black, CastleSide::Queenside));
        assert!(can_castle(&board, Color::Black, CastleSide::Kingside));
        assert!(!can_castle(&board, Color::White, CastleSide::Kingside));
        assert!(can_castle(&board, Color::White, CastleSide::Queenside));
    }

    #[test]
    fn moved_king_or_rook_forfeits_castling() {
        let mut board = parse_placement("8/8/8/8/8/8/8/R3K2R").expect("layout");
        let h1 = Square::new(7, 7);
        let rook = board.piece_at(h1).expect("rook");
        board.set(h1, Some(rook.moved()));
        assert!(!can_castle(&board, Color::White, CastleSide::Kingside));
        assert!(can_castle(&board, Color::White, CastleSide::Queenside));

        let e1 = Square::new(7, 4);
        let king = board.piece_at(e1).expect("king");
        board.set(e1, Some(king.moved()));
        assert!(!can_castle(&board, Color::White, CastleSide::Queenside));
    }

    #[test]
    fn castled_cells() {
        let cells = castle_cells(Color::White, CastleSide::Queenside);
        assert_eq!(cells.king_to, Square::new(7, 2));
        assert_eq!(cells.rook_to, Square::new(7, 3));
    }
}
