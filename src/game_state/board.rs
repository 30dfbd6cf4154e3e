//! 8x8 board of optional pieces.
//!
//! A `Board` is plain `Copy` data. The resolver takes a snapshot by value and
//! builds the next board from it, so no two owners ever alias one grid.

use serde::Serialize;

use crate::game_state::chess_types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Opening layout. Ids run 0..32 in row-major order from black's corner.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        let mut next_id = 0u8;
        let mut put = |board: &mut Board, row: u8, col: u8, kind: PieceKind, color: Color| {
            board.set(Square::new(row, col), Some(Piece::new(kind, color, PieceId(next_id))));
            next_id += 1;
        };

        for (col, kind) in BACK_RANK.iter().enumerate() {
            put(&mut board, Color::Black.home_row(), col as u8, *kind, Color::Black);
        }
        for col in 0..BOARD_SIZE {
            put(&mut board, Color::Black.pawn_start_row(), col, PieceKind::Pawn, Color::Black);
        }
        for col in 0..BOARD_SIZE {
            put(&mut board, Color::White.pawn_start_row(), col, PieceKind::Pawn, Color::White);
        }
        for (col, kind) in BACK_RANK.iter().enumerate() {
            put(&mut board, Color::White.home_row(), col as u8, *kind, Color::White);
        }

        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Overwrite a cell, returning what was there.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.cells[square.row() as usize][square.col() as usize],
            piece,
        )
    }

    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.set(square, None)
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// First king of `color` in row-major order.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.is(PieceKind::King, color))
            .map(|(sq, _)| sq)
    }

    #[inline]
    pub fn has_king(&self, color: Color) -> bool {
        self.find_king(color).is_some()
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }
}
