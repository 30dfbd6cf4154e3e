//! Snapshot legality for piece moves.
//!
//! Every check here is a pure function of the board it is handed. Bounds are
//! guaranteed by `Square`; coordinates from the wire are converted (and
//! rejected when off-board) before they reach these functions.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::is_valid_bishop_move;
use crate::move_generation::legal_moves_king::is_valid_king_move;
use crate::move_generation::legal_moves_knight::is_valid_knight_move;
use crate::move_generation::legal_moves_pawn::is_valid_pawn_move;
use crate::move_generation::legal_moves_queen::is_valid_queen_move;
use crate::move_generation::legal_moves_rook::is_valid_rook_move;

/// Whether `piece`, standing on `from`, may move to `to` on `board`.
pub fn is_valid_move(board: &Board, from: Square, to: Square, piece: Piece) -> bool {
    if board.piece_at(to).is_some_and(|target| target.color == piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::King => is_valid_king_move(from, to),
        PieceKind::Queen => is_valid_queen_move(board, from, to),
        PieceKind::Rook => is_valid_rook_move(board, from, to),
        PieceKind::Bishop => is_valid_bishop_move(board, from, to),
        PieceKind::Knight => is_valid_knight_move(from, to),
        PieceKind::Pawn => is_valid_pawn_move(board, from, to, piece),
    }
}

/// Every destination `is_valid_move` accepts for the piece on `from`.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    Square::all()
        .filter(|to| is_valid_move(board, from, *to, piece))
        .collect()
}
