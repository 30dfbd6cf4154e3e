//! The king's ranged shot along rook or bishop lines.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{is_diagonal, is_straight_line, path_is_clear};

/// A shot needs an enemy non-king target in clear line of sight. The first
/// piece on the line, of either color, is the only thing that can be hit.
pub fn can_shoot_target(board: &Board, king_pos: Square, target: Square, color: Color) -> bool {
    let Some(victim) = board.piece_at(target) else {
        return false;
    };
    if victim.color == color || victim.kind == PieceKind::King {
        return false;
    }

    (is_straight_line(king_pos, target) || is_diagonal(king_pos, target))
        && path_is_clear(board, king_pos, target)
}
