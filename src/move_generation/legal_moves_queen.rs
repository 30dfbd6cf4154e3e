use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_moves_bishop::is_valid_bishop_move;
use crate::move_generation::legal_moves_rook::is_valid_rook_move;

#[inline]
pub fn is_valid_queen_move(board: &Board, from: Square, to: Square) -> bool {
    is_valid_rook_move(board, from, to) || is_valid_bishop_move(board, from, to)
}
