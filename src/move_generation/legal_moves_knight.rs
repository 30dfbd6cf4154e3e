use crate::game_state::chess_types::Square;

/// (2,1) or (1,2) offset; knights jump, so nothing blocks them.
#[inline]
pub fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta_to(to);
    matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2))
}
