//! Line-walking helpers shared by the slider, castling and shooting checks.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Same row or same column, excluding the null move.
#[inline]
pub fn is_straight_line(from: Square, to: Square) -> bool {
    from != to && (from.row() == to.row() || from.col() == to.col())
}

/// Exactly diagonal, excluding the null move.
#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta_to(to);
    dr != 0 && dr.abs() == dc.abs()
}

/// Unit step from `from` toward `to` along each axis.
#[inline]
pub fn unit_step(from: Square, to: Square) -> (i8, i8) {
    let (dr, dc) = from.delta_to(to);
    (dr.signum(), dc.signum())
}

/// Cells strictly between `from` and `to`. Callers must pass a straight or
/// diagonal pair; other pairs yield an empty walk.
pub fn cells_between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let aligned = is_straight_line(from, to) || is_diagonal(from, to);
    let (d_row, d_col) = unit_step(from, to);
    let mut cursor = if aligned { from.offset(d_row, d_col) } else { None };

    std::iter::from_fn(move || {
        let current = cursor.filter(|sq| *sq != to)?;
        cursor = current.offset(d_row, d_col);
        Some(current)
    })
}

#[inline]
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    cells_between(from, to).all(|sq| board.is_empty(sq))
}
