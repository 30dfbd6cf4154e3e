use crate::game_state::chess_types::Square;

/// One square in any of the eight directions.
#[inline]
pub fn is_valid_king_move(from: Square, to: Square) -> bool {
    let (dr, dc) = from.delta_to(to);
    dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0)
}

#[cfg(test)]
mod tests {
    use super::is_valid_king_move;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_steps_one_square() {
        let e4 = Square::new(4, 4);
        let neighbours = Square::all().filter(|sq| is_valid_king_move(e4, *sq)).count();
        assert_eq!(neighbours, 8);
        assert!(!is_valid_king_move(e4, Square::new(2, 4)));
        assert!(!is_valid_king_move(e4, e4));
    }
}
