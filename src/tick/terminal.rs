//! End-of-game detection from the kings left on the board.

use serde::Serialize;

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    White,
    Black,
    Draw,
}

impl From<Color> for Winner {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Winner::White,
            Color::Black => Winner::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameOverReason {
    KingCaptured,
    Disconnect,
}

/// `None` while both kings stand. Losing both in one batch is a draw.
pub fn evaluate_terminal(board: &Board) -> Option<Winner> {
    match (board.has_king(Color::White), board.has_king(Color::Black)) {
        (true, true) => None,
        (true, false) => Some(Winner::White),
        (false, true) => Some(Winner::Black),
        (false, false) => Some(Winner::Draw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_text::parse_placement;

    #[test]
    fn king_presence_decides_the_outcome() {
        let both = parse_placement("4k3/8/8/8/8/8/8/4K3").expect("layout");
        let white_only = parse_placement("8/8/8/8/8/8/8/4K3").expect("layout");
        let black_only = parse_placement("4k3/8/8/8/8/8/8/8").expect("layout");
        let neither = parse_placement("8/8/8/8/8/8/8/8").expect("layout");

        assert_eq!(evaluate_terminal(&both), None);
        assert_eq!(evaluate_terminal(&white_only), Some(Winner::White));
        assert_eq!(evaluate_terminal(&black_only), Some(Winner::Black));
        assert_eq!(evaluate_terminal(&neither), Some(Winner::Draw));
    }
}
