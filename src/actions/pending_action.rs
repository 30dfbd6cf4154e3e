//! Premove actions and their validation against a board snapshot.
//!
//! `ActionRequest` is what arrives from a player (wire field names follow the
//! browser client). `validate_request` is the only gate between a request and
//! the premove queue: it resolves the shooter's king, checks legality, and
//! prices the action.

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::config::ActionCosts;
use crate::move_generation::legal_move_checks::is_valid_move;
use crate::move_generation::legal_moves_castle::can_castle;
use crate::move_generation::legal_moves_shoot::can_shoot_target;

/// A validated action, tagged by kind. Serializes with the same flat
/// coordinate fields the client submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "ActionWire")]
pub enum Action {
    Move { from: Square, to: Square },
    Shoot { from: Square, target: Square },
    Castle { side: CastleSide },
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ActionWire {
    #[serde(rename_all = "camelCase")]
    Move {
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    },
    #[serde(rename_all = "camelCase")]
    Shoot {
        from_row: u8,
        from_col: u8,
        target_row: u8,
        target_col: u8,
    },
    Castle { side: CastleSide },
}

impl From<Action> for ActionWire {
    fn from(action: Action) -> Self {
        match action {
            Action::Move { from, to } => ActionWire::Move {
                from_row: from.row(),
                from_col: from.col(),
                to_row: to.row(),
                to_col: to.col(),
            },
            Action::Shoot { from, target } => ActionWire::Shoot {
                from_row: from.row(),
                from_col: from.col(),
                target_row: target.row(),
                target_col: target.col(),
            },
            Action::Castle { side } => ActionWire::Castle { side },
        }
    }
}

/// A queued action together with the cost fixed at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PendingAction {
    pub action: Action,
    pub cost: f64,
}

/// An action pulled from the queue for execution this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredAction {
    pub color: Color,
    pub action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionRequest {
    #[serde(rename_all = "camelCase")]
    Move {
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    },
    #[serde(rename_all = "camelCase")]
    Shoot { target_row: i32, target_col: i32 },
    Castle { side: CastleSide },
}

fn square_from(row: i32, col: i32) -> Result<Square, GameError> {
    Square::from_coords(row, col).ok_or(GameError::OutOfBounds(row, col))
}

pub fn validate_request(
    board: &Board,
    color: Color,
    request: ActionRequest,
    costs: &ActionCosts,
) -> Result<PendingAction, GameError> {
    match request {
        ActionRequest::Move {
            from_row,
            from_col,
            to_row,
            to_col,
        } => {
            let from = square_from(from_row, from_col)?;
            let to = square_from(to_row, to_col)?;
            let piece = board.piece_at(from).ok_or(GameError::EmptyOrigin(from))?;
            if piece.color != color {
                return Err(GameError::NotYourPiece {
                    square: from,
                    color,
                });
            }
            if !is_valid_move(board, from, to, piece) {
                return Err(GameError::IllegalMove { from, to });
            }
            Ok(PendingAction {
                action: Action::Move { from, to },
                cost: costs.for_piece(piece.kind),
            })
        }
        ActionRequest::Shoot {
            target_row,
            target_col,
        } => {
            let target = square_from(target_row, target_col)?;
            let from = board.find_king(color).ok_or(GameError::KingMissing(color))?;
            if !can_shoot_target(board, from, target, color) {
                return Err(GameError::IllegalShot { from, target });
            }
            Ok(PendingAction {
                action: Action::Shoot { from, target },
                cost: costs.shoot,
            })
        }
        ActionRequest::Castle { side } => {
            if !can_castle(board, color, side) {
                return Err(GameError::IllegalCastle { color, side });
            }
            Ok(PendingAction {
                action: Action::Castle { side },
                cost: costs.castle,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_text::parse_placement;

    fn costs() -> ActionCosts {
        ActionCosts::default()
    }

    #[test]
    fn pawn_push_is_priced_by_piece_kind() {
        let board = Board::starting_position();
        let request = ActionRequest::Move {
            from_row: 6,
            from_col: 4,
            to_row: 4,
            to_col: 4,
        };
        let pending = validate_request(&board, Color::White, request, &costs()).expect("legal");
        assert_eq!(
            pending.action,
            Action::Move {
                from: Square::new(6, 4),
                to: Square::new(4, 4)
            }
        );
        assert_eq!(pending.cost, 1.0);
    }

    #[test]
    fn rejects_foreign_empty_and_off_board_origins() {
        let board = Board::starting_position();
        let black_pawn = ActionRequest::Move {
            from_row: 1,
            from_col: 0,
            to_row: 2,
            to_col: 0,
        };
        assert!(matches!(
            validate_request(&board, Color::White, black_pawn, &costs()),
            Err(GameError::NotYourPiece { .. })
        ));

        let empty = ActionRequest::Move {
            from_row: 4,
            from_col: 4,
            to_row: 3,
            to_col: 4,
        };
        assert!(matches!(
            validate_request(&board, Color::White, empty, &costs()),
            Err(GameError::EmptyOrigin(_))
        ));

        let off_board = ActionRequest::Move {
            from_row: 6,
            from_col: 4,
            to_row: -1,
            to_col: 4,
        };
        assert_eq!(
            validate_request(&board, Color::White, off_board, &costs()),
            Err(GameError::OutOfBounds(-1, 4))
        );
    }

    #[test]
    fn shoot_uses_the_kings_square() {
        let board = parse_placement("4k3/8/8/8/1r6/8/8/4K3").expect("layout");
        let request = ActionRequest::Shoot {
            target_row: 4,
            target_col: 1,
        };
        let pending = validate_request(&board, Color::White, request, &costs()).expect("legal");
        assert_eq!(
            pending.action,
            Action::Shoot {
                from: Square::new(7, 4),
                target: Square::new(4, 1)
            }
        );
        assert_eq!(pending.cost, 2.0);
    }

    #[test]
    fn castle_request_checks_the_back_rank() {
        let board = Board::starting_position();
        let request = ActionRequest::Castle {
            side: CastleSide::Kingside,
        };
        assert!(matches!(
            validate_request(&board, Color::Black, request, &costs()),
            Err(GameError::IllegalCastle { .. })
        ));

        let open = parse_placement("r3k2r/8/8/8/8/8/8/R3K2R").expect("layout");
        let pending = validate_request(&open, Color::Black, request, &costs()).expect("legal");
        assert_eq!(pending.cost, 2.0);
    }

    #[test]
    fn requests_deserialize_from_client_json() {
        let mv: ActionRequest =
            serde_json::from_str(r#"{"type":"move","fromRow":6,"fromCol":4,"toRow":4,"toCol":4}"#)
                .expect("move json");
        assert_eq!(
            mv,
            ActionRequest::Move {
                from_row: 6,
                from_col: 4,
                to_row: 4,
                to_col: 4
            }
        );

        let castle: ActionRequest =
            serde_json::from_str(r#"{"type":"castle","side":"queenside"}"#).expect("castle json");
        assert_eq!(
            castle,
            ActionRequest::Castle {
                side: CastleSide::Queenside
            }
        );
    }
}
