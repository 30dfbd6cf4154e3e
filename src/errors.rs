//! Errors used throughout the engine.
//!
//! `GameError` is the single error type across the crate. Functions return
//! `Result<_, GameError>` for every expected failure mode (illegal
//! submissions, full rooms, bad options, malformed protocol lines); callers at
//! the room-store boundary decide which of these are reported and which are
//! silently dropped.
//!
//! Corrupted boards (duplicate kings and similar) are programming defects and
//! have no variant here.

use thiserror::Error;

use crate::game_state::chess_types::{CastleSide, Color, Square};

/// Unified error type for the server core.
///
/// When matching on `GameError`:
/// - Room and seat variants (`RoomFull`, `UnknownRoom`, `SeatEmpty`) come
///   from the room store and are reported to the requesting connection.
/// - Submission variants (coordinates, ownership, legality, `KingMissing`)
///   reject a premove at validation time. The queue is left untouched and
///   the player may submit again.
/// - `GameOver` and `InsufficientEnergy` reflect timing rather than input and
///   are normally dropped without a reply.
/// - Option, command and layout variants come from the line protocol and
///   board text parsing. They are recoverable and safe to echo back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    /// A third player tried to join a room with both seats taken.
    #[error("room '{0}' already has two seated players")]
    RoomFull(String),

    /// A command named a room the store does not hold.
    #[error("unknown room '{0}'")]
    UnknownRoom(String),

    /// Payload: the raw (row, col) coordinates that were supplied.
    #[error("coordinates ({0}, {1}) are off the board")]
    OutOfBounds(i32, i32),

    /// The move origin is empty on the current board.
    #[error("no piece on {0}")]
    EmptyOrigin(Square),

    /// The move origin holds an opponent piece.
    #[error("piece on {square} does not belong to {color}")]
    NotYourPiece { square: Square, color: Color },

    /// The piece's movement rule or path forbids `from -> to`.
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    /// King or rook has moved, is missing, or the path is blocked.
    #[error("{color} cannot castle {side}")]
    IllegalCastle { color: Color, side: CastleSide },

    /// Target is not an enemy piece on an open line from the king.
    #[error("king on {from} cannot shoot {target}")]
    IllegalShot { from: Square, target: Square },

    /// A shot was requested but the color has no king to fire from.
    #[error("{0} has no king on the board")]
    KingMissing(Color),

    /// The room has reached a terminal state and accepts no actions.
    #[error("game is already over")]
    GameOver,

    /// A debit exceeded the color's current energy.
    ///
    /// Payload: the acting color, the cost, and the energy on hand.
    #[error("{color} cannot afford {cost} energy (has {available:.3})")]
    InsufficientEnergy {
        color: Color,
        cost: f64,
        available: f64,
    },

    /// The action names a color whose seat has no player.
    #[error("{0} seat is not occupied")]
    SeatEmpty(Color),

    /// `setoption` or an environment override named an unknown option or
    /// supplied a value that failed parsing or range checks.
    #[error("invalid value '{value}' for option '{name}': {reason}")]
    InvalidOption {
        name: String,
        value: String,
        reason: &'static str,
    },

    /// A protocol line could not be parsed. Payload: the offending text.
    #[error("malformed command: {0}")]
    MalformedCommand(String),

    /// A placement string was rejected. Payload: what was wrong with it.
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
}
