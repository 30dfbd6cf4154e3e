//! Canonical rule constants for the energy variant.
//!
//! These are the defaults captured by `EngineConfig::default()`; rooms read
//! their values from the config they were created with.

/// Standard opening layout, listed from row 0 (black home) to row 7.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

pub const ENERGY_MAX: f64 = 5.0;
/// Energy gained per second of wall-clock time.
pub const ENERGY_REGEN_RATE: f64 = 0.5;

pub const TICK_RATE_HZ: u32 = 60;

/// Arrow flight speed in board squares per second.
pub const ARROW_SPEED: f64 = 5.0;

pub const KING_COST: f64 = 1.0;
pub const QUEEN_COST: f64 = 4.0;
pub const ROOK_COST: f64 = 3.0;
pub const BISHOP_COST: f64 = 2.0;
pub const KNIGHT_COST: f64 = 2.0;
pub const PAWN_COST: f64 = 1.0;
pub const SHOOT_COST: f64 = 2.0;
pub const CASTLE_COST: f64 = 2.0;

/// Column of both kings in the opening layout.
pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
