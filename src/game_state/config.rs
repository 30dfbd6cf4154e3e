//! Engine tunables: energy economy, tick cadence, arrow speed and action costs.
//!
//! Options are set by name the way a UCI `setoption` would set them, either
//! from the line protocol or from `ARCHER_*` environment variables.

use std::time::Duration;

use crate::errors::GameError;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::PieceKind;

/// Energy price of each action kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionCosts {
    pub king: f64,
    pub queen: f64,
    pub rook: f64,
    pub bishop: f64,
    pub knight: f64,
    pub pawn: f64,
    pub shoot: f64,
    pub castle: f64,
}

impl Default for ActionCosts {
    fn default() -> Self {
        Self {
            king: KING_COST,
            queen: QUEEN_COST,
            rook: ROOK_COST,
            bishop: BISHOP_COST,
            knight: KNIGHT_COST,
            pawn: PAWN_COST,
            shoot: SHOOT_COST,
            castle: CASTLE_COST,
        }
    }
}

impl ActionCosts {
    #[inline]
    pub fn for_piece(&self, kind: PieceKind) -> f64 {
        match kind {
            PieceKind::King => self.king,
            PieceKind::Queen => self.queen,
            PieceKind::Rook => self.rook,
            PieceKind::Bishop => self.bishop,
            PieceKind::Knight => self.knight,
            PieceKind::Pawn => self.pawn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub energy_max: f64,
    pub energy_regen_per_sec: f64,
    pub tick_rate_hz: u32,
    pub arrow_speed: f64,
    pub costs: ActionCosts,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            energy_max: ENERGY_MAX,
            energy_regen_per_sec: ENERGY_REGEN_RATE,
            tick_rate_hz: TICK_RATE_HZ,
            arrow_speed: ARROW_SPEED,
            costs: ActionCosts::default(),
        }
    }
}

/// Option names accepted by `set_option`, in listing order.
pub const OPTION_NAMES: [&str; 12] = [
    "EnergyMax",
    "EnergyRegen",
    "TickRate",
    "ArrowSpeed",
    "KingCost",
    "QueenCost",
    "RookCost",
    "BishopCost",
    "KnightCost",
    "PawnCost",
    "ShootCost",
    "CastleCost",
];

impl EngineConfig {
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.tick_rate_hz.max(1)))
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), GameError> {
        let invalid = |reason: &'static str| GameError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
            reason,
        };
        let key = name.trim().to_ascii_lowercase();

        if key == "tickrate" {
            let hz: u32 = value.trim().parse().map_err(|_| invalid("expected an integer"))?;
            if !(1..=1000).contains(&hz) {
                return Err(invalid("tick rate must be within 1..=1000"));
            }
            self.tick_rate_hz = hz;
            return Ok(());
        }

        let number: f64 = value.trim().parse().map_err(|_| invalid("expected a number"))?;
        if !number.is_finite() || number < 0.0 {
            return Err(invalid("expected a finite non-negative number"));
        }

        match key.as_str() {
            "energymax" => {
                if number == 0.0 {
                    return Err(invalid("energy cap must be positive"));
                }
                self.energy_max = number;
            }
            "energyregen" => self.energy_regen_per_sec = number,
            "arrowspeed" => {
                if number == 0.0 {
                    return Err(invalid("arrow speed must be positive"));
                }
                self.arrow_speed = number;
            }
            "kingcost" => self.costs.king = number,
            "queencost" => self.costs.queen = number,
            "rookcost" => self.costs.rook = number,
            "bishopcost" => self.costs.bishop = number,
            "knightcost" => self.costs.knight = number,
            "pawncost" => self.costs.pawn = number,
            "shootcost" => self.costs.shoot = number,
            "castlecost" => self.costs.castle = number,
            _ => return Err(invalid("unknown option")),
        }
        Ok(())
    }

    /// Defaults overridden by `ARCHER_<OPTION>` variables, e.g. `ARCHER_TICK_RATE`.
    pub fn from_env() -> Result<Self, GameError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GameError> {
        let mut config = Self::default();
        for name in OPTION_NAMES {
            if let Some(value) = lookup(&env_key(name)) {
                config.set_option(name, &value)?;
            }
        }
        Ok(config)
    }
}

/// `EnergyRegen` -> `ARCHER_ENERGY_REGEN`.
fn env_key(option: &str) -> String {
    let mut key = String::from("ARCHER");
    for ch in option.chars() {
        if ch.is_ascii_uppercase() {
            key.push('_');
        }
        key.push(ch.to_ascii_uppercase());
    }
    key
}
