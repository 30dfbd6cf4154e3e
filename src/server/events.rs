//! Messages the core hands to the transport, already addressed.
//!
//! Field names follow the browser client's wire format.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::actions::energy::EnergyPool;
use crate::actions::pending_action::Action;
use crate::actions::premove_queue::PendingFlags;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::Game;
use crate::resolution::arrows::Arrow;
use crate::tick::terminal::{GameOverReason, Winner};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ServerEvent {
    #[serde(rename_all = "camelCase")]
    Joined {
        #[serde(rename = "gameId")]
        room: String,
        color: Color,
        board: Board,
        energy: EnergyPool,
    },
    Error {
        message: String,
    },
    #[serde(rename_all = "camelCase")]
    GameStart {
        board: Board,
        started_at: Option<DateTime<Utc>>,
    },
    PremoveSet {
        #[serde(flatten)]
        action: Action,
        cost: f64,
    },
    PremoveCancelled,
    GameState {
        board: Board,
        energy: EnergyPool,
        #[serde(rename = "premoves")]
        pending: PendingFlags,
        arrows: Vec<Arrow>,
        #[serde(rename = "gameOver")]
        terminal: bool,
        winner: Option<Winner>,
    },
    GameOver {
        winner: Winner,
        reason: GameOverReason,
    },
}

impl ServerEvent {
    /// The per-tick broadcast. Pending flags reveal only whether a premove
    /// is queued.
    pub fn game_state(game: &Game) -> Self {
        ServerEvent::GameState {
            board: *game.board(),
            energy: *game.energy(),
            pending: game.premoves().flags(),
            arrows: game.arrows().to_vec(),
            terminal: game.is_terminal(),
            winner: game.winner(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::Joined { .. } => "joined",
            ServerEvent::Error { .. } => "error",
            ServerEvent::GameStart { .. } => "gameStart",
            ServerEvent::PremoveSet { .. } => "premoveSet",
            ServerEvent::PremoveCancelled => "premoveCancelled",
            ServerEvent::GameState { .. } => "gameState",
            ServerEvent::GameOver { .. } => "gameOver",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "to", content = "color", rename_all = "lowercase")]
pub enum Audience {
    /// Only the player in this seat.
    Seat(Color),
    /// Every seat in the room.
    Room,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outbound {
    pub room: String,
    pub audience: Audience,
    pub event: ServerEvent,
}

impl Outbound {
    pub fn to_seat(room: &str, color: Color, event: ServerEvent) -> Self {
        Self {
            room: room.to_owned(),
            audience: Audience::Seat(color),
            event,
        }
    }

    pub fn to_room(room: &str, event: ServerEvent) -> Self {
        Self {
            room: room.to_owned(),
            audience: Audience::Room,
            event,
        }
    }
}

/// Implemented by whatever owns the client connections.
pub trait EventSink: Send {
    fn deliver(&mut self, messages: Vec<Outbound>);
}
