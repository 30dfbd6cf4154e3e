//! Registry of live rooms, owned by the transport.
//!
//! Every operation returns addressed [`Outbound`] messages instead of doing
//! I/O. Rooms share nothing, so a tick fans out across them with rayon.

use std::collections::HashMap;
use std::time::Instant;

use rand::{rng, Rng};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::actions::pending_action::ActionRequest;
use crate::errors::GameError;
use crate::game_state::chess_types::Color;
use crate::game_state::config::EngineConfig;
use crate::game_state::game_state::Game;
use crate::server::events::{Outbound, ServerEvent};
use crate::tick::terminal::GameOverReason;
use crate::tick::tick_processor::{process_tick, TickReport};

const ROOM_ID_ALPHABET: &[u8] = b"abcdefghijkmnpqrstuvwxyz23456789";
const ROOM_ID_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct JoinOutcome {
    pub color: Color,
    pub messages: Vec<Outbound>,
}

#[derive(Debug, Default)]
pub struct RoomStore {
    rooms: HashMap<String, Game>,
    config: EngineConfig,
}

impl RoomStore {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            rooms: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Applies to rooms created after the change.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), GameError> {
        self.config.set_option(name, value)?;
        info!(option = name, value, "engine option updated");
        Ok(())
    }

    pub fn room(&self, room: &str) -> Option<&Game> {
        self.rooms.get(room)
    }

    pub fn room_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.rooms.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// A fresh id not used by any live room.
    pub fn random_room_id(&self) -> String {
        let mut rng = rng();
        loop {
            let id = random_id(&mut rng);
            if !self.rooms.contains_key(&id) {
                return id;
            }
        }
    }

    /// Seat a player, creating the room on first join. The joiner gets
    /// `joined`; filling the second seat also broadcasts `gameStart`.
    pub fn create_or_join(&mut self, room: &str, now: Instant) -> Result<JoinOutcome, GameError> {
        let config = self.config;
        let game = self.rooms.entry(room.to_owned()).or_insert_with(|| {
            info!(room, "room created");
            Game::new(config)
        });

        let seat = game
            .seat_player(now)
            .ok_or_else(|| GameError::RoomFull(room.to_owned()))?;
        info!(room, color = %seat.color, "player seated");

        let mut messages = vec![Outbound::to_seat(
            room,
            seat.color,
            ServerEvent::Joined {
                room: room.to_owned(),
                color: seat.color,
                board: *game.board(),
                energy: *game.energy(),
            },
        )];
        if seat.started {
            messages.push(Outbound::to_room(
                room,
                ServerEvent::GameStart {
                    board: *game.board(),
                    started_at: game.started_at(),
                },
            ));
        }

        Ok(JoinOutcome {
            color: seat.color,
            messages,
        })
    }

    /// Illegal or unaffordable-looking submissions are dropped without a
    /// reply.
    pub fn submit_premove(
        &mut self,
        room: &str,
        color: Color,
        request: ActionRequest,
    ) -> Vec<Outbound> {
        let Some(game) = self.rooms.get_mut(room) else {
            debug!(room, "premove for unknown room ignored");
            return Vec::new();
        };
        match game.submit_premove(color, request) {
            Ok(pending) => vec![Outbound::to_seat(
                room,
                color,
                ServerEvent::PremoveSet {
                    action: pending.action,
                    cost: pending.cost,
                },
            )],
            Err(err) => {
                debug!(room, %color, %err, "premove rejected");
                Vec::new()
            }
        }
    }

    /// Replies `premoveCancelled` whenever the seat is taken, queued or not.
    pub fn cancel_premove(&mut self, room: &str, color: Color) -> Vec<Outbound> {
        let Some(game) = self.rooms.get_mut(room) else {
            return Vec::new();
        };
        match game.cancel_premove(color) {
            Ok(_) => vec![Outbound::to_seat(room, color, ServerEvent::PremoveCancelled)],
            Err(err) => {
                debug!(room, %color, %err, "cancel ignored");
                Vec::new()
            }
        }
    }

    /// Free a seat outside the tick cadence. A running game is forfeited to
    /// the other color; the room is dropped once both seats are empty.
    pub fn on_seat_disconnect(
        &mut self,
        room: &str,
        color: Color,
    ) -> Result<Vec<Outbound>, GameError> {
        let game = self
            .rooms
            .get_mut(room)
            .ok_or_else(|| GameError::UnknownRoom(room.to_owned()))?;

        let mut messages = Vec::new();
        if let Some(winner) = game.vacate_seat(color)? {
            messages.push(Outbound::to_room(
                room,
                ServerEvent::GameOver {
                    winner,
                    reason: GameOverReason::Disconnect,
                },
            ));
        }

        if game.seats_empty() {
            self.rooms.remove(room);
            info!(room, "room closed");
        }
        Ok(messages)
    }

    /// Tick every running room and collect one `gameState` per ticked room,
    /// followed by `gameOver` for rooms that ended on this tick.
    pub fn tick_all(&mut self, now: Instant) -> Vec<Outbound> {
        self.rooms
            .par_iter_mut()
            .filter_map(|(room, game)| {
                let report = process_tick(game, now)?;
                Some(tick_messages(room, game, &report))
            })
            .flatten()
            .collect()
    }
}

fn tick_messages(room: &str, game: &Game, report: &TickReport) -> Vec<Outbound> {
    let mut messages = vec![Outbound::to_room(room, ServerEvent::game_state(game))];
    if let (Some(winner), Some(reason)) = (report.finished, game.end_reason()) {
        messages.push(Outbound::to_room(room, ServerEvent::GameOver { winner, reason }));
    }
    messages
}

fn random_id(rng: &mut impl Rng) -> String {
    (0..ROOM_ID_LEN)
        .map(|_| ROOM_ID_ALPHABET[rng.random_range(0..ROOM_ID_ALPHABET.len())] as char)
        .collect()
}
