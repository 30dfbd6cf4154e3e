//! Per-room authoritative game state.
//!
//! `Game` aggregates the board, both energy pools, the premove queue, arrows
//! in flight, seat occupancy and the lifecycle phase. Only the tick processor
//! mutates board, energy and arrows; player input touches the premove queue
//! and seats.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::actions::energy::EnergyPool;
use crate::actions::pending_action::{ActionRequest, PendingAction};
use crate::actions::premove_queue::PremoveQueue;
use crate::errors::GameError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::config::EngineConfig;
use crate::resolution::arrows::Arrow;
use crate::tick::terminal::{GameOverReason, Winner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// At most one seat filled.
    Waiting,
    Running,
    /// Frozen; never ticked again.
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatAssignment {
    pub color: Color,
    /// The join filled the second seat and started the game.
    pub started: bool,
}

#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) energy: EnergyPool,
    pub(crate) premoves: PremoveQueue,
    pub(crate) arrows: Vec<Arrow>,
    pub(crate) phase: GamePhase,
    pub(crate) winner: Option<Winner>,
    pub(crate) end_reason: Option<GameOverReason>,
    pub(crate) last_tick: Option<Instant>,
    pub(crate) ticks: u64,
    seats: [bool; 2],
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    config: EngineConfig,
}

impl Game {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_board(config, Board::starting_position())
    }

    /// A waiting game on a custom board.
    pub fn with_board(config: EngineConfig, board: Board) -> Self {
        Self {
            board,
            energy: EnergyPool::new(),
            premoves: PremoveQueue::new(),
            arrows: Vec::new(),
            phase: GamePhase::Waiting,
            winner: None,
            end_reason: None,
            last_tick: None,
            ticks: 0,
            seats: [false; 2],
            started_at: None,
            ended_at: None,
            config,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn energy(&self) -> &EnergyPool {
        &self.energy
    }

    #[inline]
    pub fn premoves(&self) -> &PremoveQueue {
        &self.premoves
    }

    #[inline]
    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.phase == GamePhase::Terminal
    }

    #[inline]
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    #[inline]
    pub fn end_reason(&self) -> Option<GameOverReason> {
        self.end_reason
    }

    #[inline]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[inline]
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn is_seated(&self, color: Color) -> bool {
        self.seats[color.index()]
    }

    #[inline]
    pub fn seats_empty(&self) -> bool {
        !self.seats.iter().any(|seated| *seated)
    }

    /// Clamped to `[0, energy_max]`.
    pub fn set_energy(&mut self, color: Color, value: f64) {
        self.energy.set(color, value, self.config.energy_max);
    }

    /// Seat the next player, white first. Filling the second seat of a
    /// waiting game starts it and captures `now` as the tick baseline.
    /// `None` when both seats are taken.
    pub fn seat_player(&mut self, now: Instant) -> Option<SeatAssignment> {
        let color = Color::ALL.into_iter().find(|c| !self.is_seated(*c))?;
        self.seats[color.index()] = true;

        let started = self.phase == GamePhase::Waiting && self.seats.iter().all(|s| *s);
        if started {
            self.phase = GamePhase::Running;
            self.last_tick = Some(now);
            self.started_at = Some(Utc::now());
            info!(target: "archer_chess::game", "both seats filled, game running");
        }

        Some(SeatAssignment { color, started })
    }

    /// Free a seat. Leaving a running game forfeits it to the other color;
    /// the returned winner is `Some` only when this call ended the game.
    pub fn vacate_seat(&mut self, color: Color) -> Result<Option<Winner>, GameError> {
        if !self.is_seated(color) {
            return Err(GameError::SeatEmpty(color));
        }
        self.seats[color.index()] = false;

        if self.phase == GamePhase::Running {
            let winner = Winner::from(color.opposite());
            self.finish(winner, GameOverReason::Disconnect);
            return Ok(Some(winner));
        }
        Ok(None)
    }

    pub fn submit_premove(
        &mut self,
        color: Color,
        request: ActionRequest,
    ) -> Result<PendingAction, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !self.is_seated(color) {
            return Err(GameError::SeatEmpty(color));
        }
        let pending = self
            .premoves
            .submit(&self.board, color, request, &self.config.costs)?;
        debug!(%color, action = ?pending.action, cost = pending.cost, "premove queued");
        Ok(pending)
    }

    pub fn cancel_premove(&mut self, color: Color) -> Result<Option<PendingAction>, GameError> {
        if !self.is_seated(color) {
            return Err(GameError::SeatEmpty(color));
        }
        Ok(self.premoves.cancel(color))
    }

    pub(crate) fn finish(&mut self, winner: Winner, reason: GameOverReason) {
        if self.is_terminal() {
            return;
        }
        self.phase = GamePhase::Terminal;
        self.winner = Some(winner);
        self.end_reason = Some(reason);
        self.ended_at = Some(Utc::now());
        info!(target: "archer_chess::game", ?winner, ?reason, "game over");
    }
}
