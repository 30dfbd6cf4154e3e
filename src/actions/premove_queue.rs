//! One pending, pre-validated action per color.
//!
//! Submissions overwrite unconditionally; cancel is idempotent. Legality is
//! checked once, on submission, and never again before execution.

use serde::Serialize;

use crate::actions::energy::EnergyPool;
use crate::actions::pending_action::{validate_request, ActionRequest, ColoredAction, PendingAction};
use crate::errors::GameError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::config::ActionCosts;

/// Whether each color has something queued; never the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PendingFlags {
    pub white: bool,
    pub black: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PremoveQueue {
    slots: [Option<PendingAction>; 2],
}

impl PremoveQueue {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `request` against `board` and queue it, replacing any earlier
    /// premove for `color`. On error the queue is left untouched.
    pub fn submit(
        &mut self,
        board: &Board,
        color: Color,
        request: ActionRequest,
        costs: &ActionCosts,
    ) -> Result<PendingAction, GameError> {
        let pending = validate_request(board, color, request, costs)?;
        self.replace(color, pending);
        Ok(pending)
    }

    #[inline]
    pub fn replace(&mut self, color: Color, pending: PendingAction) -> Option<PendingAction> {
        self.slots[color.index()].replace(pending)
    }

    #[inline]
    pub fn cancel(&mut self, color: Color) -> Option<PendingAction> {
        self.slots[color.index()].take()
    }

    #[inline]
    pub fn pending(&self, color: Color) -> Option<&PendingAction> {
        self.slots[color.index()].as_ref()
    }

    pub fn flags(&self) -> PendingFlags {
        PendingFlags {
            white: self.slots[Color::White.index()].is_some(),
            black: self.slots[Color::Black.index()].is_some(),
        }
    }

    /// Pull every queued action its owner can afford, debiting the cost on
    /// the spot. Unaffordable actions stay queued. White is pulled first.
    pub fn take_eligible(&mut self, energy: &mut EnergyPool) -> Vec<ColoredAction> {
        let mut batch = Vec::with_capacity(2);

        for color in Color::ALL {
            let slot = &mut self.slots[color.index()];
            let Some(pending) = *slot else {
                continue;
            };
            if energy.debit(color, pending.cost).is_ok() {
                *slot = None;
                batch.push(ColoredAction {
                    color,
                    action: pending.action,
                });
            }
        }

        batch
    }
}
