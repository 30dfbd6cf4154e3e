//! In-flight shots. Arrows have no board effect; a hit or miss is decided
//! when the shot resolves and the arrow only carries it to the client.

use serde::Serialize;

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "ArrowWire")]
pub struct Arrow {
    pub from: Square,
    pub to: Square,
    pub progress: f64,
    pub speed: f64,
    pub missed: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArrowWire {
    from_row: u8,
    from_col: u8,
    to_row: u8,
    to_col: u8,
    progress: f64,
    speed: f64,
    missed: bool,
}

impl From<Arrow> for ArrowWire {
    fn from(arrow: Arrow) -> Self {
        Self {
            from_row: arrow.from.row(),
            from_col: arrow.from.col(),
            to_row: arrow.to.row(),
            to_col: arrow.to.col(),
            progress: arrow.progress,
            speed: arrow.speed,
            missed: arrow.missed,
        }
    }
}

impl Arrow {
    #[inline]
    pub fn new(from: Square, to: Square, speed: f64, missed: bool) -> Self {
        Self {
            from,
            to,
            progress: 0.0,
            speed,
            missed,
        }
    }

    #[inline]
    pub fn travel_distance(&self) -> f64 {
        self.from.distance_to(self.to)
    }

    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.progress >= self.travel_distance()
    }

    #[inline]
    pub fn advance(&mut self, elapsed_secs: f64) {
        self.progress += self.speed * elapsed_secs.max(0.0);
    }
}

/// Move every arrow forward and drop the ones that reached their target.
pub fn advance_arrows(arrows: &mut Vec<Arrow>, elapsed_secs: f64) {
    arrows.retain_mut(|arrow| {
        arrow.advance(elapsed_secs);
        !arrow.has_arrived()
    });
}
