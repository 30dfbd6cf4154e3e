//! Simultaneous resolution of one tick's batch of actions.
//!
//! Every decision reads the pre-batch snapshot, never an intermediate board.
//! The output board is built in four passes:
//!
//! 1. castles relocate king and rook unconditionally;
//! 2. moves and shots queue removals and additions (collisions, captures,
//!    hits and misses are decided here);
//! 3. all removals are applied, then all additions;
//! 4. pawns resting on the opponent's home row become queens.
//!
//! Because removals land before additions, a cell vacated by one mover and
//! entered by another ends up holding the entering piece. A shot aimed at a
//! piece that leaves its cell this batch misses, whether it moved or castled.

use std::collections::{BTreeMap, BTreeSet};

use crate::actions::pending_action::{Action, ColoredAction};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_castle::castle_cells;
use crate::resolution::arrows::Arrow;

/// Result of resolving one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub board: Board,
    /// Arrows spawned by this batch, one per shot.
    pub arrows: Vec<Arrow>,
    /// Pieces removed from the snapshot that do not reappear elsewhere.
    pub captured: Vec<(Square, Piece)>,
    /// Destinations where two or more movers crashed.
    pub collisions: Vec<Square>,
    pub promotions: Vec<Square>,
}

#[derive(Debug, Clone, Copy)]
struct Mover {
    from: Square,
    to: Square,
    piece: Piece,
}

pub fn resolve_batch(snapshot: &Board, batch: &[ColoredAction], arrow_speed: f64) -> Resolution {
    let mut next = *snapshot;

    // Home cells emptied by castling; a shot at one of them finds nothing.
    let mut castled_from: BTreeSet<Square> = BTreeSet::new();
    for entry in batch {
        if let Action::Castle { side } = entry.action {
            castled_from.extend(apply_castle(snapshot, &mut next, entry.color, side));
        }
    }

    // A move whose origin no longer holds one of the mover's own pieces (it
    // was captured after submission) has nothing left to execute.
    let movers: Vec<Mover> = batch
        .iter()
        .filter_map(|entry| match entry.action {
            Action::Move { from, to } => snapshot
                .piece_at(from)
                .filter(|piece| piece.color == entry.color)
                .map(|piece| Mover { from, to, piece }),
            _ => None,
        })
        .collect();

    let moving_from: BTreeSet<Square> = movers.iter().map(|m| m.from).collect();
    let mut arrivals: BTreeMap<Square, usize> = BTreeMap::new();
    for mover in &movers {
        *arrivals.entry(mover.to).or_default() += 1;
    }

    let mut removals: Vec<Square> = Vec::new();
    let mut additions: Vec<(Square, Piece)> = Vec::new();
    let mut collisions: Vec<Square> = Vec::new();

    for mover in &movers {
        if arrivals.get(&mover.to).copied().unwrap_or(0) > 1 {
            removals.push(mover.from);
            if !collisions.contains(&mover.to) {
                collisions.push(mover.to);
            }
            continue;
        }

        let target_moving_away = moving_from.contains(&mover.to);
        if !snapshot.is_empty(mover.to) && !target_moving_away {
            removals.push(mover.to);
        }
        removals.push(mover.from);
        additions.push((mover.to, mover.piece.moved()));
    }

    let mut arrows = Vec::new();
    for entry in batch {
        let Action::Shoot { from, target } = entry.action else {
            continue;
        };
        let hit = !snapshot.is_empty(target)
            && !moving_from.contains(&target)
            && !castled_from.contains(&target);
        if hit {
            removals.push(target);
        }
        arrows.push(Arrow::new(from, target, arrow_speed, !hit));
    }

    for square in &removals {
        next.remove(*square);
    }
    for (square, piece) in &additions {
        next.set(*square, Some(*piece));
    }

    let promotions = promote_pawns(&mut next);
    let captured = vanished_pieces(snapshot, &next);

    Resolution {
        board: next,
        arrows,
        captured,
        collisions,
        promotions,
    }
}

/// Returns the home cells the castle emptied.
fn apply_castle(snapshot: &Board, next: &mut Board, color: Color, side: CastleSide) -> Vec<Square> {
    let cells = castle_cells(color, side);

    // Stale castles relocate whichever of the two pieces is still home.
    let king = snapshot
        .piece_at(cells.king_from)
        .filter(|p| p.is(PieceKind::King, color));
    let rook = snapshot
        .piece_at(cells.rook_from)
        .filter(|p| p.is(PieceKind::Rook, color));

    let mut vacated = Vec::with_capacity(2);
    if king.is_some() {
        next.remove(cells.king_from);
        vacated.push(cells.king_from);
    }
    if rook.is_some() {
        next.remove(cells.rook_from);
        vacated.push(cells.rook_from);
    }
    if let Some(king) = king {
        next.set(cells.king_to, Some(king.moved()));
    }
    if let Some(rook) = rook {
        next.set(cells.rook_to, Some(rook.moved()));
    }
    vacated
}

fn promote_pawns(board: &mut Board) -> Vec<Square> {
    let promotable: Vec<(Square, Piece)> = board
        .pieces()
        .filter(|(sq, p)| p.kind == PieceKind::Pawn && sq.row() == p.color.promotion_row())
        .collect();

    for (square, pawn) in &promotable {
        board.set(*square, Some(pawn.promoted_to(PieceKind::Queen)));
    }
    promotable.into_iter().map(|(sq, _)| sq).collect()
}

fn vanished_pieces(before: &Board, after: &Board) -> Vec<(Square, Piece)> {
    let survivors: BTreeSet<PieceId> = after.pieces().map(|(_, p)| p.id).collect();
    before
        .pieces()
        .filter(|(_, p)| !survivors.contains(&p.id))
        .collect()
}
