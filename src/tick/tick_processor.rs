//! One discrete time step of a running game.
//!
//! Order within a tick: regenerate energy, pull and debit affordable
//! premoves, resolve them as one batch against the pre-tick board, advance
//! arrows, then check for a finished game. Elapsed time is measured from the
//! previous tick, so a late tick regenerates proportionally more energy.

use std::time::Instant;

use tracing::{debug, trace};

use crate::actions::pending_action::ColoredAction;
use crate::game_state::game_state::Game;
use crate::resolution::action_resolver::{resolve_batch, Resolution};
use crate::resolution::arrows::advance_arrows;
use crate::tick::terminal::{evaluate_terminal, GameOverReason, Winner};

#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub elapsed_secs: f64,
    pub executed: Vec<ColoredAction>,
    pub resolution: Option<Resolution>,
    /// Set only on the tick that ended the game.
    pub finished: Option<Winner>,
}

/// Advance `game` to `now`. Returns `None` (and changes nothing) unless the
/// game is running.
pub fn process_tick(game: &mut Game, now: Instant) -> Option<TickReport> {
    if !game.is_running() {
        return None;
    }

    let previous = game.last_tick.unwrap_or(now);
    let elapsed_secs = now.saturating_duration_since(previous).as_secs_f64();
    game.last_tick = Some(now);
    game.ticks += 1;

    let config = *game.config();
    game.energy
        .regenerate(config.energy_regen_per_sec, config.energy_max, elapsed_secs);

    let executed = game.premoves.take_eligible(&mut game.energy);

    let resolution = if executed.is_empty() {
        None
    } else {
        let resolution = resolve_batch(&game.board, &executed, config.arrow_speed);
        debug!(
            tick = game.ticks,
            actions = executed.len(),
            captured = resolution.captured.len(),
            collisions = resolution.collisions.len(),
            arrows = resolution.arrows.len(),
            "batch resolved"
        );
        game.board = resolution.board;
        game.arrows.extend(resolution.arrows.iter().copied());
        Some(resolution)
    };

    advance_arrows(&mut game.arrows, elapsed_secs);

    let finished = evaluate_terminal(&game.board);
    if let Some(winner) = finished {
        game.finish(winner, GameOverReason::KingCaptured);
    }

    trace!(tick = game.ticks, elapsed_secs, "tick processed");

    Some(TickReport {
        elapsed_secs,
        executed,
        resolution,
        finished,
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::actions::pending_action::{Action, ActionRequest};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::game_state::config::EngineConfig;
    use crate::utils::board_text::parse_placement;

    fn running_game(board: Board) -> (Game, Instant) {
        let mut game = Game::with_board(EngineConfig::default(), board);
        let start = Instant::now();
        game.seat_player(start);
        game.seat_player(start);
        (game, start)
    }

    #[test]
    fn waiting_games_are_not_ticked() {
        let mut game = Game::new(EngineConfig::default());
        game.seat_player(Instant::now());
        assert!(process_tick(&mut game, Instant::now()).is_none());
        assert_eq!(game.ticks(), 0);
    }

    #[test]
    fn energy_regenerates_with_elapsed_time() {
        let (mut game, start) = running_game(Board::starting_position());
        let report = process_tick(&mut game, start + Duration::from_secs(2)).expect("running");
        assert_eq!(report.elapsed_secs, 2.0);
        assert_eq!(game.energy().get(Color::White), 1.0);

        process_tick(&mut game, start + Duration::from_secs(60)).expect("running");
        assert_eq!(game.energy().get(Color::Black), 5.0);
    }

    #[test]
    fn premove_waits_until_affordable() {
        let (mut game, start) = running_game(Board::starting_position());
        let request = ActionRequest::Move {
            from_row: 6,
            from_col: 4,
            to_row: 4,
            to_col: 4,
        };
        game.submit_premove(Color::White, request).expect("legal");

        let early = process_tick(&mut game, start + Duration::from_millis(1000)).expect("running");
        assert!(early.executed.is_empty());
        assert!(game.premoves().flags().white);

        let due = process_tick(&mut game, start + Duration::from_millis(2000)).expect("running");
        assert_eq!(due.executed.len(), 1);
        assert_eq!(game.energy().get(Color::White), 0.0);
        assert!(game.board().piece_at(Square::new(4, 4)).is_some());
        assert!(!game.premoves().flags().white);
    }

    #[test]
    fn arrows_fly_and_land() {
        let board = parse_placement("4k3/8/8/8/4r3/8/8/4K3").expect("layout");
        let (mut game, start) = running_game(board);
        game.set_energy(Color::White, 2.0);
        game.submit_premove(
            Color::White,
            ActionRequest::Shoot {
                target_row: 4,
                target_col: 4,
            },
        )
        .expect("legal");

        let report = process_tick(&mut game, start + Duration::from_millis(100)).expect("running");
        assert!(matches!(report.executed[0].action, Action::Shoot { .. }));
        assert!(game.board().is_empty(Square::new(4, 4)));
        assert_eq!(game.arrows().len(), 1);
        assert!((game.arrows()[0].progress - 0.5).abs() < 1e-9);

        process_tick(&mut game, start + Duration::from_millis(800)).expect("running");
        assert!(game.arrows().is_empty());
    }

    #[test]
    fn capturing_the_last_king_freezes_the_game() {
        let board = parse_placement("8/8/8/8/8/8/3k4/4K3").expect("layout");
        let (mut game, start) = running_game(board);
        game.set_energy(Color::White, 1.0);
        game.submit_premove(
            Color::White,
            ActionRequest::Move {
                from_row: 7,
                from_col: 4,
                to_row: 6,
                to_col: 3,
            },
        )
        .expect("legal");

        let report = process_tick(&mut game, start + Duration::from_millis(16)).expect("running");
        assert_eq!(report.finished, Some(Winner::White));
        assert!(game.is_terminal());
        assert_eq!(game.end_reason(), Some(GameOverReason::KingCaptured));

        let frozen = *game.board();
        assert!(process_tick(&mut game, start + Duration::from_secs(5)).is_none());
        assert_eq!(*game.board(), frozen);
    }

    #[test]
    fn kings_crashing_together_is_a_draw() {
        let board = parse_placement("8/8/8/3k4/8/4K3/8/8").expect("layout");
        let (mut game, start) = running_game(board);
        game.set_energy(Color::White, 1.0);
        game.set_energy(Color::Black, 1.0);
        let into_d4 = |from_row, from_col| ActionRequest::Move {
            from_row,
            from_col,
            to_row: 4,
            to_col: 3,
        };
        game.submit_premove(Color::White, into_d4(5, 4)).expect("legal");
        game.submit_premove(Color::Black, into_d4(3, 3)).expect("legal");

        let report = process_tick(&mut game, start + Duration::from_millis(16)).expect("running");
        assert_eq!(report.finished, Some(Winner::Draw));
        assert_eq!(game.winner(), Some(Winner::Draw));
    }
}
