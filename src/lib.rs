//! Crate root module declarations for the Archer Chess server core.
//!
//! Archer Chess is real-time simultaneous chess: both players queue one
//! premove each, energy regenerates continuously, and every tick resolves the
//! affordable premoves together against one board snapshot. Kings can also
//! shoot arrows along open lines. This file exposes the game model, legality
//! checks, action resolution, the tick loop and the room store so the binary,
//! tests and benches share stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod config;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_castle;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod legal_moves_shoot;
}

pub mod actions {
    pub mod energy;
    pub mod pending_action;
    pub mod premove_queue;
}

pub mod resolution {
    pub mod action_resolver;
    pub mod arrows;
}

pub mod tick {
    pub mod terminal;
    pub mod tick_processor;
}

pub mod server {
    pub mod events;
    pub mod protocol;
    pub mod room_store;
    pub mod scheduler;
}

pub mod utils {
    pub mod board_text;
    pub mod render_board;
}
