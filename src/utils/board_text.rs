//! FEN-style placement strings for boards.
//!
//! Only the piece-placement field is used. Ranks are listed from row 0
//! (black's home) to row 7, uppercase letters are white, digits count empty
//! cells. Parsed pieces are unmoved and receive ids in reading order.

use crate::errors::GameError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub fn parse_placement(placement: &str) -> Result<Board, GameError> {
    let rows: Vec<&str> = placement.trim().split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(GameError::InvalidLayout(format!(
            "expected 8 ranks, found {}",
            rows.len()
        )));
    }

    let mut board = Board::empty();
    let mut next_id = 0u8;

    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(GameError::InvalidLayout(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let (color, kind) = piece_from_char(ch).ok_or_else(|| {
                GameError::InvalidLayout(format!("invalid piece character '{ch}'"))
            })?;
            if col >= BOARD_SIZE as usize {
                return Err(GameError::InvalidLayout(format!("rank {row} has too many files")));
            }

            board.set(
                Square::new(row as u8, col as u8),
                Some(Piece::new(kind, color, PieceId(next_id))),
            );
            next_id = next_id.wrapping_add(1);
            col += 1;
        }

        if col != BOARD_SIZE as usize {
            return Err(GameError::InvalidLayout(format!(
                "rank {row} does not sum to 8 files"
            )));
        }
    }

    Ok(board)
}

pub fn placement_string(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..BOARD_SIZE {
        let mut empty_run = 0u8;
        for col in 0..BOARD_SIZE {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row + 1 < BOARD_SIZE {
            out.push('/');
        }
    }

    out
}

fn piece_from_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}

fn piece_to_char(piece: Piece) -> char {
    let lower = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => lower.to_ascii_uppercase(),
        Color::Black => lower,
    }
}
