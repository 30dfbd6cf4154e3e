//! Line-oriented stdin/stdout front-end.
//!
//! Commands arrive one per line; replies and broadcasts leave as JSON lines.
//! `show` is a diagnostic and prints the board as text.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use serde::Serialize;
use serde_json::json;
use tracing::warn;

use crate::actions::pending_action::ActionRequest;
use crate::errors::GameError;
use crate::game_state::chess_types::{CastleSide, Color};
use crate::server::events::{EventSink, Outbound, ServerEvent};
use crate::server::room_store::RoomStore;
use crate::server::scheduler::{lock_store, SharedStore};
use crate::utils::board_text::placement_string;
use crate::utils::render_board::render_board;

pub fn run_stdio_loop(store: SharedStore) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut protocol = LineProtocol::new(store);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = protocol.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

/// Serialize `value` and write it with its newline in one call, so lines
/// from the tick thread never interleave with replies.
pub fn write_json_line(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    let mut line = serde_json::to_string(value)?;
    line.push('\n');
    out.write_all(line.as_bytes())
}

/// Tick broadcasts to stdout.
pub struct StdoutSink;

impl EventSink for StdoutSink {
    fn deliver(&mut self, messages: Vec<Outbound>) {
        let mut stdout = io::stdout().lock();
        for message in &messages {
            if let Err(err) = write_json_line(&mut stdout, message) {
                warn!(%err, "failed to write broadcast");
                return;
            }
        }
        if let Err(err) = stdout.flush() {
            warn!(%err, "failed to flush broadcast");
        }
    }
}

pub struct LineProtocol {
    store: SharedStore,
}

impl LineProtocol {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Returns `true` on `quit`.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let (cmd, rest) = next_word(trimmed);
        let result = match cmd {
            "join" => self.handle_join(rest),
            "premove" => self.handle_premove(rest),
            "cancel" => self.handle_seat_command(rest, |store, room, color| {
                Ok(store.cancel_premove(room, color))
            }),
            "leave" => self.handle_seat_command(rest, |store, room, color| {
                store.on_seat_disconnect(room, color)
            }),
            "setoption" => self.handle_setoption(trimmed).map(|()| Vec::new()),
            "show" => return self.handle_show(rest, out).map(|()| false),
            "rooms" => {
                let ids = lock_store(&self.store).room_ids();
                write_json_line(out, &json!({ "rooms": ids }))?;
                return Ok(false);
            }
            "quit" => return Ok(true),
            _ => Err(GameError::MalformedCommand(format!("unknown command '{cmd}'"))),
        };

        match result {
            Ok(messages) => {
                for message in &messages {
                    write_json_line(out, message)?;
                }
            }
            Err(err) => {
                if matches!(err, GameError::MalformedCommand(_)) {
                    warn!(line = trimmed, %err, "rejected protocol line");
                }
                write_json_line(
                    out,
                    &ServerEvent::Error {
                        message: err.to_string(),
                    },
                )?;
            }
        }
        Ok(false)
    }

    fn handle_join(&mut self, rest: &str) -> Result<Vec<Outbound>, GameError> {
        let mut store = lock_store(&self.store);
        let room = match next_word(rest).0 {
            "" => store.random_room_id(),
            given => given.to_owned(),
        };
        store
            .create_or_join(&room, Instant::now())
            .map(|outcome| outcome.messages)
    }

    fn handle_premove(&mut self, rest: &str) -> Result<Vec<Outbound>, GameError> {
        let (room, rest) = next_word(rest);
        let (color, rest) = next_word(rest);
        let color = parse_color(color)?;
        let request = parse_action(rest)?;
        Ok(lock_store(&self.store).submit_premove(room, color, request))
    }

    fn handle_seat_command(
        &mut self,
        rest: &str,
        apply: impl FnOnce(&mut RoomStore, &str, Color) -> Result<Vec<Outbound>, GameError>,
    ) -> Result<Vec<Outbound>, GameError> {
        let (room, rest) = next_word(rest);
        if room.is_empty() {
            return Err(GameError::MalformedCommand("missing room".to_owned()));
        }
        let color = parse_color(next_word(rest).0)?;
        let mut store = lock_store(&self.store);
        apply(&mut *store, room, color)
    }

    /// `setoption name <N> value <V>`; names and values may contain spaces.
    fn handle_setoption(&mut self, line: &str) -> Result<(), GameError> {
        let mut name_tokens = Vec::new();
        let mut value_tokens = Vec::new();
        let mut mode = "";

        for tok in line.split_whitespace().skip(1) {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        if name_tokens.is_empty() {
            return Err(GameError::MalformedCommand(
                "setoption needs 'name <option> value <value>'".to_owned(),
            ));
        }
        let name = name_tokens.concat();
        let value = value_tokens.join(" ");
        lock_store(&self.store).set_option(&name, &value)
    }

    fn handle_show(&mut self, rest: &str, out: &mut impl Write) -> io::Result<()> {
        let room = next_word(rest).0;
        let store = lock_store(&self.store);
        let Some(game) = store.room(room) else {
            let message = GameError::UnknownRoom(room.to_owned()).to_string();
            return write_json_line(out, &ServerEvent::Error { message });
        };

        let energy = game.energy();
        let text = format!(
            "{}\nplacement {}\nphase {:?} ticks {} energy white {:.2} black {:.2} arrows {}\n",
            render_board(game.board()),
            placement_string(game.board()),
            game.phase(),
            game.ticks(),
            energy.get(Color::White),
            energy.get(Color::Black),
            game.arrows().len(),
        );
        out.write_all(text.as_bytes())
    }
}

fn next_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn parse_color(token: &str) -> Result<Color, GameError> {
    Color::parse(token)
        .ok_or_else(|| GameError::MalformedCommand(format!("expected white|black, got '{token}'")))
}

fn parse_coords<const N: usize>(rest: &str) -> Result<[i32; N], GameError> {
    let values: Vec<i32> = rest
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| GameError::MalformedCommand(format!("bad coordinates '{rest}'")))?;
    values
        .try_into()
        .map_err(|_| GameError::MalformedCommand(format!("expected {N} coordinates, got '{rest}'")))
}

/// `move r c r c`, `shoot r c`, `castle <side>`, or the client's JSON form.
fn parse_action(rest: &str) -> Result<ActionRequest, GameError> {
    if rest.starts_with('{') {
        return serde_json::from_str(rest)
            .map_err(|err| GameError::MalformedCommand(format!("bad action json: {err}")));
    }

    let (kind, args) = next_word(rest);
    match kind {
        "move" => {
            let [from_row, from_col, to_row, to_col] = parse_coords(args)?;
            Ok(ActionRequest::Move {
                from_row,
                from_col,
                to_row,
                to_col,
            })
        }
        "shoot" => {
            let [target_row, target_col] = parse_coords(args)?;
            Ok(ActionRequest::Shoot {
                target_row,
                target_col,
            })
        }
        "castle" => {
            let side = CastleSide::parse(args.trim()).ok_or_else(|| {
                GameError::MalformedCommand(format!("expected kingside|queenside, got '{args}'"))
            })?;
            Ok(ActionRequest::Castle { side })
        }
        _ => Err(GameError::MalformedCommand(format!("unknown action '{kind}'"))),
    }
}
