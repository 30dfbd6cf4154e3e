use std::io;
use std::sync::{Arc, Mutex};

use archer_chess::game_state::config::EngineConfig;
use archer_chess::server::protocol::{run_stdio_loop, StdoutSink};
use archer_chess::server::room_store::RoomStore;
use archer_chess::server::scheduler::TickScheduler;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    // Logs go to stderr; stdout carries the protocol.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = EngineConfig::from_env().unwrap_or_else(|err| {
        error!(%err, "ignoring ARCHER_* overrides");
        EngineConfig::default()
    });
    info!(tick_rate_hz = config.tick_rate_hz, "archer chess server ready");

    let store = Arc::new(Mutex::new(RoomStore::new(config)));
    let mut scheduler =
        TickScheduler::spawn(Arc::clone(&store), config.tick_interval(), Box::new(StdoutSink));

    let result = run_stdio_loop(store);
    scheduler.stop();
    result
}
