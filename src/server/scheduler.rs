//! Fixed-interval driver that ticks every room on a background thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::server::events::EventSink;
use crate::server::room_store::RoomStore;

pub type SharedStore = Arc<Mutex<RoomStore>>;

/// Lock the store, recovering from a panic on another thread. A tick is
/// applied to each room as a whole, so the data is still consistent.
pub fn lock_store(store: &SharedStore) -> MutexGuard<'_, RoomStore> {
    store.lock().unwrap_or_else(|poisoned| {
        warn!("room store lock was poisoned; recovering");
        poisoned.into_inner()
    })
}

pub struct TickScheduler {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl TickScheduler {
    /// Start ticking `store` every `interval`, handing each batch of
    /// messages to `sink` outside the store lock.
    pub fn spawn(store: SharedStore, interval: Duration, mut sink: Box<dyn EventSink>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            info!(interval_ms = interval.as_secs_f64() * 1000.0, "tick scheduler started");
            let mut next = Instant::now() + interval;
            while !stop_flag.load(Ordering::Relaxed) {
                let now = Instant::now();
                if now < next {
                    thread::sleep(next - now);
                    continue;
                }
                // Skip ahead instead of bursting after a stall.
                next += interval;
                if next < now {
                    next = now + interval;
                }

                let messages = lock_store(&store).tick_all(Instant::now());
                if !messages.is_empty() {
                    sink.deliver(messages);
                }
            }
            info!("tick scheduler stopped");
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("tick scheduler thread panicked");
            }
        }
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{channel, Sender};

    use super::*;
    use crate::game_state::config::EngineConfig;
    use crate::server::events::Outbound;

    struct ChannelSink(Sender<Vec<Outbound>>);

    impl EventSink for ChannelSink {
        fn deliver(&mut self, messages: Vec<Outbound>) {
            let _ = self.0.send(messages);
        }
    }

    #[test]
    fn scheduler_ticks_running_rooms_until_stopped() {
        let store: SharedStore = Arc::new(Mutex::new(RoomStore::new(EngineConfig::default())));
        {
            let mut guard = lock_store(&store);
            guard.create_or_join("r1", Instant::now()).expect("white");
            guard.create_or_join("r1", Instant::now()).expect("black");
        }

        let (tx, rx) = channel();
        let mut scheduler =
            TickScheduler::spawn(Arc::clone(&store), Duration::from_millis(5), Box::new(ChannelSink(tx)));
        assert!(scheduler.is_running());

        let batch = rx.recv_timeout(Duration::from_secs(2)).expect("a tick broadcast");
        assert_eq!(batch[0].event.name(), "gameState");

        scheduler.stop();
        assert!(!scheduler.is_running());
        assert!(lock_store(&store).room("r1").is_some_and(|g| g.ticks() > 0));
    }
}
