mod lock;
mod overlay;
mod status;

pub use lock::BusyLock;
pub use overlay::Overlay;
pub use status::*;

use crate::api::{GameApi, MoveOutcome};
use lock::BusyGuard;
use crate::config::ClientConfig;
use common::board::Grid;
use common::model::{GameSnapshot, Winner};
use std::cell::RefCell;
use tracing::{debug, warn};

/// Everything the view needs to draw one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Screen {
    /// `None` until a snapshot has been fetched.
    pub grid: Option<Grid>,
    pub overlay: Overlay,
    pub status: Status,
}

#[derive(Clone, Copy, PartialEq)]
enum StatusPolicy {
    Derive,
    KeepNotice,
}

/// Keeps the screen in step with the server's snapshot and funnels every
/// move and reset through the busy lock.
pub struct BoardSync<A> {
    api: A,
    config: ClientConfig,
    lock: BusyLock,
    snapshot: RefCell<Option<GameSnapshot>>,
    screen: RefCell<Screen>,
    publish: Box<dyn Fn(&Screen)>,
}

impl<A: GameApi> BoardSync<A> {
    pub fn new(api: A, config: ClientConfig, publish: impl Fn(&Screen) + 'static) -> Self {
        BoardSync {
            api,
            config,
            lock: BusyLock::new(),
            snapshot: RefCell::new(None),
            screen: RefCell::new(Screen::default()),
            publish: Box::new(publish),
        }
    }

    #[cfg(test)]
    fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    fn phase(&self) -> lock::Phase {
        self.lock.phase()
    }

    pub fn is_busy(&self) -> bool {
        self.lock.is_busy()
    }

    #[cfg(test)]
    fn screen(&self) -> Screen {
        self.screen.borrow().clone()
    }

    #[cfg(test)]
    fn snapshot(&self) -> Option<GameSnapshot> {
        self.snapshot.borrow().clone()
    }

    /// First fetch after load. A failure leaves the board unrendered.
    pub async fn bootstrap(&self) {
        match self.api.state().await {
            Ok(snapshot) => self.show(snapshot, StatusPolicy::Derive),
            Err(err) => warn!(%err, "bootstrap failed, board left unrendered"),
        }
    }

    /// Re-fetches the authoritative snapshot. On failure the current board
    /// stays up, stale.
    pub async fn resync(&self) {
        match self.api.state().await {
            Ok(snapshot) => self.show(snapshot, StatusPolicy::KeepNotice),
            Err(err) => warn!(%err, "re-sync failed, board may be stale"),
        }
    }

    pub async fn play_move(&self, column: usize) {
        let needs_resync = {
            let _in_flight = match self.begin() {
                Some(in_flight) => in_flight,
                None => {
                    debug!(column, "busy, move ignored");
                    return;
                }
            };
            debug!(column, "playing move");

            // Inputs go dark before the request leaves.
            let overlay = self.overlay_for(&[], Winner::None);
            self.update(|screen| {
                screen.status = Status::progress(THINKING);
                screen.overlay = overlay;
            });

            match self.api.play(column).await {
                Ok(MoveOutcome::Accepted(snapshot)) => {
                    self.show(snapshot, StatusPolicy::Derive);
                    false
                }
                Ok(MoveOutcome::Rejected(reason)) => {
                    debug!(column, ?reason, "move rejected");
                    self.notify(reason.unwrap_or_else(|| INVALID_MOVE.to_string()));
                    true
                }
                Err(err) => {
                    warn!(%err, column, "move request failed");
                    self.notify(NETWORK_ERROR);
                    true
                }
            }
        };
        self.settle(needs_resync).await;
    }

    /// Unlike a move, the overlay stays as it is while the request runs and
    /// any response body is taken as the new board.
    pub async fn reset(&self) {
        let needs_resync = {
            let _in_flight = match self.begin() {
                Some(in_flight) => in_flight,
                None => {
                    debug!("busy, reset ignored");
                    return;
                }
            };
            debug!("resetting game");
            self.update(|screen| screen.status = Status::progress(RESETTING));

            match self.api.reset().await {
                Ok(snapshot) => {
                    self.show(snapshot, StatusPolicy::Derive);
                    false
                }
                Err(err) => {
                    warn!(%err, "reset request failed");
                    self.notify(NETWORK_ERROR);
                    true
                }
            }
        };
        self.settle(needs_resync).await;
    }

    fn begin(&self) -> Option<InFlight<'_, A>> {
        let guard = self.lock.try_acquire()?;
        Some(InFlight {
            sync: self,
            guard: Some(guard),
        })
    }

    // Runs with the lock already released and the inputs restored.
    async fn settle(&self, needs_resync: bool) {
        debug_assert!(!self.is_busy());
        if needs_resync {
            self.resync().await;
        }
        if self.config.resync_after_settle {
            self.resync().await;
        }
    }

    fn overlay_for(&self, valid_moves: &[usize], winner: Winner) -> Overlay {
        Overlay::compute(valid_moves, winner, self.is_busy())
    }

    fn refresh_overlay(&self) {
        let overlay = match &*self.snapshot.borrow() {
            Some(snapshot) => self.overlay_for(&snapshot.valid_moves, snapshot.winner),
            None => Overlay::default(),
        };
        self.update(|screen| screen.overlay = overlay);
    }

    fn show(&self, snapshot: GameSnapshot, policy: StatusPolicy) {
        let overlay = self.overlay_for(&snapshot.valid_moves, snapshot.winner);
        self.update(|screen| {
            screen.grid = Some(snapshot.grid);
            if policy == StatusPolicy::Derive || !screen.status.is_notice() {
                screen.status = Status::outcome(snapshot.winner);
            }
            screen.overlay = overlay;
        });
        *self.snapshot.borrow_mut() = Some(snapshot);
    }

    fn notify(&self, text: impl Into<String>) {
        let status = Status::notice(text);
        self.update(|screen| screen.status = status);
    }

    fn update(&self, change: impl FnOnce(&mut Screen)) {
        let screen = {
            let mut screen = self.screen.borrow_mut();
            change(&mut screen);
            screen.clone()
        };
        (self.publish)(&screen);
    }
}

/// Held while a move or reset is outstanding. However the request ends,
/// including the future being dropped, the lock is released and the inputs
/// are redrawn from the current snapshot.
struct InFlight<'a, A: GameApi> {
    sync: &'a BoardSync<A>,
    guard: Option<BusyGuard<'a>>,
}

impl<A: GameApi> Drop for InFlight<'_, A> {
    fn drop(&mut self) {
        drop(self.guard.take());
        // Publishing while unwinding could panic again on a held borrow.
        if !std::thread::panicking() {
            self.sync.refresh_overlay();
        }
    }
}
