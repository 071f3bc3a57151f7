//! Periodic live refresh — one poller primitive shared by every live-data
//! consumer instead of per-hook timer plumbing. A poller re-sends its
//! request template on a fixed interval while the observed game status is
//! live, and stops cleanly the moment the game leaves the live set or
//! either end of its channels goes away.

use leagues_api::GameStatus;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::interval;

/// Possession/clock refresh cadence while a game is live.
pub const SITUATION_POLL_INTERVAL: Duration = Duration::from_secs(15);
/// Broadcast-list refresh cadence while a game is live.
pub const BROADCAST_POLL_INTERVAL: Duration = Duration::from_secs(30);

pub struct LivePoller<R> {
    period: Duration,
    status: watch::Receiver<GameStatus>,
    requests: mpsc::Sender<R>,
    request: R,
}

impl<R: Clone + Send + 'static> LivePoller<R> {
    pub fn new(
        period: Duration,
        status: watch::Receiver<GameStatus>,
        requests: mpsc::Sender<R>,
        request: R,
    ) -> Self {
        Self { period, status, requests, request }
    }

    pub async fn run(mut self) {
        let mut ticker = interval(self.period);
        // Skip the immediate first tick so the startup load isn't
        // double-triggered.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if !self.status.borrow().is_live() {
                        break;
                    }
                    // Ticks are not queued behind slow fetches: the send
                    // hands the request off and the next tick stays on
                    // schedule.
                    if self.requests.send(self.request.clone()).await.is_err() {
                        break;
                    }
                }
                changed = self.status.changed() => {
                    match changed {
                        Ok(()) => {
                            if !self.status.borrow_and_update().is_live() {
                                break;
                            }
                        }
                        // Status source dropped — the game left the feed.
                        Err(_) => break,
                    }
                }
            }
        }
    }
}
