use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Holds the most recent value until no new value has arrived for `delay`.
///
/// `settled` is cancel-safe: dropping it (e.g. when another `select!` branch
/// wins) keeps the pending value and its deadline.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replaces any pending value and restarts the idle timer
    pub fn push(&mut self, value: T) {
        self.pending = Some((value, Instant::now() + self.delay));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Resolves with the pending value once its idle timer expires.
    /// Never resolves while nothing is pending.
    pub async fn settled(&mut self) -> T {
        loop {
            match self.pending.take() {
                Some((value, deadline)) if deadline <= Instant::now() => return value,
                Some((value, deadline)) => {
                    self.pending = Some((value, deadline));
                    sleep_until(deadline).await;
                }
                None => std::future::pending::<()>().await,
            }
        }
    }
}
