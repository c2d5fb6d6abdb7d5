//! Debounced value propagation.
//!
//! A single-input, single-output temporal filter: every push restarts the
//! delay timer, and the output observes the latest value only once the
//! delay elapses with no further pushes. Intermediate values are dropped,
//! never queued.

use std::time::Duration;

use tokio::select;
use tokio::sync::{mpsc, watch};
use tokio::time::sleep;

/// Delays propagation of a rapidly-changing input value.
///
/// Dropping the `Debouncer` cancels any pending timer; a value still
/// waiting out its delay at that point is discarded.
pub struct Debouncer<T> {
    input: mpsc::UnboundedSender<T>,
    output: watch::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> Debouncer<T> {
    /// Spawn a debouncer whose output starts at `initial`.
    pub fn new(initial: T, delay: Duration) -> Self {
        let (input, mut rx) = mpsc::unbounded_channel::<T>();
        let (tx, output) = watch::channel(initial);

        tokio::spawn(async move {
            while let Some(mut latest) = rx.recv().await {
                loop {
                    select! {
                        next = rx.recv() => match next {
                            // A newer value supersedes the pending one and
                            // restarts the timer
                            Some(value) => latest = value,
                            None => return,
                        },
                        _ = sleep(delay) => break,
                    }
                }
                if tx.send(latest).is_err() {
                    return;
                }
            }
        });

        Self { input, output }
    }

    /// Push a new input value, restarting the delay timer.
    pub fn push(&self, value: T) {
        let _ = self.input.send(value);
    }

    /// Watch side of the output. `changed().await` resolves each time a
    /// value settles.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.output.clone()
    }

    /// The most recently settled value.
    pub fn current(&self) -> T {
        self.output.borrow().clone()
    }
}
