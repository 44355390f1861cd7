//! Suspension points standing in for CSS transitions.
//!
//! The shell never sleeps directly; it asks a [`Pause`] to wait for a
//! transition to finish. The desktop shell uses real timers, tests use
//! [`Immediate`] to skip the waits entirely.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

/// Waits for a visual transition of the given length to complete.
#[async_trait(?Send)]
pub trait Pause {
    async fn pause(&self, duration: Duration);
}

/// Real timer on the tokio clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPause;

#[async_trait(?Send)]
impl Pause for TokioPause {
    async fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Returns at once, remembering every requested duration.
#[derive(Debug, Default)]
pub struct Immediate {
    requested: Mutex<Vec<Duration>>,
}

impl Immediate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Durations requested so far, oldest first.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().clone()
    }
}

#[async_trait(?Send)]
impl Pause for Immediate {
    async fn pause(&self, duration: Duration) {
        self.requested.lock().push(duration);
    }
}
