//! One-shot reveal-on-scroll.
//!
//! Elements flagged `animate-on-scroll` are watched until they first cross
//! the visibility threshold. The crossing removes the watch, waits the
//! element's `data-delay` and marks it revealed. A revealed element is never
//! reverted, and a watch set only lives as long as the content it was built
//! from.

use std::collections::BTreeMap;
use std::time::Duration;

use parking_lot::Mutex;

use crate::markup::Document;
use crate::pause::Pause;
use crate::surface::Surface;

/// Class flagging an element for reveal-on-scroll.
pub const ANIMATE_CLASS: &str = "animate-on-scroll";

/// Class applied once an element is revealed.
pub const REVEALED_CLASS: &str = "visible";

/// An element waiting to be revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTarget {
    pub position: usize,
    pub delay: Duration,
}

/// Parse a `data-delay` value in milliseconds.
///
/// Leading whitespace and digits count, anything after is ignored
/// (`"200ms"` is 200). Missing, negative or non-numeric values are 0.
pub fn parse_delay(raw: Option<&str>) -> Duration {
    let Some(raw) = raw else {
        return Duration::ZERO;
    };
    let raw = raw.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits
        .parse::<u64>()
        .map(Duration::from_millis)
        .unwrap_or(Duration::ZERO)
}

/// All reveal targets of a fragment, in document order.
pub fn reveal_targets(doc: &Document) -> Vec<RevealTarget> {
    doc.with_class(ANIMATE_CLASS)
        .map(|el| RevealTarget {
            position: el.position,
            delay: parse_delay(el.data("delay")),
        })
        .collect()
}

/// A crossing that passed the threshold and awaits its delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReveal {
    pub target: RevealTarget,
    generation: u64,
}

#[derive(Debug, Default)]
struct Watches {
    generation: u64,
    targets: BTreeMap<usize, Duration>,
}

/// Tracks which elements of the current content are still watched.
#[derive(Debug)]
pub struct RevealTracker {
    threshold: f64,
    watches: Mutex<Watches>,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            watches: Mutex::new(Watches::default()),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Watch every target in `doc`, dropping watches from earlier content.
    /// Returns the number of elements watched.
    pub fn init<S: Surface + ?Sized>(&self, surface: &S, doc: &Document) -> usize {
        let targets = reveal_targets(doc);
        let positions: Vec<usize> = targets.iter().map(|t| t.position).collect();
        {
            let mut watches = self.watches.lock();
            watches.generation += 1;
            watches.targets = targets.iter().map(|t| (t.position, t.delay)).collect();
        }
        surface.watch_reveal(&positions);
        tracing::debug!(count = positions.len(), "Watching elements for reveal");
        positions.len()
    }

    /// Handle an intersection report.
    ///
    /// The first report for a watched element that is intersecting at or
    /// above the threshold ends its watch and yields a pending reveal. Any
    /// later report for the same element yields nothing.
    pub fn on_intersection<S: Surface + ?Sized>(
        &self,
        surface: &S,
        position: usize,
        ratio: f64,
        intersecting: bool,
    ) -> Option<PendingReveal> {
        if !intersecting || ratio < self.threshold {
            return None;
        }
        let pending = {
            let mut watches = self.watches.lock();
            let delay = watches.targets.remove(&position)?;
            PendingReveal {
                target: RevealTarget { position, delay },
                generation: watches.generation,
            }
        };
        surface.unwatch_reveal(position);
        Some(pending)
    }

    /// Wait out the element's delay and mark it revealed, unless the content
    /// it belonged to has been replaced in the meantime.
    pub async fn reveal<S, P>(&self, surface: &S, pause: &P, pending: PendingReveal) -> bool
    where
        S: Surface + ?Sized,
        P: Pause + ?Sized,
    {
        pause.pause(pending.target.delay).await;
        if self.watches.lock().generation != pending.generation {
            return false;
        }
        surface.mark_revealed(pending.target.position);
        true
    }

    /// Positions still waiting for their first crossing.
    pub fn watched(&self) -> Vec<usize> {
        self.watches.lock().targets.keys().copied().collect()
    }
}
