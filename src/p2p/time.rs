//! Network-adjusted time
//!
//! Peers report their clocks during the handshake; the median of their
//! offsets from the local clock becomes the node's time offset as long as it
//! stays within `MAX_ADJUSTMENT_SECS`. One `TimeConsensus` is built at
//! startup and shared (e.g. behind an `Arc`) with whatever needs adjusted time.

use log::{info, warn};
use std::sync::{Mutex, MutexGuard};
use crate::constants::{
    MAX_ADJUSTMENT_SECS, MIN_TIME_SAMPLES, PEER_AGREEMENT_SECS,
};
use super::MedianFilter;

/// Source of wall-clock seconds since the Unix epoch
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

/// The system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// What a new sample did to the offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// Fewer than `MIN_TIME_SAMPLES` samples, or an even count
    Pending,
    /// Median accepted as the new offset
    Adopted(i64),
    /// Median too far off; offset reset to zero. `clock_warning` is set
    /// when no peer is within `PEER_AGREEMENT_SECS` of the local clock.
    Distrusted { clock_warning: bool },
}

#[derive(Debug)]
struct State {
    filter: MedianFilter<i64>,
    offset: i64,
    clock_warning: bool,
}

/// Peer clock consensus
#[derive(Debug)]
pub struct TimeConsensus<C: Clock = SystemClock> {
    clock: C,
    state: Mutex<State>,
}

impl TimeConsensus<SystemClock> {
    pub fn new(window: usize) -> Self {
        Self::with_clock(window, SystemClock)
    }
}

impl Default for TimeConsensus<SystemClock> {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_MEDIAN_WINDOW)
    }
}

impl<C: Clock> TimeConsensus<C> {
    /// Seeded with a zero offset sample
    pub fn with_clock(window: usize, clock: C) -> Self {
        Self {
            clock,
            state: Mutex::new(State {
                filter: MedianFilter::new(window, 0),
                offset: 0,
                clock_warning: false,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // the state stays consistent even if a holder panicked
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record a peer's reported time
    pub fn add_sample(&self, peer_timestamp: i64) -> SampleOutcome {
        let offset_sample = peer_timestamp.saturating_sub(self.clock.now());

        let mut state = self.lock();
        state.filter.input(offset_sample);

        let count = state.filter.len();
        if count < MIN_TIME_SAMPLES || count % 2 == 0 {
            return SampleOutcome::Pending;
        }

        let median = state.filter.median();
        if median.unsigned_abs() < MAX_ADJUSTMENT_SECS.unsigned_abs() {
            if state.offset != median {
                info!("adjusted time offset {:+} seconds ({} samples)", median, count);
            }
            state.offset = median;
            return SampleOutcome::Adopted(median);
        }

        state.offset = 0;

        let peer_agrees = state
            .filter
            .sorted()
            .iter()
            .any(|&sample| {
                sample != 0 && sample.unsigned_abs() < PEER_AGREEMENT_SECS.unsigned_abs()
            });

        if !peer_agrees {
            if !state.clock_warning {
                warn!(
                    "no peer clock within {} minutes of ours (median offset {:+} s); \
                     please check that your computer's date and time are correct",
                    PEER_AGREEMENT_SECS / 60,
                    median
                );
            }
            state.clock_warning = true;
        }

        SampleOutcome::Distrusted { clock_warning: !peer_agrees }
    }

    /// Current offset in seconds
    pub fn offset(&self) -> i64 {
        self.lock().offset
    }

    /// Raised once peers disagree with the local clock; stays raised
    pub fn clock_warning(&self) -> bool {
        self.lock().clock_warning
    }

    /// Local time plus the consensus offset; not monotonic
    pub fn adjusted_now(&self) -> i64 {
        let offset = self.offset();
        self.clock.now().saturating_add(offset)
    }
}
