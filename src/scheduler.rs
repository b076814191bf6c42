use embassy_time::{Duration, Instant, Timer};

use crate::{
    config::{TOUCH_POLL_INTERVAL_MS, TOUCH_REJECT_BACKOFF_MS},
    pipeline::TouchFilter,
    sensor::SensorReader,
    sink::InputSink,
    types::CycleOutcome,
};

/// Decides how long to wait before the next poll cycle.
#[derive(Clone, Copy, Debug)]
pub struct PollScheduler {
    interval: Duration,
    backoff: Duration,
    backoff_pending: bool,
}

impl Default for PollScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl PollScheduler {
    pub const fn new() -> Self {
        Self::with_timing(
            Duration::from_millis(TOUCH_POLL_INTERVAL_MS),
            Duration::from_millis(TOUCH_REJECT_BACKOFF_MS),
        )
    }

    pub const fn with_timing(interval: Duration, backoff: Duration) -> Self {
        Self {
            interval,
            backoff,
            backoff_pending: false,
        }
    }

    pub fn record(&mut self, outcome: &CycleOutcome) {
        if outcome.is_rejected() {
            self.backoff_pending = true;
        }
    }

    pub fn backoff_pending(&self) -> bool {
        self.backoff_pending
    }

    /// Consumes any pending backoff.
    pub fn next_delay(&mut self) -> Duration {
        if core::mem::take(&mut self.backoff_pending) {
            self.interval + self.backoff
        } else {
            self.interval
        }
    }
}

/// Drives a `TouchFilter` from `embassy-time` timers.
///
/// `&mut self` on every entry point keeps a single cycle in flight.
pub struct TouchPoller<R, S> {
    filter: TouchFilter,
    scheduler: PollScheduler,
    reader: R,
    sink: S,
    epoch: Instant,
}

impl<R, S> TouchPoller<R, S>
where
    R: SensorReader,
    S: InputSink,
{
    pub fn new(reader: R, sink: S) -> Self {
        Self::with_parts(TouchFilter::new(), PollScheduler::new(), reader, sink)
    }

    pub fn with_parts(filter: TouchFilter, scheduler: PollScheduler, reader: R, sink: S) -> Self {
        Self {
            filter,
            scheduler,
            reader,
            sink,
            epoch: Instant::now(),
        }
    }

    pub fn filter(&self) -> &TouchFilter {
        &self.filter
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Runs one cycle now, then waits out the interval it earned.
    pub async fn poll_once(&mut self) -> CycleOutcome {
        let now_ms = Instant::now()
            .saturating_duration_since(self.epoch)
            .as_millis();
        let outcome = self.filter.poll(now_ms, &mut self.reader, &mut self.sink);
        self.scheduler.record(&outcome);
        if let CycleOutcome::Rejected { reason, released } = outcome {
            log::debug!(
                "ns2009: backoff reason={} released={}",
                reason.label(),
                released
            );
        }
        Timer::after(self.scheduler.next_delay()).await;
        outcome
    }

    pub async fn run(&mut self) -> ! {
        loop {
            self.poll_once().await;
        }
    }

    pub fn into_parts(self) -> (R, S) {
        (self.reader, self.sink)
    }
}
