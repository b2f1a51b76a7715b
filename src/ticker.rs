use std::time::{Duration, Instant};

/// Default event poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Nominal countdown period
pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// Get event poll duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Source of monotonic time
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by `Instant::now`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Start/cancel a recurring action and report how many periods have elapsed.
///
/// Cancellation is synchronous: once `cancel` returns, `take_due` yields 0
/// until the next `start`.
pub trait Scheduler {
    /// Schedule a recurring action, replacing any previous schedule
    fn start(&mut self, period: Duration);

    /// Drop the current schedule
    fn cancel(&mut self);

    fn is_scheduled(&self) -> bool;

    /// Number of periods that elapsed since the last call, consuming them
    fn take_due(&mut self) -> u32;
}

/// Interval scheduler that counts elapsed periods against a `Clock`.
///
/// Deadlines advance by whole periods from the start instant, so a late
/// poll reports every period it missed.
#[derive(Debug)]
pub struct IntervalScheduler<C: Clock = SystemClock> {
    clock: C,
    period: Duration,
    next_due: Option<Instant>,
}

impl<C: Clock> IntervalScheduler<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            period: COUNTDOWN_PERIOD,
            next_due: None,
        }
    }
}

impl Default for IntervalScheduler<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> Scheduler for IntervalScheduler<C> {
    fn start(&mut self, period: Duration) {
        self.period = period;
        self.next_due = Some(self.clock.now() + period);
    }

    fn cancel(&mut self) {
        self.next_due = None;
    }

    fn is_scheduled(&self) -> bool {
        self.next_due.is_some()
    }

    fn take_due(&mut self) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };
        if self.period.is_zero() {
            return 0;
        }

        let now = self.clock.now();
        let mut count = 0;
        while due <= now {
            count += 1;
            due += self.period;
        }
        self.next_due = Some(due);
        count
    }
}

/// Hand-driven clock for deterministic tests. Clones share the same time.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset: std::rc::Rc<std::cell::Cell<Duration>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Default::default(),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> (ManualClock, IntervalScheduler<ManualClock>) {
        let clock = ManualClock::new();
        (clock.clone(), IntervalScheduler::new(clock))
    }

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_nothing_due_before_start() {
        let (clock, mut sched) = scheduler();
        clock.advance_secs(10);
        assert!(!sched.is_scheduled());
        assert_eq!(sched.take_due(), 0);
    }

    #[test]
    fn test_due_counts_whole_periods() {
        let (clock, mut sched) = scheduler();
        sched.start(COUNTDOWN_PERIOD);

        clock.advance(Duration::from_millis(999));
        assert_eq!(sched.take_due(), 0);

        clock.advance(Duration::from_millis(1));
        assert_eq!(sched.take_due(), 1);
        assert_eq!(sched.take_due(), 0);

        clock.advance(Duration::from_millis(3500));
        assert_eq!(sched.take_due(), 3);

        // Remaining half period carries over
        clock.advance(Duration::from_millis(500));
        assert_eq!(sched.take_due(), 1);
    }

    #[test]
    fn test_cancel_is_immediate() {
        let (clock, mut sched) = scheduler();
        sched.start(COUNTDOWN_PERIOD);
        clock.advance_secs(5);
        sched.cancel();

        assert!(!sched.is_scheduled());
        assert_eq!(sched.take_due(), 0);
        clock.advance_secs(5);
        assert_eq!(sched.take_due(), 0);
    }

    #[test]
    fn test_restart_resets_phase() {
        let (clock, mut sched) = scheduler();
        sched.start(COUNTDOWN_PERIOD);
        clock.advance(Duration::from_millis(900));
        sched.cancel();

        sched.start(COUNTDOWN_PERIOD);
        clock.advance(Duration::from_millis(900));
        assert_eq!(sched.take_due(), 0);
        clock.advance(Duration::from_millis(100));
        assert_eq!(sched.take_due(), 1);
    }
}
