use super::enums::{Mode, Phase};
use crate::notifications::Alarm;
use crate::ticker::{Scheduler, COUNTDOWN_PERIOD};

/// Snapshot of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub mode: Mode,
    pub remaining_secs: u32,
    pub running: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        let mode = Mode::default();
        Self {
            mode,
            remaining_secs: mode.duration_secs(),
            running: false,
        }
    }
}

/// Outcome of draining due ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Advance {
    /// Ticks actually applied
    pub ticks: u32,
    /// The session crossed zero and the alarm rang
    pub completed: bool,
}

/// Countdown state machine.
///
/// Owns the periodic tick through `S` and rings `A` exactly once when a run
/// crosses zero. Every command is either applied or silently ignored.
pub struct Timer<S: Scheduler, A: Alarm> {
    state: TimerState,
    scheduler: S,
    alarm: A,
}

impl<S: Scheduler, A: Alarm> Timer<S, A> {
    pub fn new(scheduler: S, alarm: A) -> Self {
        Self {
            state: TimerState::default(),
            scheduler,
            alarm,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_secs(&self) -> u32 {
        self.state.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn phase(&self) -> Phase {
        if self.state.running {
            Phase::Running
        } else if self.state.remaining_secs == self.state.mode.duration_secs() {
            Phase::Idle
        } else {
            Phase::Paused
        }
    }

    /// Start counting down. Ignored while running or when the focus task is blank.
    pub fn request_start(&mut self, focus_task: &str) -> bool {
        if self.state.running || focus_task.trim().is_empty() {
            return false;
        }

        self.scheduler.start(COUNTDOWN_PERIOD);
        self.state.running = true;
        log::info!(
            "started {} with {}s remaining",
            self.state.mode.id(),
            self.state.remaining_secs
        );
        true
    }

    /// Apply one elapsed period. Returns true if this tick completed the session.
    pub fn tick(&mut self) -> bool {
        if !self.state.running {
            return false;
        }

        match self.state.remaining_secs {
            // Nothing left to count; clamp and stop without crossing the boundary again
            0 => {
                self.halt();
                false
            }
            1 => {
                self.state.remaining_secs = 0;
                self.halt();
                log::info!("{} complete", self.state.mode.id());
                self.alarm.ring(self.state.mode);
                true
            }
            _ => {
                self.state.remaining_secs -= 1;
                false
            }
        }
    }

    /// Apply every tick the scheduler reports as due. Stops early once the run ends.
    pub fn advance(&mut self) -> Advance {
        let mut outcome = Advance::default();
        if !self.scheduler.is_scheduled() {
            return outcome;
        }

        let due = self.scheduler.take_due();
        for _ in 0..due {
            if !self.state.running {
                break;
            }
            outcome.completed |= self.tick();
            outcome.ticks += 1;
        }
        outcome
    }

    /// Stop the countdown, keeping the remaining time
    pub fn pause(&mut self) {
        if self.state.running {
            log::info!("paused at {}s", self.state.remaining_secs);
        }
        self.halt();
    }

    /// Stop and restore the full duration of the current mode
    pub fn reset(&mut self) {
        self.halt();
        self.state.remaining_secs = self.state.mode.duration_secs();
        log::debug!("reset {}", self.state.mode.id());
    }

    /// Switch session type. Cancels a run in progress.
    pub fn select_mode(&mut self, mode: Mode) {
        self.halt();
        self.state.mode = mode;
        self.state.remaining_secs = mode.duration_secs();
        log::info!("mode set to {}", mode.id());
    }

    fn halt(&mut self) {
        self.scheduler.cancel();
        self.state.running = false;
    }
}
