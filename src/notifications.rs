//! Completion alarm: terminal bell plus a best-effort desktop notification.
//! Playback is fire-and-forget; failures are logged and never reach the timer.

use crate::domain::Mode;
use notify_rust::Notification;
use std::io::{self, Stdout, Write};
use std::thread::{self, JoinHandle};

const NOTIFICATION_TITLE: &str = "Pomodoro Timer";

/// Something that can be rung when a session reaches zero
pub trait Alarm {
    fn ring(&mut self, mode: Mode);
}

/// Completion sound: the terminal bell stands in for a played tone.
///
/// The bell goes to `out` (stdout in production) so it reaches the terminal
/// even while the alternate screen is active.
#[derive(Debug)]
pub struct TerminalAlarm<W: Write = Stdout> {
    pub bell: bool,
    pub notify: bool,
    out: W,
}

impl TerminalAlarm {
    pub fn new(bell: bool, notify: bool) -> Self {
        Self::with_writer(bell, notify, io::stdout())
    }

    /// Alarm that does nothing (`--silent`)
    pub fn silent() -> Self {
        Self::new(false, false)
    }
}

impl<W: Write> TerminalAlarm<W> {
    pub fn with_writer(bell: bool, notify: bool, out: W) -> Self {
        Self { bell, notify, out }
    }
}

impl<W: Write> Alarm for TerminalAlarm<W> {
    fn ring(&mut self, mode: Mode) {
        if self.bell {
            ring_bell(&mut self.out);
        }
        if self.notify {
            // Detached; the worker exits on its own once the notification is posted
            notify_session_done(mode);
        }
    }
}

/// Emit the ASCII bell
fn ring_bell(out: &mut impl Write) {
    if let Err(e) = out.write_all(b"\x07").and_then(|_| out.flush()) {
        log::warn!("failed to ring terminal bell: {}", e);
    }
}

/// Message shown when a session of the given mode finishes
pub fn completion_message(mode: Mode) -> String {
    match mode {
        Mode::Pomodoro => "Pomodoro finished. Time for a break.".to_string(),
        Mode::ShortBreak | Mode::LongBreak => format!("{} is over. Back to work.", mode.name()),
    }
}

/// Desktop notification for a finished session
pub fn completion_notification(mode: Mode) -> Notification {
    let mut notification = Notification::new();
    notification
        .summary(NOTIFICATION_TITLE)
        .body(&completion_message(mode))
        .appname("tomato");
    notification
}

/// Post the completion notification from a worker thread so a slow
/// notification daemon never stalls the event loop
pub fn notify_session_done(mode: Mode) -> JoinHandle<()> {
    let notification = completion_notification(mode);
    thread::spawn(move || {
        if let Err(e) = notification.show() {
            log::warn!("desktop notification unavailable: {}", e);
        }
    })
}

/// Test alarm that counts how often it was rung. Clones share the counter.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingAlarm {
    rings: std::rc::Rc<std::cell::RefCell<Vec<Mode>>>,
}

#[cfg(test)]
impl RecordingAlarm {
    pub fn count(&self) -> usize {
        self.rings.borrow().len()
    }

    pub fn modes(&self) -> Vec<Mode> {
        self.rings.borrow().clone()
    }
}

#[cfg(test)]
impl Alarm for RecordingAlarm {
    fn ring(&mut self, mode: Mode) {
        self.rings.borrow_mut().push(mode);
    }
}
