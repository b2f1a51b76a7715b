use super::enums::{Mode, Phase};
use super::timer::TimerState;
use chrono::{DateTime, Local};

/// Suffix appended to the clock in the window title
pub const TITLE_SUFFIX: &str = "Pomodoro Timer";

/// Split remaining seconds into zero-padded minute and second fields
pub fn clock_fields(remaining_secs: u32) -> (String, String) {
    let minutes = remaining_secs / 60;
    let seconds = remaining_secs % 60;
    (format!("{:02}", minutes), format!("{:02}", seconds))
}

/// Format remaining seconds as "MM:SS"
pub fn format_clock(remaining_secs: u32) -> String {
    let (minutes, seconds) = clock_fields(remaining_secs);
    format!("{}:{}", minutes, seconds)
}

/// Terminal window title, e.g. "24:59 - Pomodoro Timer"
pub fn window_title(remaining_secs: u32) -> String {
    format!("{} - {}", format_clock(remaining_secs), TITLE_SUFFIX)
}

/// Fraction of the current session already consumed (0.0 to 1.0)
pub fn progress_ratio(state: &TimerState) -> f64 {
    let total = state.mode.duration_secs();
    if total == 0 {
        return 1.0;
    }
    let elapsed = total.saturating_sub(state.remaining_secs);
    f64::from(elapsed) / f64::from(total)
}

/// Status line text for the current phase
pub fn status_text(phase: Phase, completed_at: Option<DateTime<Local>>) -> String {
    match (phase, completed_at) {
        (Phase::Paused, Some(at)) => format!("Session complete at {}", at.format("%H:%M")),
        (phase, _) => phase.label().to_string(),
    }
}

/// Label shown on a mode tab
pub fn mode_tab_label(mode: Mode) -> String {
    format!("[{}] {}", mode.hotkey(), mode.name())
}
