use crate::domain::{window_title, Mode, Phase, Timer, TimerState, UiMode};
use crate::notifications::{Alarm, TerminalAlarm};
use crate::ticker::{IntervalScheduler, Scheduler};
use chrono::{DateTime, Local};

/// Focus prompt state. The input is dropped when the prompt closes.
#[derive(Debug, Clone, Default)]
pub struct FocusPromptState {
    pub input: String,
}

/// Commands produced by the input layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenFocusPrompt,
    CancelFocusPrompt,
    PromptInput(char),
    PromptBackspace,
    RequestStart(String),
    Pause,
    Reset,
    SelectMode(Mode),
    Quit,
}

/// Main application state
pub struct AppState<S: Scheduler = IntervalScheduler, A: Alarm = TerminalAlarm> {
    pub timer: Timer<S, A>,
    pub ui_mode: UiMode,
    pub focus_prompt: Option<FocusPromptState>,
    /// When the last session crossed zero; cleared by the next command
    pub completed_at: Option<DateTime<Local>>,
    last_title: Option<String>,
}

impl<S: Scheduler, A: Alarm> AppState<S, A> {
    pub fn new(scheduler: S, alarm: A) -> Self {
        Self {
            timer: Timer::new(scheduler, alarm),
            ui_mode: UiMode::Normal,
            focus_prompt: None,
            completed_at: None,
            last_title: None,
        }
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn phase(&self) -> Phase {
        self.timer.phase()
    }

    /// Apply a command. Returns true when the app should quit.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::OpenFocusPrompt => self.open_focus_prompt(),
            Command::CancelFocusPrompt => self.close_focus_prompt(),
            Command::PromptInput(c) => {
                if let Some(prompt) = &mut self.focus_prompt {
                    prompt.input.push(c);
                }
            }
            Command::PromptBackspace => {
                if let Some(prompt) = &mut self.focus_prompt {
                    prompt.input.pop();
                }
            }
            Command::RequestStart(focus_task) => self.confirm_focus(&focus_task),
            Command::Pause => self.timer.pause(),
            Command::Reset => {
                self.completed_at = None;
                self.timer.reset();
            }
            Command::SelectMode(mode) => {
                self.completed_at = None;
                self.timer.select_mode(mode);
            }
            Command::Quit => return true,
        }
        false
    }

    /// Show the focus prompt with an empty input. Only while not running.
    pub fn open_focus_prompt(&mut self) {
        if self.timer.is_running() {
            return;
        }
        self.focus_prompt = Some(FocusPromptState::default());
        self.ui_mode = UiMode::FocusPrompt;
    }

    pub fn close_focus_prompt(&mut self) {
        self.focus_prompt = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Try to start with the given focus task; the prompt stays open if it is blank
    fn confirm_focus(&mut self, focus_task: &str) {
        if self.timer.request_start(focus_task) {
            self.completed_at = None;
            self.close_focus_prompt();
        }
    }

    /// Drain due countdown ticks
    pub fn tick(&mut self) {
        let outcome = self.timer.advance();
        if outcome.completed {
            self.completed_at = Some(Local::now());
        }
    }

    /// New window title if it changed since the last call
    pub fn take_title_update(&mut self) -> Option<String> {
        let title = window_title(self.timer.remaining_secs());
        if self.last_title.as_deref() == Some(title.as_str()) {
            return None;
        }
        self.last_title = Some(title.clone());
        Some(title)
    }
}
