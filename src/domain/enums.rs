/// Session type. Each one carries a fixed preset duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Pomodoro,
    ShortBreak,
    LongBreak,
}

impl Mode {
    /// Preset length of a session in minutes
    pub fn duration_minutes(self) -> u32 {
        match self {
            Mode::Pomodoro => 25,
            Mode::ShortBreak => 5,
            Mode::LongBreak => 15,
        }
    }

    /// Preset length of a session in seconds
    pub fn duration_secs(self) -> u32 {
        self.duration_minutes() * 60
    }

    /// Stable identifier used by the mode selector controls
    pub fn id(self) -> &'static str {
        match self {
            Mode::Pomodoro => "pomodoro",
            Mode::ShortBreak => "shortBreak",
            Mode::LongBreak => "longBreak",
        }
    }

    /// Parse a mode selector identifier
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "pomodoro" => Some(Mode::Pomodoro),
            "shortBreak" => Some(Mode::ShortBreak),
            "longBreak" => Some(Mode::LongBreak),
            _ => None,
        }
    }

    /// Get the display name for this mode
    pub fn name(self) -> &'static str {
        match self {
            Mode::Pomodoro => "Pomodoro",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    /// Selector key shown next to the tab
    pub fn hotkey(self) -> char {
        match self {
            Mode::Pomodoro => '1',
            Mode::ShortBreak => '2',
            Mode::LongBreak => '3',
        }
    }

    /// Get all modes in display order
    pub fn all() -> &'static [Mode] {
        &[Mode::Pomodoro, Mode::ShortBreak, Mode::LongBreak]
    }
}

/// Observable phase of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not running, full duration for the current mode
    Idle,
    Running,
    /// Not running, part of the duration already consumed
    Paused,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "Ready",
            Phase::Running => "Running",
            Phase::Paused => "Paused",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    FocusPrompt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_table() {
        assert_eq!(Mode::Pomodoro.duration_minutes(), 25);
        assert_eq!(Mode::ShortBreak.duration_minutes(), 5);
        assert_eq!(Mode::LongBreak.duration_minutes(), 15);
        assert_eq!(Mode::Pomodoro.duration_secs(), 1500);
    }

    #[test]
    fn test_mode_ids() {
        for mode in Mode::all() {
            assert_eq!(Mode::from_id(mode.id()), Some(*mode));
        }
        assert_eq!(Mode::from_id("short_break"), None);
        assert_eq!(Mode::from_id(""), None);
    }

    #[test]
    fn test_default_mode_is_pomodoro() {
        assert_eq!(Mode::default(), Mode::Pomodoro);
    }

    #[test]
    fn test_hotkeys_are_distinct() {
        let keys: Vec<char> = Mode::all().iter().map(|m| m.hotkey()).collect();
        assert_eq!(keys, vec!['1', '2', '3']);
    }
}
