pub mod enums;
pub mod timer;
pub mod views;

pub use enums::{Mode, Phase, UiMode};
pub use timer::{Timer, TimerState};
pub use views::{clock_fields, mode_tab_label, progress_ratio, status_text, window_title};
