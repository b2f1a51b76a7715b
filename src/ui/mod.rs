pub mod clock_pane;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod mode_tabs;
pub mod status_pane;
pub mod styles;

use crate::app::AppState;
use crate::notifications::Alarm;
use crate::ticker::Scheduler;
use clock_pane::render_clock_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_focus_prompt;
use mode_tabs::render_mode_tabs;
use ratatui::Frame;
use status_pane::render_status_pane;

/// Main render function - draws the entire UI
pub fn render<S: Scheduler, A: Alarm>(f: &mut Frame, app: &AppState<S, A>) {
    let size = f.size();
    let layout = create_layout(size);
    let state = app.timer_state();
    let phase = app.phase();

    render_keybindings(f, app.ui_mode, layout.keybindings_area);
    render_mode_tabs(f, state.mode, layout.tabs_area);
    render_clock_pane(f, &state, phase, layout.clock_area);
    render_status_pane(f, phase, app.completed_at, layout.status_area);

    // Render focus prompt if active
    if let Some(prompt) = &app.focus_prompt {
        render_focus_prompt(f, prompt, size);
    }
}
