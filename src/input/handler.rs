use crate::app::{AppState, Command};
use crate::domain::{Mode, UiMode};
use crate::notifications::Alarm;
use crate::ticker::Scheduler;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key<S: Scheduler, A: Alarm>(app: &mut AppState<S, A>, key: KeyEvent) -> bool {
    match translate_key(app, key) {
        Some(command) => app.apply(command),
        None => false,
    }
}

/// Map a key press to a command without touching any state
pub fn translate_key<S: Scheduler, A: Alarm>(
    app: &AppState<S, A>,
    key: KeyEvent,
) -> Option<Command> {
    // Ctrl+C always quits, raw mode swallows SIGINT
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match app.ui_mode {
        UiMode::Normal => translate_normal_mode(app, key),
        UiMode::FocusPrompt => translate_focus_prompt(app, key),
    }
}

/// Keys in normal mode
fn translate_normal_mode<S: Scheduler, A: Alarm>(
    app: &AppState<S, A>,
    key: KeyEvent,
) -> Option<Command> {
    match key.code {
        // Start opens the focus prompt; ignored while running
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter => {
            if app.timer.is_running() {
                None
            } else {
                Some(Command::OpenFocusPrompt)
            }
        }

        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => Some(Command::Pause),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),

        // Mode selectors
        KeyCode::Char(c @ '1'..='3') => mode_for_hotkey(c).map(Command::SelectMode),

        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),

        _ => None,
    }
}

/// Keys while the focus prompt is open
fn translate_focus_prompt<S: Scheduler, A: Alarm>(
    app: &AppState<S, A>,
    key: KeyEvent,
) -> Option<Command> {
    match key.code {
        // Enter is the same as the confirm gesture
        KeyCode::Enter => {
            let input = app
                .focus_prompt
                .as_ref()
                .map(|prompt| prompt.input.clone())
                .unwrap_or_default();
            Some(Command::RequestStart(input))
        }

        KeyCode::Esc => Some(Command::CancelFocusPrompt),

        KeyCode::Backspace => Some(Command::PromptBackspace),

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::PromptInput(c))
        }

        _ => None,
    }
}

fn mode_for_hotkey(c: char) -> Option<Mode> {
    Mode::all().iter().copied().find(|mode| mode.hotkey() == c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::create_test_app;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_transport_keys() {
        let (app, _, _) = create_test_app();
        assert_eq!(translate_key(&app, key(KeyCode::Char('s'))), Some(Command::OpenFocusPrompt));
        assert_eq!(translate_key(&app, key(KeyCode::Enter)), Some(Command::OpenFocusPrompt));
        assert_eq!(translate_key(&app, key(KeyCode::Char('p'))), Some(Command::Pause));
        assert_eq!(translate_key(&app, key(KeyCode::Char(' '))), Some(Command::Pause));
        assert_eq!(translate_key(&app, key(KeyCode::Char('r'))), Some(Command::Reset));
        assert_eq!(translate_key(&app, key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_mode_selector_keys() {
        let (app, _, _) = create_test_app();
        assert_eq!(
            translate_key(&app, key(KeyCode::Char('1'))),
            Some(Command::SelectMode(Mode::Pomodoro))
        );
        assert_eq!(
            translate_key(&app, key(KeyCode::Char('2'))),
            Some(Command::SelectMode(Mode::ShortBreak))
        );
        assert_eq!(
            translate_key(&app, key(KeyCode::Char('3'))),
            Some(Command::SelectMode(Mode::LongBreak))
        );
        assert_eq!(translate_key(&app, key(KeyCode::Char('4'))), None);
    }

    #[test]
    fn test_start_key_ignored_while_running() {
        let (mut app, _, _) = create_test_app();
        app.apply(Command::RequestStart("focus".to_string()));
        assert_eq!(translate_key(&app, key(KeyCode::Char('s'))), None);
    }

    #[test]
    fn test_handle_quit() {
        let (mut app, _, _) = create_test_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut app, ctrl_c));
    }

    #[test]
    fn test_prompt_keys_emit_commands() {
        let (mut app, _, _) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('s')));
        assert_eq!(app.ui_mode, UiMode::FocusPrompt);

        // Digits and letters are text while the prompt is open
        assert_eq!(translate_key(&app, key(KeyCode::Char('2'))), Some(Command::PromptInput('2')));
        assert_eq!(translate_key(&app, key(KeyCode::Char('q'))), Some(Command::PromptInput('q')));
        assert_eq!(translate_key(&app, key(KeyCode::Backspace)), Some(Command::PromptBackspace));
        assert_eq!(translate_key(&app, key(KeyCode::Esc)), Some(Command::CancelFocusPrompt));

        handle_key(&mut app, key(KeyCode::Char('h')));
        handle_key(&mut app, key(KeyCode::Char('i')));
        assert_eq!(
            translate_key(&app, key(KeyCode::Enter)),
            Some(Command::RequestStart("hi".to_string()))
        );
    }

    #[test]
    fn test_enter_with_text_starts_timer() {
        let (mut app, _, _) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('s')));
        for c in "read".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }

        let should_quit = handle_key(&mut app, key(KeyCode::Enter));
        assert!(!should_quit);
        assert!(app.timer.is_running());
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.focus_prompt.is_none());
    }

    #[test]
    fn test_enter_with_blank_input_does_nothing() {
        let (mut app, _, _) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('s')));
        handle_key(&mut app, key(KeyCode::Char(' ')));
        handle_key(&mut app, key(KeyCode::Enter));

        assert!(!app.timer.is_running());
        assert_eq!(app.ui_mode, UiMode::FocusPrompt);
    }

    #[test]
    fn test_escape_cancels_prompt() {
        let (mut app, _, _) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('s')));
        handle_key(&mut app, key(KeyCode::Char('a')));
        let should_quit = handle_key(&mut app, key(KeyCode::Esc));

        assert!(!should_quit);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(!app.timer.is_running());
    }

    #[test]
    fn test_mode_key_while_running_cancels_run() {
        let (mut app, _, _) = create_test_app();
        app.apply(Command::RequestStart("write".to_string()));
        handle_key(&mut app, key(KeyCode::Char('2')));

        assert!(!app.timer.is_running());
        assert_eq!(app.timer.state().mode, Mode::ShortBreak);
        assert_eq!(app.timer.remaining_secs(), 300);
    }
}
