use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, ui_mode: UiMode, area: Rect) {
    let hints = match ui_mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" s start   "),
            Span::raw("p pause   "),
            Span::raw("r reset   "),
            Span::raw("1/2/3 mode   "),
            Span::raw("q quit"),
        ]),
        UiMode::FocusPrompt => Line::from(vec![
            Span::raw(" Enter confirm   "),
            Span::raw("Esc cancel"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
